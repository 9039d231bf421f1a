use std::{error::Error, fmt::Debug};

use anyhow::Context;
use diesel::dsl::sum;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};
use thiserror::Error;

use crate::{models::{MenuItem, MenuItemChanges, NewMenuItem, TopMenuItem}, schema::{menu_items, order_items}, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

#[tracing::instrument(
    "Getting menu items of restaurant",
    skip(conn)
)]
pub async fn get_menu_items(
    mut conn: DbConnection,
    restaurant_id: i32
) -> Result<Vec<MenuItem>, anyhow::Error> {
    let res = spawn_blocking_with_tracing(move || {
        menu_items::table
            .filter(menu_items::restaurant_id.eq(restaurant_id))
            .order(menu_items::id.asc())
            .select(MenuItem::as_select())
            .load::<MenuItem>(&mut conn)
            .context("Failed to get menu items")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

// The restaurant reference is checked by the foreign key only
#[tracing::instrument(
    "Insert a menu item to db",
    skip(conn)
)]
pub async fn insert_menu_item(
    mut conn: DbConnection,
    new_menu_item: NewMenuItem
) -> Result<MenuItem, anyhow::Error> {
    let res = spawn_blocking_with_tracing(move || {
        diesel::insert_into(menu_items::table)
            .values(&new_menu_item)
            .returning(MenuItem::as_returning())
            .get_result::<MenuItem>(&mut conn)
            .context("Failed to insert into menu_items table")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

// Error associated with updating price / availability of menu item
#[derive(Error)]
pub enum UpdateMenuItemError{
    #[error("Tokio threadpool error occured")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    RunQueryError(#[from] diesel::result::Error),
    #[error("menu_item_id: {0} doesn't exist")]
    NoMenuItemError(i32)
}

impl Debug for UpdateMenuItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Updating menu item",
    skip(conn)
)]
pub async fn update_menu_item(
    mut conn: DbConnection,
    menu_item_id: i32,
    changes: MenuItemChanges
) -> Result<MenuItem, UpdateMenuItemError> {

    let updated = spawn_blocking_with_tracing(move || {
        // diesel refuses an UPDATE without columns, nothing to change means a plain read
        if changes.is_empty() {
            return menu_items::table
                .find(menu_item_id)
                .select(MenuItem::as_select())
                .first::<MenuItem>(&mut conn)
                .optional();
        }

        diesel::update(menu_items::table.find(menu_item_id))
            .set(&changes)
            .returning(MenuItem::as_returning())
            .get_result::<MenuItem>(&mut conn)
            .optional()
    })
    .await??;

    updated.ok_or(UpdateMenuItemError::NoMenuItemError(menu_item_id))
}

// Menu items ranked by total ordered quantity, ties go to the lower menu item id
#[tracing::instrument(
    "Getting most ordered menu items",
    skip(conn)
)]
pub async fn get_top_menu_items(
    mut conn: DbConnection,
    limit: i64
) -> Result<Vec<TopMenuItem>, anyhow::Error> {
    let rows = spawn_blocking_with_tracing(move || {
        order_items::table
            .group_by(order_items::menu_item_id)
            .select((order_items::menu_item_id, sum(order_items::quantity)))
            .order_by(sum(order_items::quantity).desc())
            .then_order_by(order_items::menu_item_id.asc())
            .limit(limit)
            .load::<(i32, Option<i64>)>(&mut conn)
            .context("Failed to get quantity grouped by menu item")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(rows
        .into_iter()
        .map(|(menu_item_id, total_quantity)| TopMenuItem{
            menu_item_id,
            total_quantity: total_quantity.unwrap_or(0)
        })
        .collect())
}
