use std::{error::Error, fmt::Debug};

use anyhow::Context;
use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};
use thiserror::Error;

use crate::{domain::OrderStatus, models::{NewOrder, NewOrderItem, Order, OrderItem, OrderWithItems}, schema::{order_items, orders}, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

// A requested order line before the order exists
#[derive(Debug, Clone, Copy)]
pub struct OrderLine{
    pub menu_item_id: i32,
    pub quantity: i32
}

// Error associated with creating an order along with its order_items
#[derive(Error)]
pub enum CreateOrderError{
    #[error("Tokio threadpool error occured")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    RunQueryError(#[from] diesel::result::Error)
}

impl Debug for CreateOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Order row and every order_item row are created in one transaction, or none are
#[tracing::instrument(
    "Creating order in order table along with order items",
    skip(conn, lines)
)]
pub async fn create_order_with_items(
    mut conn: DbConnection,
    customer_id: i32,
    restaurant_id: i32,
    total_price: f64,
    lines: Vec<OrderLine>
) -> Result<OrderWithItems, CreateOrderError> {

    let ret = spawn_blocking_with_tracing(move || {
        conn.transaction::<OrderWithItems, CreateOrderError, _>(|conn| {
            let new_order = NewOrder{
                customer_id,
                restaurant_id,
                total_price,
                status: OrderStatus::Pending.to_string()
            };

            let order = diesel::insert_into(orders::table)
                .values(&new_order)
                .returning(Order::as_returning())
                .get_result::<Order>(conn)?;

            if lines.is_empty() {
                return Ok(OrderWithItems{ order, order_items: Vec::new() });
            }

            let new_items: Vec<NewOrderItem> = lines
                .iter()
                .map(|line| NewOrderItem{
                    order_id: order.id,
                    menu_item_id: line.menu_item_id,
                    quantity: line.quantity
                })
                .collect();

            let order_items = diesel::insert_into(order_items::table)
                .values(&new_items)
                .returning(OrderItem::as_returning())
                .get_results::<OrderItem>(conn)?;

            Ok(OrderWithItems{ order, order_items })
        })
    })
    .await??;

    Ok(ret)
}

fn load_order_items(conn: &mut DbConnection, order_id: i32) -> Result<Vec<OrderItem>, diesel::result::Error>{
    order_items::table
        .filter(order_items::order_id.eq(order_id))
        .order(order_items::id.asc())
        .select(OrderItem::as_select())
        .load::<OrderItem>(conn)
}

#[tracing::instrument(
    "Getting order along with associated order_items",
    skip(conn)
)]
pub async fn get_order_with_items(
    mut conn: DbConnection,
    order_id: i32
) -> Result<Option<OrderWithItems>, anyhow::Error> {

    let res = spawn_blocking_with_tracing(move || {
        conn.transaction::<Option<OrderWithItems>, anyhow::Error, _>(|conn| {
            let order = orders::table
                .find(order_id)
                .select(Order::as_select())
                .first::<Order>(conn)
                .optional()
                .context("Failed to get order by id")?;

            let order = match order {
                Some(order) => order,
                None => return Ok(None)
            };

            let order_items = load_order_items(conn, order.id)
                .context("Failed to get order items by order_id")?;

            Ok(Some(OrderWithItems{ order, order_items }))
        })
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

// Error associated with updating order status
#[derive(Error)]
pub enum UpdateOrderStatusError{
    #[error("Tokio threadpool error occured")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    RunQueryError(#[from] diesel::result::Error),
    #[error("order_id: {0} doesn't exist")]
    NoOrderIdError(i32)
}

impl Debug for UpdateOrderStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Updating order status",
    skip(conn)
)]
pub async fn update_order_status(
    mut conn: DbConnection,
    order_id: i32,
    status: OrderStatus
) -> Result<Order, UpdateOrderStatusError> {

    let updated = spawn_blocking_with_tracing(move || {
        diesel::update(orders::table.find(order_id))
            .set(orders::status.eq(status.as_str()))
            .returning(Order::as_returning())
            .get_result::<Order>(&mut conn)
            .optional()
    })
    .await??;

    updated.ok_or(UpdateOrderStatusError::NoOrderIdError(order_id))
}
