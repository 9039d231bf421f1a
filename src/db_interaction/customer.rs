use std::{error::Error, fmt::Debug};

use anyhow::Context;
use diesel::dsl::count;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};
use thiserror::Error;

use crate::{models::{Customer, NewCustomer, Order, TopCustomer}, schema::{customers, orders}, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection}};

// Error associated with inserting customer to customers table
#[derive(Error)]
pub enum CustomerInsertError{
    #[error("email field is not unique")]
    EmailNotUnique(#[source] DieselError),
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to insert into customers table")]
    QueryError(#[source] DieselError)
}

impl Debug for CustomerInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Only a unique violation on the email constraint counts as a duplicate customer
fn classify_insert_error(e: DieselError) -> CustomerInsertError{
    match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
            if info.constraint_name().is_some_and(|name| name.contains("email")) => {
            CustomerInsertError::EmailNotUnique(e)
        },
        _ => CustomerInsertError::QueryError(e)
    }
}

#[tracing::instrument(
    "Inserting customer into the database",
    skip(conn)
)]
pub async fn insert_customer(
    mut conn: DbConnection,
    new_customer: NewCustomer
) -> Result<Customer, CustomerInsertError> {

    let customer = spawn_blocking_with_tracing(move || {
        diesel::insert_into(customers::table)
            .values(&new_customer)
            .returning(Customer::as_returning())
            .get_result::<Customer>(&mut conn)
            .map_err(classify_insert_error)
    })
    .await??;

    Ok(customer)
}

#[tracing::instrument(
    "Getting customer by id from db",
    skip(conn)
)]
pub async fn get_customer_by_id(
    mut conn: DbConnection,
    customer_id: i32
) -> Result<Option<Customer>, anyhow::Error> {
    let res = spawn_blocking_with_tracing(move || {
        customers::table
            .find(customer_id)
            .select(Customer::as_select())
            .first::<Customer>(&mut conn)
            .optional()
            .context("Failed to get customer by id")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

#[tracing::instrument(
    "Getting orders placed by customer",
    skip(conn)
)]
pub async fn get_orders_for_customer(
    mut conn: DbConnection,
    customer_id: i32
) -> Result<Vec<Order>, anyhow::Error> {
    let res = spawn_blocking_with_tracing(move || {
        orders::table
            .filter(orders::customer_id.eq(customer_id))
            .order(orders::id.asc())
            .select(Order::as_select())
            .load::<Order>(&mut conn)
            .context("Failed to get orders of customer")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

// Customers ranked by number of orders, ties go to the lower customer id
#[tracing::instrument(
    "Getting customers with the most orders",
    skip(conn)
)]
pub async fn get_top_customers(
    mut conn: DbConnection,
    limit: i64
) -> Result<Vec<TopCustomer>, anyhow::Error> {
    let rows = spawn_blocking_with_tracing(move || {
        orders::table
            .group_by(orders::customer_id)
            .select((orders::customer_id, count(orders::id)))
            .order_by(count(orders::id).desc())
            .then_order_by(orders::customer_id.asc())
            .limit(limit)
            .load::<(i32, i64)>(&mut conn)
            .context("Failed to get order count grouped by customer")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(rows
        .into_iter()
        .map(|(customer_id, order_count)| TopCustomer{ customer_id, order_count })
        .collect())
}
