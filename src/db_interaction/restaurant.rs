use anyhow::Context;
use diesel::dsl::sum;
use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{domain::OrderStatus, models::{NewRestaurant, Restaurant}, schema::{orders, restaurants}, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

#[tracing::instrument(
    "Inserting restaurant into the database",
    skip(conn)
)]
pub async fn insert_restaurant(
    mut conn: DbConnection,
    new_restaurant: NewRestaurant
) -> Result<Restaurant, anyhow::Error> {
    let res = spawn_blocking_with_tracing(move || {
        diesel::insert_into(restaurants::table)
            .values(&new_restaurant)
            .returning(Restaurant::as_returning())
            .get_result::<Restaurant>(&mut conn)
            .context("Failed to insert into restaurants table")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(res)
}

// Sum of total_price over COMPLETED orders, 0 when there are none
#[tracing::instrument(
    "Computing revenue of restaurant",
    skip(conn)
)]
pub async fn get_restaurant_revenue(
    mut conn: DbConnection,
    restaurant_id: i32
) -> Result<f64, anyhow::Error> {
    let revenue = spawn_blocking_with_tracing(move || {
        orders::table
            .filter(orders::restaurant_id.eq(restaurant_id))
            .filter(orders::status.eq(OrderStatus::Completed.as_str()))
            .select(sum(orders::total_price))
            .get_result::<Option<f64>>(&mut conn)
            .context("Failed to sum total_price of completed orders")
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(revenue.unwrap_or(0.0))
}
