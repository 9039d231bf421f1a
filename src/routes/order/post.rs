use actix_web::{web, HttpResponse};
use anyhow::Context;
use serde::Deserialize;

use crate::{db_interaction::{create_order_with_items, OrderLine}, domain::{OrderQuantity, Price}, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemJson{
    pub menu_item_id: Option<i32>,
    pub quantity: Option<i32>
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderJson{
    pub customer_id: Option<i32>,
    pub restaurant_id: Option<i32>,
    pub total_price: Option<f64>,
    pub items: Option<Vec<OrderItemJson>>
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, ApiError>{
    value.ok_or_else(|| ApiError::ValidationError(format!("{} is required", field)))
}

#[tracing::instrument(
    "Posting order",
    skip(pool)
)]
pub async fn post_order(
    pool: web::Data<DbPool>,
    json: web::Json<OrderJson>
) -> Result<HttpResponse, ApiError> {
    let json = json.into_inner();

    let customer_id = require(json.customer_id, "customerId")?;
    let restaurant_id = require(json.restaurant_id, "restaurantId")?;
    let total_price = Price::parse_required(json.total_price, "totalPrice")
                        .map_err(ApiError::ValidationError)?;
    let items = require(json.items, "items")?;

    let lines = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| -> Result<OrderLine, ApiError> {
            let quantity = require(item.quantity, &format!("items[{}].quantity", i))?;
            let quantity = OrderQuantity::parse(quantity)
                .map_err(|e| ApiError::ValidationError(format!("items[{}].quantity: {}", i, e)))?;

            Ok(OrderLine{
                menu_item_id: require(item.menu_item_id, &format!("items[{}].menuItemId", i))?,
                quantity: quantity.inner()
            })
        })
        .collect::<Result<Vec<OrderLine>, ApiError>>()?;

    let conn = get_pooled_connection(&pool).await?;

    let order = create_order_with_items(conn, customer_id, restaurant_id, total_price.inner(), lines)
        .await
        .context("Failed to create order")?;

    Ok(HttpResponse::Ok().json(order))
}
