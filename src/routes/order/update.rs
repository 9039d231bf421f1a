use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{db_interaction::{update_order_status, UpdateOrderStatusError}, domain::OrderStatus, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusJson{
    pub status: Option<String>
}

#[tracing::instrument(
    "Updating order status",
    skip(pool)
)]
pub async fn update_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    json: web::Json<UpdateOrderStatusJson>
) -> Result<HttpResponse, ApiError>{
    let order_id = path.into_inner();

    let status = OrderStatus::parse(json.into_inner().status)
                    .map_err(ApiError::ValidationError)?;

    let conn = get_pooled_connection(&pool).await?;

    let order = update_order_status(conn, order_id, status)
        .await
        .map_err(|e| {
            match e {
                UpdateOrderStatusError::NoOrderIdError(_) => ApiError::NotFoundError("Order not found".to_string()),
                _ => ApiError::UnexpectedError(anyhow::Error::new(e).context("Failed to update order status"))
            }
        })?;

    Ok(HttpResponse::Ok().json(order))
}
