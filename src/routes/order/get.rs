use actix_web::{web, HttpResponse};

use crate::{db_interaction::get_order_with_items, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting order with its items",
    skip(pool)
)]
pub async fn get_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let order_id = path.into_inner();

    let conn = get_pooled_connection(&pool).await?;

    match get_order_with_items(conn, order_id).await? {
        Some(order) => Ok(HttpResponse::Ok().json(order)),
        None => Err(ApiError::NotFoundError("Order not found".to_string()))
    }
}
