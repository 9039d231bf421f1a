use actix_web::{web, HttpResponse};

use crate::{db_interaction::{get_customer_by_id, get_orders_for_customer}, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting customer by id",
    skip(pool)
)]
pub async fn get_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let customer_id = path.into_inner();

    let conn = get_pooled_connection(&pool).await?;

    match get_customer_by_id(conn, customer_id).await? {
        Some(customer) => Ok(HttpResponse::Ok().json(customer)),
        None => Err(ApiError::NotFoundError("Customer not found".to_string()))
    }
}

// Unknown customers simply have no orders
#[tracing::instrument(
    "Getting orders of customer",
    skip(pool)
)]
pub async fn get_customer_orders(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let customer_id = path.into_inner();

    let conn = get_pooled_connection(&pool).await?;

    let orders = get_orders_for_customer(conn, customer_id).await?;

    Ok(HttpResponse::Ok().json(orders))
}
