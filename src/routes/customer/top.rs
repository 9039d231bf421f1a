use actix_web::{web, HttpResponse};

use crate::{db_interaction::get_top_customers, routes::ApiError, utils::{get_pooled_connection, DbPool}};

pub const TOP_CUSTOMERS_LIMIT: i64 = 5;

#[tracing::instrument(
    "Getting top customers by order count",
    skip(pool)
)]
pub async fn top_customers(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;

    let customers = get_top_customers(conn, TOP_CUSTOMERS_LIMIT).await?;

    Ok(HttpResponse::Ok().json(customers))
}
