use actix_web::{web, HttpResponse};

use crate::{db_interaction::get_restaurant_revenue, models::Revenue, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting revenue of restaurant",
    skip(pool)
)]
pub async fn get_revenue(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let restaurant_id = path.into_inner();

    let conn = get_pooled_connection(&pool).await?;

    let revenue = get_restaurant_revenue(conn, restaurant_id).await?;

    Ok(HttpResponse::Ok().json(Revenue{ revenue }))
}
