use actix_web::{web, HttpResponse};

use crate::{db_interaction::get_top_menu_items, routes::ApiError, utils::{get_pooled_connection, DbPool}};

pub const TOP_MENU_ITEMS_LIMIT: i64 = 1;

#[tracing::instrument(
    "Getting most ordered menu item",
    skip(pool)
)]
pub async fn top_menu_items(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, ApiError>{
    let conn = get_pooled_connection(&pool).await?;

    let items = get_top_menu_items(conn, TOP_MENU_ITEMS_LIMIT).await?;

    Ok(HttpResponse::Ok().json(items))
}
