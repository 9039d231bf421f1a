use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{db_interaction::{update_menu_item, UpdateMenuItemError}, domain::Price, models::MenuItemChanges, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdateJson{
    pub price: Option<f64>,
    pub is_available: Option<bool>
}

// Only the supplied fields are changed
#[tracing::instrument(
    "Updating menu item price / availability",
    skip(pool)
)]
pub async fn patch_menu_item(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    json: web::Json<MenuItemUpdateJson>
) -> Result<HttpResponse, ApiError>{
    let menu_item_id = path.into_inner();
    let json = json.into_inner();

    let price = match json.price {
        Some(price) => Some(
            Price::parse(price)
                .map_err(ApiError::ValidationError)?
                .inner()
        ),
        None => None
    };

    let changes = MenuItemChanges{
        price,
        is_available: json.is_available
    };

    let conn = get_pooled_connection(&pool).await?;

    let menu_item = update_menu_item(conn, menu_item_id, changes)
        .await
        .map_err(|e| {
            match e {
                UpdateMenuItemError::NoMenuItemError(_) => ApiError::NotFoundError("Menu item not found".to_string()),
                _ => ApiError::UnexpectedError(anyhow::Error::new(e).context("Failed to update menu item"))
            }
        })?;

    Ok(HttpResponse::Ok().json(menu_item))
}
