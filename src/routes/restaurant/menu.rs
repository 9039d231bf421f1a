use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{db_interaction::{get_menu_items, insert_menu_item}, domain::{Price, RequiredField}, models::NewMenuItem, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[derive(Deserialize, Debug)]
pub struct MenuItemJson{
    pub name: Option<String>,
    pub price: Option<f64>
}

#[tracing::instrument(
    "Getting menu of restaurant",
    skip(pool)
)]
pub async fn get_menu(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError>{
    let restaurant_id = path.into_inner();

    let conn = get_pooled_connection(&pool).await?;

    let menu = get_menu_items(conn, restaurant_id).await?;

    Ok(HttpResponse::Ok().json(menu))
}

#[tracing::instrument(
    "Adding menu item to restaurant",
    skip(pool)
)]
pub async fn add_menu_item(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    json: web::Json<MenuItemJson>
) -> Result<HttpResponse, ApiError>{
    let restaurant_id = path.into_inner();
    let json = json.into_inner();

    let name = RequiredField::parse(json.name, "name")
                    .map_err(ApiError::ValidationError)?;
    let price = Price::parse_required(json.price, "price")
                    .map_err(ApiError::ValidationError)?;

    let new_menu_item = NewMenuItem{
        name: name.inner(),
        price: price.inner(),
        restaurant_id
    };

    let conn = get_pooled_connection(&pool).await?;

    let menu_item = insert_menu_item(conn, new_menu_item).await?;

    Ok(HttpResponse::Ok().json(menu_item))
}
