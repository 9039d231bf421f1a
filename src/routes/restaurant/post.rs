use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{db_interaction::insert_restaurant, domain::RequiredField, models::NewRestaurant, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[derive(Deserialize, Debug)]
pub struct RestaurantJson{
    pub name: Option<String>,
    pub location: Option<String>
}

#[tracing::instrument(
    "Creating restaurant",
    skip(pool)
)]
pub async fn create_restaurant(
    pool: web::Data<DbPool>,
    json: web::Json<RestaurantJson>
) -> Result<HttpResponse, ApiError>{
    let json = json.into_inner();

    let new_restaurant = NewRestaurant{
        name: RequiredField::parse(json.name, "name")
                .map_err(ApiError::ValidationError)?
                .inner(),
        location: RequiredField::parse(json.location, "location")
                .map_err(ApiError::ValidationError)?
                .inner()
    };

    let conn = get_pooled_connection(&pool).await?;

    let restaurant = insert_restaurant(conn, new_restaurant).await?;

    Ok(HttpResponse::Ok().json(restaurant))
}
