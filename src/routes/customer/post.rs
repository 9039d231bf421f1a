use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{db_interaction::{insert_customer, CustomerInsertError}, domain::RequiredField, models::NewCustomer, routes::ApiError, utils::{get_pooled_connection, DbPool}};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CustomerJson{
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>
}

// Email uniqueness is left to the customers_email_key constraint
#[tracing::instrument(
    "Creating customer",
    skip(pool)
)]
pub async fn create_customer(
    pool: web::Data<DbPool>,
    json: web::Json<CustomerJson>
) -> Result<HttpResponse, ApiError>{
    let json = json.into_inner();

    let name = RequiredField::parse(json.name, "name")
                    .map_err(ApiError::ValidationError)?;
    let email = RequiredField::parse(json.email, "email")
                    .map_err(ApiError::ValidationError)?;

    let new_customer = NewCustomer{
        name: name.inner(),
        email: email.inner(),
        phone_number: json.phone_number,
        address: json.address
    };

    let conn = get_pooled_connection(&pool).await?;

    let customer = insert_customer(conn, new_customer)
        .await
        .map_err(|e| {
            match e {
                CustomerInsertError::EmailNotUnique(_) => {
                    ApiError::ConflictError("A customer with this email already exists".to_string())
                },
                _ => ApiError::UnexpectedError(anyhow::Error::new(e).context("Failed to create customer"))
            }
        })?;

    Ok(HttpResponse::Ok().json(customer))
}
