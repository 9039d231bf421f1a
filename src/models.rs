use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize, Serializer};

use crate::schema::{customers, menu_items, order_items, orders, restaurants};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Customer{
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>
}

#[derive(Insertable, Debug)]
#[diesel(table_name = customers)]
pub struct NewCustomer{
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Restaurant{
    pub id: i32,
    pub name: String,
    pub location: String
}

#[derive(Insertable, Debug)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant{
    pub name: String,
    pub location: String
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = menu_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct MenuItem{
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub is_available: bool,
    pub restaurant_id: i32
}

#[derive(Insertable, Debug)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItem{
    pub name: String,
    pub price: f64,
    pub restaurant_id: i32
}

// `None` fields are left untouched by diesel
#[derive(AsChangeset, Debug, Default)]
#[diesel(table_name = menu_items)]
pub struct MenuItemChanges{
    pub price: Option<f64>,
    pub is_available: Option<bool>
}

impl MenuItemChanges {
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.is_available.is_none()
    }
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Order{
    pub id: i32,
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>
}

#[derive(Insertable, Debug)]
#[diesel(table_name = orders)]
pub struct NewOrder{
    pub customer_id: i32,
    pub restaurant_id: i32,
    pub total_price: f64,
    pub status: String
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct OrderItem{
    pub id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32
}

#[derive(Insertable, Debug)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem{
    pub order_id: i32,
    pub menu_item_id: i32,
    pub quantity: i32
}

// Order along with its order_items, as returned by the order endpoints
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItems{
    #[serde(flatten)]
    pub order: Order,
    pub order_items: Vec<OrderItem>
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Revenue{
    #[serde(serialize_with = "serialize_amount")]
    pub revenue: f64
}

// Whole amounts are written without a fraction, `{"revenue":0}` not `{"revenue":0.0}`
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>{
    if amount.fract() == 0.0 && amount.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopMenuItem{
    pub menu_item_id: i32,
    pub total_quantity: i64
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer{
    pub customer_id: i32,
    pub order_count: i64
}
