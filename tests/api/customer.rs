use diesel::{ExpressionMethods, QueryDsl, RunQueryDsl};
use food_ordering::{models::{Customer, Order, TopCustomer}, routes::ErrorBody, schema::customers};

use crate::helpers::TestApp;

#[actix_web::test]
async fn post_customer_returns_customer_with_generated_id(){
    let app = TestApp::spawn_app().await;

    let response = app.post_json("/customers", &serde_json::json!({
        "name": "A",
        "email": "a@x.com",
        "phoneNumber": "+91 98765 43210",
        "address": "12 Curry Lane"
    })).await;

    assert_eq!(response.status().as_u16(), 200);

    let customer: Customer = response.json().await.unwrap();
    assert!(customer.id > 0);
    assert_eq!(customer.name, "A");
    assert_eq!(customer.email, "a@x.com");
    assert_eq!(customer.phone_number.as_deref(), Some("+91 98765 43210"));
    assert_eq!(customer.address.as_deref(), Some("12 Curry Lane"));
}

#[actix_web::test]
async fn post_customer_optional_fields_default_to_null(){
    let app = TestApp::spawn_app().await;

    let customer = app.create_customer("A", "a@x.com").await;

    assert_eq!(customer.phone_number, None);
    assert_eq!(customer.address, None);
}

#[actix_web::test]
async fn post_customer_with_duplicate_email_is_conflict(){
    let app = TestApp::spawn_app().await;
    let body = serde_json::json!({ "name": "A", "email": "a@x.com" });

    let first = app.post_json("/customers", &body).await;
    assert_eq!(first.status().as_u16(), 200);

    let second = app.post_json("/customers", &serde_json::json!({ "name": "B", "email": "a@x.com" })).await;
    assert_eq!(second.status().as_u16(), 409);

    let error: ErrorBody = second.json().await.unwrap();
    assert_eq!(error.error, "A customer with this email already exists");

    let mut conn = app.pool.get().unwrap();
    let rows: i64 = customers::table
        .filter(customers::email.eq("a@x.com"))
        .count()
        .get_result(&mut conn)
        .unwrap();

    assert_eq!(rows, 1);
}

#[actix_web::test]
async fn post_customer_concurrent_duplicate_email_yields_one_success(){
    let app = TestApp::spawn_app().await;
    let url = format!("{}/customers", app.get_app_url());
    let attempts = 10;

    // all requests are in flight before any response is awaited
    let handles: Vec<_> = (0..attempts)
        .map(|i| {
            let client = app.api_client.clone();
            let url = url.clone();

            tokio::task::spawn(async move {
                client.post(url)
                    .json(&serde_json::json!({ "name": format!("Customer {}", i), "email": "race@x.com" }))
                    .send()
                    .await
                    .expect("Failed to execute request")
                    .status()
                    .as_u16()
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    assert_eq!(statuses.iter().filter(|s| **s == 200).count(), 1, "statuses were {:?}", statuses);
    assert_eq!(statuses.iter().filter(|s| **s == 409).count(), attempts - 1, "statuses were {:?}", statuses);

    let mut conn = app.pool.get().unwrap();
    let rows: i64 = customers::table
        .filter(customers::email.eq("race@x.com"))
        .count()
        .get_result(&mut conn)
        .unwrap();

    assert_eq!(rows, 1);
}

#[actix_web::test]
async fn post_customer_missing_name_or_email_is_bad_request(){
    let app = TestApp::spawn_app().await;

    let test_cases = vec![
        (serde_json::json!({ "email": "a@x.com" }), "missing name"),
        (serde_json::json!({ "name": "A" }), "missing email"),
        (serde_json::json!({ "name": "", "email": "a@x.com" }), "empty name"),
        (serde_json::json!({ "name": "A", "email": "   " }), "blank email"),
        (serde_json::json!({}), "missing both")
    ];

    for (body, description) in test_cases {
        let response = app.post_json("/customers", &body).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
    }

    let mut conn = app.pool.get().unwrap();
    let rows: i64 = customers::table.count().get_result(&mut conn).unwrap();
    assert_eq!(rows, 0);
}

#[actix_web::test]
async fn post_customer_with_malformed_json_is_bad_request(){
    let app = TestApp::spawn_app().await;

    let response = app.api_client.post(format!("{}/customers", app.get_app_url()))
        .header("Content-Type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let error: ErrorBody = response.json().await.unwrap();
    assert!(error.error.starts_with("Invalid request body"));
}

#[actix_web::test]
async fn get_customer_returns_existing_customer(){
    let app = TestApp::spawn_app().await;
    let created = app.create_customer("A", "a@x.com").await;

    let response = app.get(&format!("/customers/{}", created.id)).await;

    assert_eq!(response.status().as_u16(), 200);
    let fetched: Customer = response.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn get_unknown_customer_is_not_found(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/customers/4242").await;

    assert_eq!(response.status().as_u16(), 404);
    let error: ErrorBody = response.json().await.unwrap();
    assert_eq!(error.error, "Customer not found");
}

#[actix_web::test]
async fn get_customer_orders_returns_orders_of_any_status(){
    let app = TestApp::spawn_app().await;
    let customer = app.create_customer("A", "a@x.com").await;
    let other = app.create_customer("B", "b@x.com").await;
    let restaurant = app.create_restaurant("Dosa Corner").await;
    let dosa = app.create_menu_item(restaurant.id, "Masala Dosa", 4.5).await;

    let first = app.create_order(customer.id, restaurant.id, 4.5, &[(dosa.id, 1)]).await;
    let second = app.create_order(customer.id, restaurant.id, 9.0, &[(dosa.id, 2)]).await;
    app.create_order(other.id, restaurant.id, 4.5, &[(dosa.id, 1)]).await;
    app.complete_order(second.order.id).await;

    let response = app.get(&format!("/customers/{}/orders", customer.id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let orders: Vec<Order> = response.json().await.unwrap();
    let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![first.order.id, second.order.id]);
    assert_eq!(orders[1].status, "COMPLETED");
}

#[actix_web::test]
async fn get_orders_of_customer_without_orders_is_empty(){
    let app = TestApp::spawn_app().await;
    let customer = app.create_customer("A", "a@x.com").await;

    let response = app.get(&format!("/customers/{}/orders", customer.id)).await;

    assert_eq!(response.status().as_u16(), 200);
    let orders: Vec<Order> = response.json().await.unwrap();
    assert!(orders.is_empty());
}

#[actix_web::test]
async fn top_customers_returns_at_most_five_by_descending_order_count(){
    let app = TestApp::spawn_app().await;
    let restaurant = app.create_restaurant("Dosa Corner").await;
    let dosa = app.create_menu_item(restaurant.id, "Masala Dosa", 4.5).await;

    // customer i places i + 1 orders
    let mut customers = Vec::new();
    for i in 0..7 {
        let customer = app.create_customer(&format!("Customer {}", i), &format!("c{}@x.com", i)).await;
        for _ in 0..=i {
            app.create_order(customer.id, restaurant.id, 4.5, &[(dosa.id, 1)]).await;
        }
        customers.push(customer);
    }

    let response = app.get("/customers/top").await;
    assert_eq!(response.status().as_u16(), 200);

    let top: Vec<TopCustomer> = response.json().await.unwrap();
    assert_eq!(top.len(), 5);
    assert_eq!(top[0], TopCustomer{ customer_id: customers[6].id, order_count: 7 });
    assert_eq!(top[4], TopCustomer{ customer_id: customers[2].id, order_count: 3 });
    assert!(top.windows(2).all(|w| w[0].order_count >= w[1].order_count));
}

#[actix_web::test]
async fn top_customers_without_orders_is_empty(){
    let app = TestApp::spawn_app().await;
    app.create_customer("A", "a@x.com").await;

    let response = app.get("/customers/top").await;

    assert_eq!(response.status().as_u16(), 200);
    let top: Vec<TopCustomer> = response.json().await.unwrap();
    assert!(top.is_empty());
}
