use food_ordering::{models::{MenuItem, TopMenuItem}, routes::ErrorBody};

use crate::helpers::TestApp;

#[actix_web::test]
async fn patch_price_leaves_availability_unchanged(){
    let app = TestApp::spawn_app().await;
    let restaurant = app.create_restaurant("Dosa Corner").await;
    let dosa = app.create_menu_item(restaurant.id, "Masala Dosa", 4.5).await;

    let response = app.patch_json(&format!("/menu/{}", dosa.id), &serde_json::json!({ "isAvailable": false })).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.patch_json(&format!("/menu/{}", dosa.id), &serde_json::json!({ "price": 5.25 })).await;
    assert_eq!(response.status().as_u16(), 200);

    let updated: MenuItem = response.json().await.unwrap();
    assert_eq!(updated.price, 5.25);
    assert!(!updated.is_available);
    assert_eq!(updated.name, "Masala Dosa");
}

#[actix_web::test]
async fn patch_availability_leaves_price_unchanged(){
    let app = TestApp::spawn_app().await;
    let restaurant = app.create_restaurant("Dosa Corner").await;
    let dosa = app.create_menu_item(restaurant.id, "Masala Dosa", 4.5).await;

    let response = app.patch_json(&format!("/menu/{}", dosa.id), &serde_json::json!({ "isAvailable": false })).await;

    assert_eq!(response.status().as_u16(), 200);
    let updated: MenuItem = response.json().await.unwrap();
    assert_eq!(updated.price, 4.5);
    assert!(!updated.is_available);

    let menu: Vec<MenuItem> = app.get(&format!("/restaurants/{}/menu", restaurant.id)).await
        .json()
        .await
        .unwrap();
    assert_eq!(menu, vec![updated]);
}

#[actix_web::test]
async fn patch_without_fields_returns_item_unchanged(){
    let app = TestApp::spawn_app().await;
    let restaurant = app.create_restaurant("Dosa Corner").await;
    let dosa = app.create_menu_item(restaurant.id, "Masala Dosa", 4.5).await;

    let response = app.patch_json(&format!("/menu/{}", dosa.id), &serde_json::json!({})).await;

    assert_eq!(response.status().as_u16(), 200);
    let item: MenuItem = response.json().await.unwrap();
    assert_eq!(item, dosa);
}

#[actix_web::test]
async fn patch_with_negative_price_is_bad_request(){
    let app = TestApp::spawn_app().await;
    let restaurant = app.create_restaurant("Dosa Corner").await;
    let dosa = app.create_menu_item(restaurant.id, "Masala Dosa", 4.5).await;

    let response = app.patch_json(&format!("/menu/{}", dosa.id), &serde_json::json!({ "price": -3.0 })).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[actix_web::test]
async fn patch_unknown_menu_item_is_not_found(){
    let app = TestApp::spawn_app().await;

    for body in [serde_json::json!({ "price": 3.0 }), serde_json::json!({})] {
        let response = app.patch_json("/menu/4242", &body).await;

        assert_eq!(response.status().as_u16(), 404);
        let error: ErrorBody = response.json().await.unwrap();
        assert_eq!(error.error, "Menu item not found");
    }
}

#[actix_web::test]
async fn top_items_without_orders_is_empty(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/menu/top-items").await;

    assert_eq!(response.status().as_u16(), 200);
    let top: Vec<TopMenuItem> = response.json().await.unwrap();
    assert!(top.is_empty());
}

#[actix_web::test]
async fn top_items_returns_item_with_highest_total_quantity(){
    let app = TestApp::spawn_app().await;
    let customer = app.create_customer("A", "a@x.com").await;
    let restaurant = app.create_restaurant("Dosa Corner").await;
    let dosa = app.create_menu_item(restaurant.id, "Masala Dosa", 4.5).await;
    let idli = app.create_menu_item(restaurant.id, "Idli", 2.0).await;

    // idli is in more orders, dosa has the larger quantity
    app.create_order(customer.id, restaurant.id, 2.0, &[(idli.id, 1)]).await;
    app.create_order(customer.id, restaurant.id, 2.0, &[(idli.id, 1)]).await;
    app.create_order(customer.id, restaurant.id, 24.5, &[(dosa.id, 5), (idli.id, 1)]).await;

    let response = app.get("/menu/top-items").await;

    assert_eq!(response.status().as_u16(), 200);
    let top: Vec<TopMenuItem> = response.json().await.unwrap();
    assert_eq!(top, vec![TopMenuItem{ menu_item_id: dosa.id, total_quantity: 5 }]);
}
