use async_graphql::{Request, Variables};
use fooz_server_lib::api::graphql::schema::build_schema;
use fooz_server_lib::data::database::Database;
use diesel::result;
use serde_json::{Value, json};

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use diesel_async::RunQueryDsl;
    use fooz_server_lib::data::models::schema::*;

    diesel::delete(order_item_accessories::table).execute(&mut conn).await?;
    diesel::delete(order_items::table).execute(&mut conn).await?;
    diesel::delete(orders::table).execute(&mut conn).await?;
    diesel::delete(product_colors::table).execute(&mut conn).await?;
    diesel::delete(product_accessories::table).execute(&mut conn).await?;
    diesel::delete(product_sizes::table).execute(&mut conn).await?;
    diesel::delete(products::table).execute(&mut conn).await?;
    diesel::delete(colors::table).execute(&mut conn).await?;
    diesel::delete(accessories::table).execute(&mut conn).await?;
    diesel::delete(categories::table).execute(&mut conn).await?;

    Ok(())
}

async fn execute(query: &str, variables: Value) -> (Value, Vec<String>) {
    let schema = build_schema();
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await;

    let errors = response.errors.iter().map(|e| e.message.clone()).collect();
    let data = response.data.into_json().expect("Response data is not JSON");

    (data, errors)
}

#[tokio::test]
async fn test_schema_exposes_camel_case_operations() {
    let sdl = build_schema().sdl();

    for name in [
        "productBySlug",
        "categoryBySlug",
        "createOrder(input: CreateOrderInput!)",
        "updateOrderStatus(input: UpdateOrderStatusInput!)",
        "removeAccessory",
        "bulkDeleteFaqs",
        "PaginatedProducts",
        "discountPercentage",
    ] {
        assert!(sdl.contains(name), "schema is missing {}", name);
    }

    assert!(sdl.contains("enum OrderStatus"));
    for status in ["PENDING", "CONFIRMED", "SHIPPED", "DELIVERED", "CANCELLED"] {
        assert!(sdl.contains(status), "OrderStatus is missing {}", status);
    }
}

#[tokio::test]
async fn test_invalid_id_is_reported() {
    let (_, errors) = execute(r#"{ product(id: "abc") { id } }"#, json!({})).await;

    assert_eq!(errors, vec!["Invalid id: abc".to_string()]);
}

#[tokio::test]
#[serial_test::serial]
async fn test_order_flow_through_graphql() {
    setup().await.expect("Setup failed");

    let (data, errors) = execute(
        r#"
        mutation CreateProduct($input: CreateProductInput!) {
            createProduct(input: $input) { id slug price }
        }
        "#,
        json!({
            "input": {
                "name": "Gaming Desk",
                "price": 300.0,
                "discountPercentage": 10.0,
                "stock": 4,
                "mainImage": "/public/uploads/desk.png",
                "sizes": [{ "name": "XL", "dimensions": "180x80", "price": 350.0 }]
            }
        }),
    )
    .await;
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(data["createProduct"]["slug"], "gaming-desk");
    let product_id = data["createProduct"]["id"].clone();

    let (data, errors) = execute(
        r#"
        mutation PlaceOrder($input: CreateOrderInput!) {
            createOrder(input: $input) {
                id
                orderNumber
                status
                totalAmount
                items { productName quantity price sizeName sizeDimensions accessories { name price } }
            }
        }
        "#,
        json!({
            "input": {
                "customerName": "Sara Ali",
                "customerPhone": "0550000000",
                "shippingAddress": "12 Main Street, Algiers",
                "totalAmount": 315.0,
                "items": [{
                    "productId": product_id,
                    "quantity": 1,
                    "price": 315.0,
                    "sizeName": "XL",
                    "accessories": []
                }]
            }
        }),
    )
    .await;
    assert!(errors.is_empty(), "{:?}", errors);

    let order = &data["createOrder"];
    assert_eq!(order["status"], "PENDING");
    assert_eq!(order["totalAmount"], 315.0);
    assert_eq!(order["items"][0]["productName"], "Gaming Desk");
    assert_eq!(order["items"][0]["sizeDimensions"], "180x80");
    let order_id = order["id"].clone();

    let (data, errors) = execute(
        r#"
        mutation Confirm($input: UpdateOrderStatusInput!) {
            updateOrderStatus(input: $input) { status }
        }
        "#,
        json!({ "input": { "id": order_id, "status": "CONFIRMED" } }),
    )
    .await;
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(data["updateOrderStatus"]["status"], "CONFIRMED");

    let (data, errors) = execute(
        r#"{ orders(status: CONFIRMED) { total items { orderNumber } } }"#,
        json!({}),
    )
    .await;
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(data["orders"]["total"], 1);
}

#[tokio::test]
#[serial_test::serial]
async fn test_order_with_unknown_product_fails() {
    setup().await.expect("Setup failed");

    let (_, errors) = execute(
        r#"
        mutation PlaceOrder($input: CreateOrderInput!) {
            createOrder(input: $input) { id }
        }
        "#,
        json!({
            "input": {
                "customerName": "Sara Ali",
                "customerPhone": "0550000000",
                "shippingAddress": "Algiers",
                "totalAmount": 10.0,
                "items": [{ "productId": "123456", "quantity": 1, "price": 10.0 }]
            }
        }),
    )
    .await;

    assert_eq!(errors, vec!["Product not found: 123456".to_string()]);

    let (data, _) = execute("{ orders { total } }", json!({})).await;
    assert_eq!(data["orders"]["total"], 0);
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_missing_color_message() {
    setup().await.expect("Setup failed");

    let (_, errors) = execute(
        r#"mutation { updateColor(id: "777", input: { name: "Gold" }) { id } }"#,
        json!({}),
    )
    .await;

    assert_eq!(errors, vec!["Color not found: 777".to_string()]);
}

#[tokio::test]
async fn test_delete_mutations_return_boolean() {
    let sdl = build_schema().sdl();

    for signature in [
        "deleteProduct(id: ID!): Boolean!",
        "deleteCategory(id: ID!): Boolean!",
        "deleteColor(id: ID!): Boolean!",
        "bulkDeleteProducts(ids: [ID!]!): Boolean!",
        "bulkDeleteCategories(ids: [ID!]!): Boolean!",
        "bulkDeleteColors(ids: [ID!]!): Boolean!",
        "bulkDeleteAccessories(ids: [ID!]!): Boolean!",
        "bulkDeleteFaqs(ids: [ID!]!): Boolean!",
        "removeOrder(id: ID!): Boolean!",
        "removeAccessory(id: ID!): Accessory!",
        "removeFaq(id: ID!): Faq!",
    ] {
        assert!(sdl.contains(signature), "schema is missing {}", signature);
    }
}

#[tokio::test]
#[serial_test::serial]
async fn test_delete_color_through_graphql() {
    setup().await.expect("Setup failed");

    let (data, errors) = execute(
        r#"mutation { createColor(input: { name: "Oak" }) { id } }"#,
        json!({}),
    )
    .await;
    assert!(errors.is_empty(), "{:?}", errors);
    let color_id = data["createColor"]["id"].clone();

    let (data, errors) = execute(
        r#"mutation Delete($id: ID!) { deleteColor(id: $id) }"#,
        json!({ "id": color_id }),
    )
    .await;
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(data["deleteColor"], true);

    let (data, errors) = execute(
        r#"mutation Bulk($ids: [ID!]!) { bulkDeleteColors(ids: $ids) }"#,
        json!({ "ids": [color_id] }),
    )
    .await;
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(data["bulkDeleteColors"], true);
}
