use fooz_server_lib::data::database::*;
use fooz_server_lib::data::models::order::{NewOrder, UpdateOrder};
use fooz_server_lib::data::models::order_item::{
    NewOrderItem, NewOrderItemAccessory, OrderItemSnapshot,
};
use fooz_server_lib::data::repos::implementors::order_repo::OrderRepo;
use fooz_server_lib::data::repos::traits::repository::{PageQuery, Repository};
use bigdecimal::BigDecimal;
use diesel::QueryDsl;
use diesel::result;
use diesel_async::RunQueryDsl;
use std::str::FromStr;

async fn setup() -> Result<(), result::Error> {
    let db = Database::new().await;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use fooz_server_lib::data::models::schema::*;

    diesel::delete(order_item_accessories::table).execute(&mut conn).await?;
    diesel::delete(order_items::table).execute(&mut conn).await?;
    diesel::delete(orders::table).execute(&mut conn).await?;

    Ok(())
}

fn new_order(number: &str) -> NewOrder<'_> {
    NewOrder {
        order_number: number,
        customer_name: "Repo Customer",
        customer_phone: "0555123456",
        shipping_address: "1 Test Road",
        total_amount: BigDecimal::from_str("45.00").unwrap(),
        status: "PENDING",
    }
}

fn snapshot(name: &str, accessories: &[&str]) -> OrderItemSnapshot {
    OrderItemSnapshot {
        item: NewOrderItem {
            order_id: 0,
            product_id: None,
            product_name: name.to_string(),
            quantity: 1,
            price: BigDecimal::from_str("15.00").unwrap(),
            color_name: None,
            color_image: None,
            size_name: None,
            size_dimensions: None,
        },
        accessories: accessories
            .iter()
            .map(|a| NewOrderItemAccessory {
                order_item_id: 0,
                name: a.to_string(),
                price: BigDecimal::from_str("5.00").unwrap(),
                image: None,
            })
            .collect(),
    }
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_with_items_links_accessories_to_their_item() {
    setup().await.expect("Setup failed");

    let repo = OrderRepo::new();
    let order_id = repo
        .create_with_items(
            new_order("ORD-000001-1"),
            vec![
                snapshot("Desk", &["Lamp", "Hook"]),
                snapshot("Chair", &[]),
                snapshot("Shelf", &["Bracket"]),
            ],
        )
        .await
        .expect("Failed to create order");

    let details = repo
        .get_details_by_id(order_id)
        .await
        .expect("Failed to load order")
        .expect("Order not found");

    assert_eq!(details.order.order_number, "ORD-000001-1");
    assert_eq!(details.items.len(), 3);

    let names: Vec<(&str, Vec<&str>)> = details
        .items
        .iter()
        .map(|(item, accs)| {
            (
                item.product_name.as_str(),
                accs.iter().map(|a| a.name.as_str()).collect(),
            )
        })
        .collect();

    assert_eq!(
        names,
        vec![
            ("Desk", vec!["Lamp", "Hook"]),
            ("Chair", vec![]),
            ("Shelf", vec!["Bracket"]),
        ]
    );
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_status_and_filter_page() {
    setup().await.expect("Setup failed");

    let repo = OrderRepo::new();
    let (page, total) = repo
        .find_page(&PageQuery::default(), None)
        .await
        .expect("Failed to page");
    assert!(page.is_empty());
    assert_eq!(total, 0);

    let id = repo
        .add(new_order("ORD-000002-2"))
        .await
        .expect("Failed to add order");

    repo.update(
        id,
        UpdateOrder {
            status: Some("DELIVERED"),
            updated_at: Some(chrono::Utc::now().naive_utc()),
        },
    )
    .await
    .expect("Failed to update order");

    let order = repo
        .get_by_id(id)
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(order.status, "DELIVERED");

    let (page, total) = repo
        .find_page(&PageQuery::default(), Some("DELIVERED"))
        .await
        .expect("Failed to page");
    assert_eq!(page.len(), 1);
    assert_eq!(total, 1);

    let (page, total) = repo
        .find_page(&PageQuery::default(), Some("PENDING"))
        .await
        .expect("Failed to page");
    assert!(page.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
#[serial_test::serial]
async fn test_delete_removes_items_and_accessories() {
    setup().await.expect("Setup failed");

    let repo = OrderRepo::new();
    let id = repo
        .create_with_items(new_order("ORD-000003-3"), vec![snapshot("Desk", &["Lamp"])])
        .await
        .expect("Failed to create order");

    assert_eq!(repo.delete(id).await.expect("Failed to delete"), 1);
    assert_eq!(repo.get_by_id(id).await.expect("Failed to get"), None);

    let mut conn = Database::new()
        .await
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use fooz_server_lib::data::models::schema::{order_item_accessories, order_items};

    let items: i64 = order_items::table
        .count()
        .get_result(&mut conn)
        .await
        .expect("Failed to count items");
    let accessories: i64 = order_item_accessories::table
        .count()
        .get_result(&mut conn)
        .await
        .expect("Failed to count accessories");

    assert_eq!(items, 0);
    assert_eq!(accessories, 0);
}
