use fooz_server_lib::data::database::{Database, last_insert_id};
use fooz_server_lib::data::models::faq::NewFaq;
use diesel_async::RunQueryDsl;

#[tokio::test]
#[serial_test::serial]
pub async fn test_database_connection() {
    let database = Database::new().await;

    // Attempt to get a connection from the pool
    let conn = database.get_connection().await;

    assert!(conn.is_ok(), "Failed to get a database connection");
}

#[tokio::test]
#[serial_test::serial]
pub async fn test_last_insert_id_matches_new_row() {
    use fooz_server_lib::data::models::schema::faqs::dsl::{faq_id, faqs};
    use diesel::{ExpressionMethods, QueryDsl};

    let mut conn = Database::new()
        .await
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    diesel::insert_into(faqs)
        .values(&NewFaq {
            question: "Is this a test?",
            answer: "Yes",
            sort_order: 0,
            is_active: false,
        })
        .execute(&mut conn)
        .await
        .expect("Failed to insert faq");

    let id = last_insert_id(&mut conn).await.expect("Failed to read insert id");

    let found: i64 = faqs
        .filter(faq_id.eq(id))
        .count()
        .get_result(&mut conn)
        .await
        .expect("Failed to count");
    assert_eq!(found, 1);

    diesel::delete(faqs.filter(faq_id.eq(id)))
        .execute(&mut conn)
        .await
        .expect("Failed to clean up");
}
