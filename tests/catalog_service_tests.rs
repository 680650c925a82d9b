use fooz_server_lib::api::request::{
    CreateAccessoryRequest, CreateCategoryRequest, CreateColorRequest, CreateFaqRequest,
    CreateProductRequest, UpdateAccessoryRequest, UpdateCategoryRequest, UpdateColorRequest,
    UpdateFaqRequest,
};
use fooz_server_lib::data::database::Database;
use fooz_server_lib::data::repos::traits::repository::PageQuery;
use fooz_server_lib::services::accessory_service::AccessoryService;
use fooz_server_lib::services::category_service::CategoryService;
use fooz_server_lib::services::color_service::ColorService;
use fooz_server_lib::services::errors::CatalogServiceError;
use fooz_server_lib::services::faq_service::FaqService;
use fooz_server_lib::services::product_service::ProductService;
use diesel::result;
use diesel_async::RunQueryDsl;

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
    diesel::delete(product_colors::table).execute(&mut conn).await?;
    diesel::delete(product_accessories::table).execute(&mut conn).await?;
    diesel::delete(product_sizes::table).execute(&mut conn).await?;
    diesel::delete(products::table).execute(&mut conn).await?;
    diesel::delete(colors::table).execute(&mut conn).await?;
    diesel::delete(accessories::table).execute(&mut conn).await?;
    diesel::delete(categories::table).execute(&mut conn).await?;
    diesel::delete(faqs::table).execute(&mut conn).await?;

    Ok(())
}

fn category_request(name: &str, slug: &str) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.to_string(),
        slug: slug.to_string(),
        description: Some(format!("All {}", name)),
        image: None,
    }
}

fn faq_request(question: &str, order: i32, is_active: bool) -> CreateFaqRequest {
    CreateFaqRequest {
        question: question.to_string(),
        answer: format!("Answer to {}", question),
        order,
        is_active,
    }
}

#[tokio::test]
#[serial_test::serial]
async fn test_category_crud() {
    setup().await.expect("Setup failed");

    let service = CategoryService::new();

    let created = service
        .create_category(&category_request("Gaming Chairs", ""))
        .await
        .expect("Failed to create category");
    assert_eq!(created.slug, "gaming-chairs");

    let explicit = service
        .create_category(&category_request("Desks", "work-desks"))
        .await
        .expect("Failed to create category");
    assert_eq!(explicit.slug, "work-desks");

    let found = service
        .get_category_by_slug("work-desks")
        .await
        .expect("Failed to get category");
    assert_eq!(found, Some(explicit.clone()));

    let id: i32 = explicit.id.parse().unwrap();
    let updated = service
        .update_category(
            id,
            &UpdateCategoryRequest {
                name: Some("Office Desks".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update category");
    assert_eq!(updated.name, "Office Desks");
    assert_eq!(updated.slug, "work-desks");

    let page = service
        .get_categories(&PageQuery::new(Some("office".to_string()), None, None))
        .await
        .expect("Failed to list categories");
    assert_eq!(page.total, 1);

    let deleted = service
        .delete_category(id)
        .await
        .expect("Failed to delete category");
    assert_eq!(deleted.name, "Office Desks");

    assert_eq!(
        service.delete_category(id).await.unwrap_err().to_string(),
        format!("Category not found: {}", id)
    );
}

#[tokio::test]
#[serial_test::serial]
async fn test_duplicate_category_slug() {
    setup().await.expect("Setup failed");

    let service = CategoryService::new();
    service
        .create_category(&category_request("Lamps", ""))
        .await
        .expect("Failed to create category");

    let result = service.create_category(&category_request("Lamps", "")).await;
    assert_eq!(
        result,
        Err(CatalogServiceError::AlreadyExists {
            entity: "Category",
            name: "lamps".to_string(),
        })
    );
}

#[tokio::test]
#[serial_test::serial]
async fn test_deleting_category_uncategorizes_products() {
    setup().await.expect("Setup failed");

    let category = CategoryService::new()
        .create_category(&category_request("Tables", ""))
        .await
        .expect("Failed to create category");

    let products = ProductService::new();
    let product = products
        .create_product(&CreateProductRequest {
            name: "Coffee Table".to_string(),
            slug: String::new(),
            description: None,
            price: 80.0,
            discount_percentage: None,
            stock: 1,
            is_active: true,
            main_image: "/public/uploads/table.png".to_string(),
            gallery_images: vec![],
            glb_file_url: None,
            category_id: Some(category.id.clone()),
            color_ids: None,
            sizes: None,
            accessory_ids: None,
        })
        .await
        .expect("Failed to create product");

    CategoryService::new()
        .delete_category(category.id.parse().unwrap())
        .await
        .expect("Failed to delete category");

    let reloaded = products
        .get_product_by_id(product.id.parse().unwrap())
        .await
        .expect("Failed to get product")
        .expect("Product was deleted with its category");
    assert_eq!(reloaded.category_id, None);
}

#[tokio::test]
#[serial_test::serial]
async fn test_color_crud() {
    setup().await.expect("Setup failed");

    let service = ColorService::new();
    let created = service
        .create_color(&CreateColorRequest {
            name: "Walnut".to_string(),
            image: Some("/public/uploads/walnut.png".to_string()),
        })
        .await
        .expect("Failed to create color");
    let id: i32 = created.id.parse().unwrap();

    let updated = service
        .update_color(
            id,
            &UpdateColorRequest {
                name: Some("Dark Walnut".to_string()),
                image: None,
            },
        )
        .await
        .expect("Failed to update color");
    assert_eq!(updated.name, "Dark Walnut");
    assert_eq!(updated.image.as_deref(), Some("/public/uploads/walnut.png"));

    assert_eq!(
        service.update_color(id + 1000, &UpdateColorRequest::default()).await,
        Err(CatalogServiceError::NotFound {
            entity: "Color",
            id: id + 1000,
        })
    );

    service.delete_color(id).await.expect("Failed to delete color");
    assert_eq!(service.get_color_by_id(id).await, Ok(None));
}

#[tokio::test]
#[serial_test::serial]
async fn test_accessory_crud() {
    setup().await.expect("Setup failed");

    let service = AccessoryService::new();
    let created = service
        .create_accessory(&CreateAccessoryRequest {
            name: "Cable Tray".to_string(),
            price: 15.5,
            image: None,
        })
        .await
        .expect("Failed to create accessory");
    assert_eq!(created.price, 15.5);
    let id: i32 = created.id.parse().unwrap();

    let updated = service
        .update_accessory(
            id,
            &UpdateAccessoryRequest {
                price: Some(18.0),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update accessory");
    assert_eq!(updated.price, 18.0);
    assert_eq!(updated.name, "Cable Tray");

    let removed = service
        .remove_accessory(id)
        .await
        .expect("Failed to remove accessory");
    assert_eq!(removed, updated);

    let result = service.remove_accessory(id).await;
    assert_eq!(
        result.unwrap_err().to_string(),
        format!("Accessory not found: {}", id)
    );
}

#[tokio::test]
#[serial_test::serial]
async fn test_bulk_deletes_count_removed_rows() {
    setup().await.expect("Setup failed");

    let colors = ColorService::new();
    let mut ids = Vec::new();
    for name in ["Red", "Green", "Blue"] {
        let color = colors
            .create_color(&CreateColorRequest {
                name: name.to_string(),
                image: None,
            })
            .await
            .expect("Failed to create color");
        ids.push(color.id.parse::<i32>().unwrap());
    }

    let deleted = colors
        .bulk_delete_colors(ids.clone())
        .await
        .expect("Failed to bulk delete");
    assert_eq!(deleted, 3);

    assert_eq!(colors.bulk_delete_colors(ids).await, Ok(0));
    assert_eq!(colors.bulk_delete_colors(vec![]).await, Ok(0));
}

#[tokio::test]
#[serial_test::serial]
async fn test_faq_defaults_and_ordering() {
    setup().await.expect("Setup failed");

    let service = FaqService::new();
    service
        .create_faq(&faq_request("Do you deliver?", 2, true))
        .await
        .expect("Failed to create faq");
    service
        .create_faq(&faq_request("How do I pay?", 1, true))
        .await
        .expect("Failed to create faq");
    service
        .create_faq(&faq_request("Hidden question", 0, false))
        .await
        .expect("Failed to create faq");

    let all = service
        .get_faqs(&PageQuery::default(), None)
        .await
        .expect("Failed to list faqs");
    let questions: Vec<&str> = all.items.iter().map(|f| f.question.as_str()).collect();
    assert_eq!(
        questions,
        vec!["Hidden question", "How do I pay?", "Do you deliver?"]
    );

    let active = service
        .get_faqs(&PageQuery::default(), Some(true))
        .await
        .expect("Failed to list faqs");
    assert_eq!(active.total, 2);

    let searched = service
        .get_faqs(&PageQuery::new(Some("deliver".to_string()), None, None), None)
        .await
        .expect("Failed to list faqs");
    assert_eq!(searched.total, 1);
}

#[tokio::test]
#[serial_test::serial]
async fn test_faq_update_and_remove() {
    setup().await.expect("Setup failed");

    let service = FaqService::new();
    let faq = service
        .create_faq(&faq_request("Warranty?", 0, true))
        .await
        .expect("Failed to create faq");
    let id: i32 = faq.id.parse().unwrap();

    let updated = service
        .update_faq(
            id,
            &UpdateFaqRequest {
                is_active: Some(false),
                order: Some(7),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update faq");
    assert!(!updated.is_active);
    assert_eq!(updated.order, 7);
    assert_eq!(updated.question, "Warranty?");

    let removed = service.remove_faq(id).await.expect("Failed to remove faq");
    assert_eq!(removed.id, faq.id);
    assert_eq!(service.get_faq_by_id(id).await, Ok(None));
}

#[tokio::test]
#[serial_test::serial]
async fn test_search_treats_percent_and_underscore_literally() {
    setup().await.expect("Setup failed");

    let colors = ColorService::new();
    for name in ["50% Grey", "500 Black", "Sea_Blue", "SeaXBlue"] {
        colors
            .create_color(&CreateColorRequest {
                name: name.to_string(),
                image: None,
            })
            .await
            .expect("Failed to create color");
    }

    let page = colors
        .get_colors(&PageQuery::new(Some("50%".to_string()), None, None))
        .await
        .expect("Failed to list colors");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "50% Grey");

    let page = colors
        .get_colors(&PageQuery::new(Some("a_Blue".to_string()), None, None))
        .await
        .expect("Failed to list colors");
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Sea_Blue");
}
