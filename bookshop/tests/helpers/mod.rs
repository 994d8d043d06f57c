#![allow(dead_code)]

use bookshop::catalog_storage::CatalogStorage;
use bookshop::customer_storage::CustomerStorage;
use bookshop::entities::{book, customer};
use bookshop::model::{NewAuthor, NewBook, NewPublisher};
use bookshop::schema;
use common::test_helpers::{create_test_connection, generate_unique_slug};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the full schema in place.
pub async fn setup() -> DatabaseConnection {
    common::init_tracing("warn");
    let db = create_test_connection().await.expect("test connection");
    schema::create_all_tables(&db).await.expect("schema setup");
    db
}

pub fn price(text: &str) -> Decimal {
    text.parse().expect("decimal literal")
}

/// Seed a media type, author, and publisher, then a book at the given price.
pub async fn seed_book(db: &DatabaseConnection, book_price: Decimal) -> book::Model {
    let catalog = CatalogStorage::with_connection(db.clone());

    let media_type = catalog.add_media_type("paper").await.expect("media type");
    let author = catalog
        .add_author(&NewAuthor {
            name: "Leo Tolstoy".to_string(),
            slug: generate_unique_slug("tolstoy"),
            image: None,
        })
        .await
        .expect("author");
    let publisher = catalog
        .add_publisher(&NewPublisher {
            name: "AST".to_string(),
            slug: generate_unique_slug("ast"),
            image: None,
            description: "Test publisher".to_string(),
        })
        .await
        .expect("publisher");

    catalog
        .add_book(&NewBook {
            author_id: author.id,
            publisher_id: publisher.id,
            media_type_id: media_type.id,
            name: "War and Peace".to_string(),
            slug: generate_unique_slug("war-and-peace"),
            image: "images/book/war-and-peace/cover.jpg".to_string(),
            release_year: 1869,
            description: Some("Four volumes".to_string()),
            stock: 10,
            price: book_price,
            offer_of_the_week: false,
        })
        .await
        .expect("book")
}

static NEXT_USER_ID: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1);

pub async fn seed_customer(db: &DatabaseConnection) -> customer::Model {
    let user_id = NEXT_USER_ID.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    CustomerStorage::with_connection(db.clone())
        .create(user_id, "+7 000 000-00-00", Some("Moscow"))
        .await
        .expect("customer")
}
