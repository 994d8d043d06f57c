mod helpers;

use bookshop::catalog_storage::CatalogStorage;
use bookshop::model::NewBook;
use helpers::{price, seed_book, setup};

#[tokio::test]
async fn book_is_fetchable_by_id_and_slug() {
    let db = setup().await;
    let book = seed_book(&db, price("450.00")).await;
    let catalog = CatalogStorage::with_connection(db.clone());

    let by_id = catalog.book(book.id).await.unwrap().unwrap();
    assert_eq!(by_id.name, "War and Peace");
    assert_eq!(by_id.price, price("450.00"));
    assert_eq!(by_id.stock, 10);

    let by_slug = catalog.book_by_slug(&book.slug).await.unwrap().unwrap();
    assert_eq!(by_slug.id, book.id);

    assert!(catalog.book(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn missing_description_falls_back_to_column_default() {
    let db = setup().await;
    let template = seed_book(&db, price("450.00")).await;
    let catalog = CatalogStorage::with_connection(db.clone());

    let book = catalog
        .add_book(&NewBook {
            author_id: template.author_id,
            publisher_id: template.publisher_id,
            media_type_id: template.media_type_id,
            name: "Anna Karenina".to_string(),
            slug: "anna-karenina".to_string(),
            image: "images/book/anna-karenina/cover.jpg".to_string(),
            release_year: 1878,
            description: None,
            stock: 1,
            price: price("350.00"),
            offer_of_the_week: true,
        })
        .await
        .unwrap();

    assert_eq!(book.description, "Description coming soon");
}

#[tokio::test]
async fn weekly_offers_only_lists_flagged_books() {
    let db = setup().await;
    let plain = seed_book(&db, price("450.00")).await;
    let catalog = CatalogStorage::with_connection(db.clone());

    let offered = catalog
        .add_book(&NewBook {
            author_id: plain.author_id,
            publisher_id: plain.publisher_id,
            media_type_id: plain.media_type_id,
            name: "Resurrection".to_string(),
            slug: "resurrection".to_string(),
            image: "images/book/resurrection/cover.jpg".to_string(),
            release_year: 1899,
            description: None,
            stock: 2,
            price: price("280.00"),
            offer_of_the_week: true,
        })
        .await
        .unwrap();

    let offers = catalog.weekly_offers().await.unwrap();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].id, offered.id);
}

#[tokio::test]
async fn price_and_stock_are_mutable() {
    let db = setup().await;
    let book = seed_book(&db, price("450.00")).await;
    let catalog = CatalogStorage::with_connection(db.clone());

    let book = catalog.set_price(book.id, price("475.50")).await.unwrap();
    assert_eq!(book.price, price("475.50"));

    let book = catalog.adjust_stock(book.id, -3).await.unwrap();
    assert_eq!(book.stock, 7);

    let book = catalog.adjust_stock(book.id, 5).await.unwrap();
    assert_eq!(book.stock, 12);
}

#[tokio::test]
async fn stock_adjustment_saturates_instead_of_wrapping() {
    let db = setup().await;
    let book = seed_book(&db, price("450.00")).await;
    let catalog = CatalogStorage::with_connection(db.clone());

    let book = catalog.adjust_stock(book.id, i32::MAX).await.unwrap();
    assert_eq!(book.stock, i32::MAX);

    let book = catalog.adjust_stock(book.id, i32::MIN).await.unwrap();
    assert_eq!(book.stock, -1);

    let book = catalog.adjust_stock(book.id, i32::MIN).await.unwrap();
    assert_eq!(book.stock, i32::MIN);
}

#[tokio::test]
async fn genres_stay_unlinked_but_persisted() {
    let db = setup().await;
    let catalog = CatalogStorage::with_connection(db.clone());

    let genre = catalog.add_genre("Novel", "novel").await.unwrap();
    assert_eq!(genre.name, "Novel");
    assert_eq!(genre.slug, "novel");
}
