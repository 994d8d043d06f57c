mod helpers;

use bookshop::content_ref::{ContentKind, ContentRef};
use bookshop::gallery_storage::GalleryStorage;
use bookshop::media::{MediaPaths, UploadPath};
use helpers::{price, seed_book, setup};

#[tokio::test]
async fn images_attach_to_any_entity() {
    let db = setup().await;
    let book = seed_book(&db, price("450.00")).await;
    let gallery = GalleryStorage::with_connection(db.clone());

    let book_ref = ContentRef::book(book.id);
    let author_ref = ContentRef::new(ContentKind::Author, book.author_id);

    let paths = MediaPaths::default();
    gallery
        .attach(book_ref, &paths.upload_path(ContentKind::Book, &book.slug, "spread.jpg"), false)
        .await
        .unwrap();
    gallery
        .attach(author_ref, "images/author/tolstoy/portrait.jpg", true)
        .await
        .unwrap();

    let book_images = gallery.images_for(book_ref).await.unwrap();
    assert_eq!(book_images.len(), 1);
    assert!(book_images[0].image.ends_with("spread.jpg"));
    assert!(!book_images[0].use_in_slider);

    let author_images = gallery.images_for(author_ref).await.unwrap();
    assert_eq!(author_images.len(), 1);
}

#[tokio::test]
async fn slider_lists_only_flagged_images() {
    let db = setup().await;
    let book = seed_book(&db, price("450.00")).await;
    let gallery = GalleryStorage::with_connection(db.clone());

    gallery
        .attach(ContentRef::book(book.id), "a.jpg", false)
        .await
        .unwrap();
    let featured = gallery
        .attach(ContentRef::book(book.id), "b.jpg", true)
        .await
        .unwrap();

    let slider = gallery.slider_images().await.unwrap();
    assert_eq!(slider.len(), 1);
    assert_eq!(slider[0].id, featured.id);
}
