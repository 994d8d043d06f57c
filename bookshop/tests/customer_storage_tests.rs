mod helpers;

use bookshop::customer_storage::CustomerStorage;
use helpers::{price, seed_book, seed_customer, setup};

#[tokio::test]
async fn profile_is_found_by_external_user_id() {
    let db = setup().await;
    let customer = seed_customer(&db).await;
    let customers = CustomerStorage::with_connection(db.clone());

    let found = customers.by_user_id(customer.user_id).await.unwrap().unwrap();
    assert_eq!(found.id, customer.id);
    assert!(found.is_active);

    assert!(customers.by_user_id(-1).await.unwrap().is_none());
}

#[tokio::test]
async fn deactivation_round_trips() {
    let db = setup().await;
    let customer = seed_customer(&db).await;
    let customers = CustomerStorage::with_connection(db.clone());

    let customer = customers.set_active(customer.id, false).await.unwrap();
    assert!(!customer.is_active);

    let customer = customers.set_active(customer.id, true).await.unwrap();
    assert!(customer.is_active);
}

#[tokio::test]
async fn wishlist_add_remove_list() {
    let db = setup().await;
    let book = seed_book(&db, price("450.00")).await;
    let customer = seed_customer(&db).await;
    let customers = CustomerStorage::with_connection(db.clone());

    customers.wishlist_add(customer.id, book.id).await.unwrap();
    // Second add is a no-op, not an error.
    customers.wishlist_add(customer.id, book.id).await.unwrap();

    let wishlist = customers.wishlist(customer.id).await.unwrap();
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist[0].id, book.id);

    customers.wishlist_remove(customer.id, book.id).await.unwrap();
    assert!(customers.wishlist(customer.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn notifications_start_unread_and_can_be_read() {
    let db = setup().await;
    let customer = seed_customer(&db).await;
    let customers = CustomerStorage::with_connection(db.clone());

    let first = customers
        .notify(customer.id, "Your order is ready")
        .await
        .unwrap();
    customers
        .notify(customer.id, "Weekly offer: War and Peace")
        .await
        .unwrap();
    assert!(!first.read);

    let unread = customers.unread_notifications(customer.id).await.unwrap();
    assert_eq!(unread.len(), 2);

    let first = customers.mark_read(first.id).await.unwrap();
    assert!(first.read);

    let unread = customers.unread_notifications(customer.id).await.unwrap();
    assert_eq!(unread.len(), 1);
}
