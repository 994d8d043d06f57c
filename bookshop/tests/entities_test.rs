use bookshop::content_ref::ContentKind;
use bookshop::entities::*;
use rust_decimal::Decimal;

#[test]
fn book_entity_creation() {
    let book = book::Model {
        id: 1,
        author_id: 1,
        publisher_id: 1,
        media_type_id: 1,
        name: "War and Peace".to_string(),
        slug: "war-and-peace".to_string(),
        image: "images/book/war-and-peace/cover.jpg".to_string(),
        release_year: 1869,
        description: "Description coming soon".to_string(),
        stock: 1,
        price: Decimal::new(45000, 2),
        offer_of_the_week: false,
    };

    assert_eq!(book.id, 1);
    assert_eq!(book.price, Decimal::new(45000, 2));
    assert_eq!(book.stock, 1);
}

#[test]
fn cart_line_entity_creation() {
    let line = cart_product::Model {
        id: 1,
        customer_id: 1,
        cart_id: 1,
        content_kind: ContentKind::Book,
        object_id: 42,
        qty: 3,
        final_price: Decimal::new(135000, 2),
    };

    assert_eq!(line.content_kind, ContentKind::Book);
    assert_eq!(line.final_price, Decimal::from(line.qty) * Decimal::new(45000, 2));
}

#[test]
fn order_entity_serialization() {
    let today = chrono::Utc::now().date_naive();
    let order = order::Model {
        id: 1,
        customer_id: 1,
        cart_id: 1,
        first_name: "Ivan".to_string(),
        last_name: "Petrov".to_string(),
        phone: "+7 999 123-45-67".to_string(),
        address: None,
        status: order::OrderStatus::New,
        buying_type: order::BuyingType::SelfPickup,
        comment: None,
        created_at: today,
        order_date: today,
    };

    let json = serde_json::to_string(&order).unwrap();
    let back: order::Model = serde_json::from_str(&json).unwrap();
    assert_eq!(back, order);
    assert_eq!(back.status, order::OrderStatus::New);
}

#[test]
fn order_status_defaults_to_new() {
    assert_eq!(order::OrderStatus::default(), order::OrderStatus::New);
}

#[test]
fn gallery_entity_creation() {
    let image = image_gallery::Model {
        id: 1,
        content_kind: ContentKind::Publisher,
        object_id: 7,
        image: "images/publisher/ast/logo.png".to_string(),
        use_in_slider: true,
    };

    assert_eq!(image.content_kind, ContentKind::Publisher);
    assert!(image.use_in_slider);
}
