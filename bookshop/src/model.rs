//! Plain data-in/data-out models wrapping the entity layer: inputs for
//! catalog and checkout writes, and the cart aggregate handed back to
//! callers.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::Date;
use serde::{Deserialize, Serialize};

use crate::entities::{cart, cart_product, order};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPublisher {
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub author_id: i64,
    pub publisher_id: i64,
    pub media_type_id: i64,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub release_year: i32,
    pub description: Option<String>,
    pub stock: i32,
    pub price: Decimal,
    pub offer_of_the_week: bool,
}

/// Everything order placement needs beyond the cart itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkout {
    pub customer_id: i64,
    pub cart_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: Option<String>,
    pub buying_type: order::BuyingType,
    pub comment: Option<String>,
    /// Requested fulfillment date; defaults to today when absent.
    pub order_date: Option<Date>,
}

/// A cart together with its live line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub cart: cart::Model,
    pub items: Vec<cart_product::Model>,
}
