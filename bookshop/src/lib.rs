//! Data layer for the bookshop: catalog entities, carts with generic
//! line items, order placement with status tracking, customer profiles,
//! notifications, and a generic image gallery.

pub mod cart_storage;
pub mod catalog_storage;
pub mod content_ref;
pub mod customer_storage;
pub mod entities;
pub mod error;
pub mod gallery_storage;
pub mod media;
pub mod model;
pub mod order_storage;
pub mod schema;

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Connect using the shared configuration.
pub async fn connect(config: &common::config::Config) -> Result<DatabaseConnection, DbErr> {
    Database::connect(config.common.database_url.as_str()).await
}
