//! Table setup from the entity definitions.
//!
//! Production deployments own their migrations; this covers tests and
//! throwaway environments, where the schema is derived straight from the
//! entities.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};
use tracing::debug;

use crate::entities::*;

/// Create every bookshop table on the given connection.
///
/// Parents come before children so foreign keys resolve on backends that
/// check them at creation time.
pub async fn create_all_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = vec![
        schema.create_table_from_entity(media_type::Entity),
        schema.create_table_from_entity(author::Entity),
        schema.create_table_from_entity(genre::Entity),
        schema.create_table_from_entity(publisher::Entity),
        schema.create_table_from_entity(book::Entity),
        schema.create_table_from_entity(customer::Entity),
        schema.create_table_from_entity(cart::Entity),
        schema.create_table_from_entity(cart_product::Entity),
        schema.create_table_from_entity(order::Entity),
        schema.create_table_from_entity(customer_order::Entity),
        schema.create_table_from_entity(wishlist_item::Entity),
        schema.create_table_from_entity(notification::Entity),
        schema.create_table_from_entity(image_gallery::Entity),
    ];

    debug!("creating {} tables on {:?}", statements.len(), backend);
    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(backend.build(&*statement)).await?;
    }

    Ok(())
}
