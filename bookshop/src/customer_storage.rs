use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, ModelTrait, NotSet,
    QueryFilter, Set,
};
use tracing::{debug, info};

use crate::entities::{book, customer, notification, wishlist_item};
use crate::error::StorageError;

/// SeaORM-backed storage for customer profiles, wishlists, and
/// notifications.
pub struct CustomerStorage {
    pub db: DatabaseConnection,
}

impl CustomerStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let db = Database::connect(database_url).await?;
        Ok(Self { db })
    }

    pub fn with_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a profile for an external user-account identity.
    pub async fn create(
        &self,
        user_id: i64,
        phone: &str,
        address: Option<&str>,
    ) -> Result<customer::Model, StorageError> {
        let model = customer::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            is_active: Set(true),
            phone: Set(phone.to_owned()),
            address: Set(address.map(str::to_owned)),
        }
        .insert(&self.db)
        .await?;

        info!("created customer {} for user {}", model.id, user_id);
        Ok(model)
    }

    pub async fn by_user_id(&self, user_id: i64) -> Result<Option<customer::Model>, StorageError> {
        Ok(customer::Entity::find()
            .filter(customer::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?)
    }

    pub async fn set_active(
        &self,
        customer_id: i64,
        is_active: bool,
    ) -> Result<customer::Model, StorageError> {
        let model = customer::Entity::find_by_id(customer_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| StorageError::not_found("customer", customer_id))?;

        let mut model: customer::ActiveModel = model.into();
        model.is_active = Set(is_active);
        Ok(model.update(&self.db).await?)
    }

    /// Put a book on the customer's wishlist. Adding the same book twice
    /// is a no-op.
    pub async fn wishlist_add(&self, customer_id: i64, book_id: i64) -> Result<(), StorageError> {
        let existing = wishlist_item::Entity::find_by_id((customer_id, book_id))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        wishlist_item::Entity::insert(wishlist_item::ActiveModel {
            customer_id: Set(customer_id),
            book_id: Set(book_id),
        })
        .exec_without_returning(&self.db)
        .await?;

        debug!("book {} wishlisted by customer {}", book_id, customer_id);
        Ok(())
    }

    pub async fn wishlist_remove(
        &self,
        customer_id: i64,
        book_id: i64,
    ) -> Result<(), StorageError> {
        wishlist_item::Entity::delete_by_id((customer_id, book_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    /// Books on the customer's wishlist, through the join table.
    pub async fn wishlist(&self, customer_id: i64) -> Result<Vec<book::Model>, StorageError> {
        let customer = customer::Entity::find_by_id(customer_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| StorageError::not_found("customer", customer_id))?;

        Ok(customer.find_related(book::Entity).all(&self.db).await?)
    }

    /// Leave an unread notification for a customer.
    pub async fn notify(
        &self,
        customer_id: i64,
        text: &str,
    ) -> Result<notification::Model, StorageError> {
        let model = notification::ActiveModel {
            id: NotSet,
            recipient_id: Set(customer_id),
            text: Set(text.to_owned()),
            read: Set(false),
        }
        .insert(&self.db)
        .await?;

        debug!("notification {} queued for customer {}", model.id, customer_id);
        Ok(model)
    }

    pub async fn unread_notifications(
        &self,
        customer_id: i64,
    ) -> Result<Vec<notification::Model>, StorageError> {
        Ok(notification::Entity::find()
            .filter(notification::Column::RecipientId.eq(customer_id))
            .filter(notification::Column::Read.eq(false))
            .all(&self.db)
            .await?)
    }

    pub async fn mark_read(
        &self,
        notification_id: i64,
    ) -> Result<notification::Model, StorageError> {
        let model = notification::Entity::find_by_id(notification_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| StorageError::not_found("notification", notification_id))?;

        let mut model: notification::ActiveModel = model.into();
        model.read = Set(true);
        Ok(model.update(&self.db).await?)
    }
}
