use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, error, info};

use crate::entities::{cart, customer_order, order};
use crate::error::StorageError;
use crate::model::Checkout;

/// SeaORM-backed storage for order placement and status tracking.
pub struct OrderStorage {
    pub db: DatabaseConnection,
}

impl OrderStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let db = Database::connect(database_url).await?;
        Ok(Self { db })
    }

    pub fn with_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Convert a cart into an order in one transaction: insert the order
    /// row, mark the cart as ordered, and record the order in the
    /// customer's order list.
    pub async fn place_order(&self, checkout: &Checkout) -> Result<order::Model, StorageError> {
        debug!(
            "placing order for customer {} from cart {}",
            checkout.customer_id, checkout.cart_id
        );

        let cart = cart::Entity::find_by_id(checkout.cart_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| StorageError::not_found("cart", checkout.cart_id))?;

        if cart.in_order {
            error!("cart {} is already attached to an order", cart.id);
            return Err(StorageError::CartAlreadyOrdered(cart.id));
        }

        let txn = self.db.begin().await?;

        let order = order::ActiveModel {
            id: NotSet,
            customer_id: Set(checkout.customer_id),
            cart_id: Set(checkout.cart_id),
            first_name: Set(checkout.first_name.clone()),
            last_name: Set(checkout.last_name.clone()),
            phone: Set(checkout.phone.clone()),
            address: Set(checkout.address.clone()),
            status: Set(order::OrderStatus::default()),
            buying_type: Set(checkout.buying_type),
            comment: Set(checkout.comment.clone()),
            // Save hook stamps created_at and defaults the fulfillment date.
            created_at: NotSet,
            order_date: match checkout.order_date {
                Some(date) => Set(date),
                None => NotSet,
            },
        }
        .insert(&txn)
        .await?;

        let mut cart: cart::ActiveModel = cart.into();
        cart.in_order = Set(true);
        cart.update(&txn).await?;

        customer_order::Entity::insert(customer_order::ActiveModel {
            customer_id: Set(checkout.customer_id),
            order_id: Set(order.id),
        })
        .exec_without_returning(&txn)
        .await?;

        txn.commit().await?;

        info!(
            "placed order {} for customer {} (cart {})",
            order.id, checkout.customer_id, checkout.cart_id
        );
        Ok(order)
    }

    pub async fn orders_for_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<order::Model>, StorageError> {
        Ok(order::Entity::find()
            .filter(order::Column::CustomerId.eq(customer_id))
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn order(&self, order_id: i64) -> Result<Option<order::Model>, StorageError> {
        Ok(order::Entity::find_by_id(order_id).one(&self.db).await?)
    }

    /// Move an order to any status. No transition order is enforced.
    pub async fn set_status(
        &self,
        order_id: i64,
        status: order::OrderStatus,
    ) -> Result<order::Model, StorageError> {
        let order = order::Entity::find_by_id(order_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| StorageError::not_found("order", order_id))?;

        let mut order: order::ActiveModel = order.into();
        order.status = Set(status);
        let order = order.update(&self.db).await?;

        info!("order {} status set to {:?}", order.id, order.status);
        Ok(order)
    }
}
