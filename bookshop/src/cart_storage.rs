use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, Database, DatabaseConnection,
    EntityTrait, ModelTrait, NotSet, QueryFilter, Set, TransactionTrait,
};
use tracing::{debug, info};

use crate::content_ref::ContentRef;
use crate::entities::{cart, cart_product};
use crate::error::StorageError;
use crate::model::CartView;

/// SeaORM-backed storage for carts and their line items.
///
/// Every mutation that touches a line also recalculates the cart's
/// denormalized totals inside the same transaction, so `total_products`
/// and `final_price` track the live lines at this layer even though the
/// columns stay writable.
pub struct CartStorage {
    pub db: DatabaseConnection,
}

impl CartStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let db = Database::connect(database_url).await?;
        Ok(Self { db })
    }

    pub fn with_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch the customer's open cart, creating one when none exists.
    /// A cart already attached to an order is never reused.
    pub async fn open_cart(
        &self,
        customer_id: i64,
        for_anonymous_user: bool,
    ) -> Result<cart::Model, StorageError> {
        let existing = cart::Entity::find()
            .filter(cart::Column::OwnerId.eq(customer_id))
            .filter(cart::Column::InOrder.eq(false))
            .one(&self.db)
            .await?;

        if let Some(cart) = existing {
            return Ok(cart);
        }

        let cart = cart::ActiveModel {
            id: NotSet,
            owner_id: Set(customer_id),
            total_products: Set(0),
            final_price: Set(Decimal::ZERO),
            in_order: Set(false),
            for_anonymous_user: Set(for_anonymous_user),
        }
        .insert(&self.db)
        .await?;

        info!("opened cart {} for customer {}", cart.id, customer_id);
        Ok(cart)
    }

    /// Add a line item for a generic reference. The entity's save hook
    /// fills in `final_price` from the referenced object's current price,
    /// and the cart totals move in the same transaction.
    pub async fn add_item(
        &self,
        customer_id: i64,
        cart_id: i64,
        reference: ContentRef,
        qty: i32,
    ) -> Result<cart_product::Model, StorageError> {
        debug!(
            "adding {} x {} {} to cart {}",
            qty,
            reference.kind.as_str(),
            reference.object_id,
            cart_id
        );

        let txn = self.db.begin().await?;

        let line = cart_product::ActiveModel {
            id: NotSet,
            customer_id: Set(customer_id),
            cart_id: Set(cart_id),
            content_kind: Set(reference.kind),
            object_id: Set(reference.object_id),
            qty: Set(qty),
            final_price: NotSet,
        }
        .insert(&txn)
        .await?;

        Self::recalculate_in(&txn, cart_id).await?;
        txn.commit().await?;
        Ok(line)
    }

    /// Change a line's quantity. Re-saving recomputes the line price from
    /// the referenced object's current catalog price.
    pub async fn set_quantity(
        &self,
        line_id: i64,
        qty: i32,
    ) -> Result<cart_product::Model, StorageError> {
        let txn = self.db.begin().await?;

        let line = cart_product::Entity::find_by_id(line_id)
            .one(&txn)
            .await?
            .ok_or_else(|| StorageError::not_found("cart line", line_id))?;

        let cart_id = line.cart_id;
        let mut line: cart_product::ActiveModel = line.into();
        line.qty = Set(qty);
        let line = line.update(&txn).await?;

        Self::recalculate_in(&txn, cart_id).await?;
        txn.commit().await?;
        Ok(line)
    }

    /// Re-save a line without changing anything, refreshing its recorded
    /// price from the catalog.
    pub async fn resave_item(&self, line_id: i64) -> Result<cart_product::Model, StorageError> {
        let txn = self.db.begin().await?;

        let line = cart_product::Entity::find_by_id(line_id)
            .one(&txn)
            .await?
            .ok_or_else(|| StorageError::not_found("cart line", line_id))?;

        let cart_id = line.cart_id;
        let mut line: cart_product::ActiveModel = line.into();
        // Mark qty dirty so the update is not a no-op; the hook rewrites
        // final_price either way.
        let qty = match &line.qty {
            ActiveValue::Set(qty) | ActiveValue::Unchanged(qty) => *qty,
            ActiveValue::NotSet => 1,
        };
        line.qty = Set(qty);
        let line = line.update(&txn).await?;

        Self::recalculate_in(&txn, cart_id).await?;
        txn.commit().await?;
        Ok(line)
    }

    pub async fn remove_item(&self, line_id: i64) -> Result<(), StorageError> {
        let txn = self.db.begin().await?;

        let line = cart_product::Entity::find_by_id(line_id)
            .one(&txn)
            .await?
            .ok_or_else(|| StorageError::not_found("cart line", line_id))?;

        let cart_id = line.cart_id;
        line.delete(&txn).await?;
        debug!("removed line {} from cart {}", line_id, cart_id);

        Self::recalculate_in(&txn, cart_id).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn cart_with_items(&self, cart_id: i64) -> Result<CartView, StorageError> {
        let cart = cart::Entity::find_by_id(cart_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| StorageError::not_found("cart", cart_id))?;

        let items = cart_product::Entity::find()
            .filter(cart_product::Column::CartId.eq(cart_id))
            .all(&self.db)
            .await?;

        Ok(CartView { cart, items })
    }

    /// Recompute and persist the cart's denormalized aggregates from its
    /// live lines: `total_products` is the sum of quantities, `final_price`
    /// the sum of line prices.
    pub async fn recalculate(&self, cart_id: i64) -> Result<cart::Model, StorageError> {
        let txn = self.db.begin().await?;
        let cart = Self::recalculate_in(&txn, cart_id).await?;
        txn.commit().await?;
        Ok(cart)
    }

    async fn recalculate_in<C>(db: &C, cart_id: i64) -> Result<cart::Model, StorageError>
    where
        C: ConnectionTrait,
    {
        let cart = cart::Entity::find_by_id(cart_id)
            .one(db)
            .await?
            .ok_or_else(|| StorageError::not_found("cart", cart_id))?;

        let items = cart_product::Entity::find()
            .filter(cart_product::Column::CartId.eq(cart_id))
            .all(db)
            .await?;

        let total_products: i32 = items.iter().map(|item| item.qty).sum();
        let final_price: Decimal = items.iter().map(|item| item.final_price).sum();

        let mut cart: cart::ActiveModel = cart.into();
        cart.total_products = Set(total_products);
        cart.final_price = Set(final_price);
        let cart = cart.update(db).await?;

        debug!(
            "cart {} recalculated: {} products, total {}",
            cart.id, cart.total_products, cart.final_price
        );
        Ok(cart)
    }
}
