use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::content_ref::{ContentKind, ContentRef};

/// Media type a book is published on (electronic, paper, ...)
pub mod media_type {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "media_types")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        #[sea_orm(column_type = "String(StringLen::N(100))")]
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::book::Entity")]
        Books,
    }

    impl Related<super::book::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Books.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Book author. One author per book in this model; no co-authorship.
pub mod author {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "authors")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        #[sea_orm(column_type = "String(StringLen::N(255))")]
        pub name: String,
        pub slug: String,
        pub image: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::book::Entity")]
        Books,
    }

    impl Related<super::book::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Books.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Genre. Not linked to books in this schema.
pub mod genre {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "genres")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        #[sea_orm(column_type = "String(StringLen::N(50))")]
        pub name: String,
        pub slug: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Publisher
pub mod publisher {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "publishers")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        #[sea_orm(column_type = "String(StringLen::N(255))")]
        pub name: String,
        pub slug: String,
        pub image: Option<String>,
        #[sea_orm(column_type = "Text")]
        pub description: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::book::Entity")]
        Books,
    }

    impl Related<super::book::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Books.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Catalog book. Stock and price are mutable over the book's lifetime.
pub mod book {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "books")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub author_id: i64,
        pub publisher_id: i64,
        pub media_type_id: i64,
        #[sea_orm(column_type = "String(StringLen::N(255))")]
        pub name: String,
        pub slug: String,
        pub image: String,
        pub release_year: i32,
        #[sea_orm(column_type = "Text", default_value = "Description coming soon")]
        pub description: String,
        #[sea_orm(default_value = 1)]
        pub stock: i32,
        #[sea_orm(column_type = "Decimal(Some((9, 2)))")]
        pub price: Decimal,
        #[sea_orm(default_value = false)]
        pub offer_of_the_week: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(belongs_to = "super::author::Entity", from = "Column::AuthorId", to = "super::author::Column::Id")]
        Author,
        #[sea_orm(belongs_to = "super::publisher::Entity", from = "Column::PublisherId", to = "super::publisher::Column::Id")]
        Publisher,
        #[sea_orm(belongs_to = "super::media_type::Entity", from = "Column::MediaTypeId", to = "super::media_type::Column::Id")]
        MediaType,
    }

    impl Related<super::author::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Author.def()
        }
    }

    impl Related<super::publisher::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Publisher.def()
        }
    }

    impl Related<super::media_type::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::MediaType.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Cart line item: a purchaser, a cart, and a generic reference to a
/// catalog object, with a quantity and a computed final price.
pub mod cart_product {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "cart_products")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub customer_id: i64,
        pub cart_id: i64,
        pub content_kind: ContentKind,
        pub object_id: i64,
        #[sea_orm(default_value = 1)]
        pub qty: i32,
        #[sea_orm(column_type = "Decimal(Some((9, 2)))")]
        pub final_price: Decimal,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(belongs_to = "super::customer::Entity", from = "Column::CustomerId", to = "super::customer::Column::Id")]
        Customer,
        #[sea_orm(belongs_to = "super::cart::Entity", from = "Column::CartId", to = "super::cart::Column::Id")]
        Cart,
    }

    impl Related<super::customer::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Customer.def()
        }
    }

    impl Related<super::cart::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Cart.def()
        }
    }

    #[async_trait]
    impl ActiveModelBehavior for ActiveModel {
        /// Recompute the stored final price on every save: qty times the
        /// referenced object's current catalog price. A later price change
        /// on the catalog item plus any re-save of this line silently moves
        /// the recorded price with it.
        async fn before_save<C>(mut self, db: &C, _insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            let kind = match &self.content_kind {
                ActiveValue::Set(kind) | ActiveValue::Unchanged(kind) => *kind,
                ActiveValue::NotSet => {
                    return Err(DbErr::Custom(
                        "cart line saved without a content kind".to_owned(),
                    ));
                }
            };
            let object_id = match &self.object_id {
                ActiveValue::Set(id) | ActiveValue::Unchanged(id) => *id,
                ActiveValue::NotSet => {
                    return Err(DbErr::Custom(
                        "cart line saved without an object id".to_owned(),
                    ));
                }
            };
            let qty = match &self.qty {
                ActiveValue::Set(qty) | ActiveValue::Unchanged(qty) => *qty,
                ActiveValue::NotSet => 1,
            };

            let price = ContentRef::new(kind, object_id).price(db).await?;
            self.final_price = Set(Decimal::from(qty) * price);
            Ok(self)
        }
    }
}

/// Shopping cart. `total_products` and `final_price` are denormalized
/// aggregates over the live lines; cart mutations recalculate them.
pub mod cart {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "carts")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub owner_id: i64,
        #[sea_orm(default_value = 0)]
        pub total_products: i32,
        #[sea_orm(column_type = "Decimal(Some((9, 2)))")]
        pub final_price: Decimal,
        #[sea_orm(default_value = false)]
        pub in_order: bool,
        #[sea_orm(default_value = true)]
        pub for_anonymous_user: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(belongs_to = "super::customer::Entity", from = "Column::OwnerId", to = "super::customer::Column::Id")]
        Owner,
        #[sea_orm(has_many = "super::cart_product::Entity")]
        Products,
    }

    impl Related<super::customer::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Owner.def()
        }
    }

    impl Related<super::cart_product::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Products.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Placed order with recipient details and status tracking.
pub mod order {
    use super::*;

    /// Order lifecycle states. No transition order is enforced.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
    #[sea_orm(rs_type = "String", db_type = "String(StringLen::N(100))")]
    pub enum OrderStatus {
        #[sea_orm(string_value = "new")]
        New,
        #[sea_orm(string_value = "in_progress")]
        InProgress,
        #[sea_orm(string_value = "is_ready")]
        Ready,
        #[sea_orm(string_value = "completed")]
        Completed,
    }

    impl Default for OrderStatus {
        fn default() -> Self {
            Self::New
        }
    }

    /// Pickup by the customer or courier delivery.
    ///
    /// `ActiveEnum` is implemented by hand (mirroring the `DeriveActiveEnum`
    /// expansion) because the stored value `"self"` camel-cases to the
    /// reserved keyword `Self`, which breaks the derive macro.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
    pub enum BuyingType {
        SelfPickup,
        Delivery,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BuyingTypeEnum;

    impl sea_orm::sea_query::Iden for BuyingTypeEnum {
        fn unquoted(&self, s: &mut dyn std::fmt::Write) {
            write!(s, "{}", "BuyingType").unwrap();
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, sea_orm::EnumIter)]
    pub enum BuyingTypeVariant {
        SelfPickup,
        Delivery,
    }

    impl sea_orm::sea_query::Iden for BuyingTypeVariant {
        fn unquoted(&self, s: &mut dyn std::fmt::Write) {
            write!(
                s,
                "{}",
                match self {
                    Self::SelfPickup => "self",
                    Self::Delivery => "delivery",
                }
            )
            .unwrap();
        }
    }

    impl BuyingType {
        pub fn iden_values() -> Vec<sea_orm::sea_query::DynIden> {
            <BuyingTypeVariant as sea_orm::strum::IntoEnumIterator>::iter()
                .map(|v| sea_orm::sea_query::SeaRc::new(v) as sea_orm::sea_query::DynIden)
                .collect()
        }
    }

    impl sea_orm::ActiveEnum for BuyingType {
        type Value = String;

        type ValueVec = Vec<String>;

        fn name() -> sea_orm::sea_query::DynIden {
            sea_orm::sea_query::SeaRc::new(BuyingTypeEnum) as sea_orm::sea_query::DynIden
        }

        fn to_value(&self) -> <Self as sea_orm::ActiveEnum>::Value {
            match self {
                Self::SelfPickup => "self",
                Self::Delivery => "delivery",
            }
            .to_owned()
        }

        fn try_from_value(
            v: &<Self as sea_orm::ActiveEnum>::Value,
        ) -> std::result::Result<Self, sea_orm::DbErr> {
            match v.as_ref() {
                "self" => Ok(Self::SelfPickup),
                "delivery" => Ok(Self::Delivery),
                _ => Err(sea_orm::DbErr::Type(format!(
                    "unexpected value for {} enum: {}",
                    stringify!(BuyingType),
                    v
                ))),
            }
        }

        fn db_type() -> sea_orm::ColumnDef {
            sea_orm::prelude::ColumnTypeTrait::def(sea_orm::ColumnType::String(StringLen::N(100)))
        }
    }

    impl sea_orm::TryGetableArray for BuyingType {
        fn try_get_by<I: sea_orm::ColIdx>(
            res: &sea_orm::QueryResult,
            index: I,
        ) -> std::result::Result<Vec<Self>, sea_orm::TryGetError> {
            <<Self as sea_orm::ActiveEnum>::Value as sea_orm::ActiveEnumValue>::try_get_vec_by(
                res, index,
            )?
            .into_iter()
            .map(|value| <Self as sea_orm::ActiveEnum>::try_from_value(&value).map_err(Into::into))
            .collect()
        }
    }

    #[allow(clippy::from_over_into)]
    impl Into<sea_orm::sea_query::Value> for BuyingType {
        fn into(self) -> sea_orm::sea_query::Value {
            <Self as sea_orm::ActiveEnum>::to_value(&self).into()
        }
    }

    impl sea_orm::TryGetable for BuyingType {
        fn try_get_by<I: sea_orm::ColIdx>(
            res: &sea_orm::QueryResult,
            idx: I,
        ) -> std::result::Result<Self, sea_orm::TryGetError> {
            let value =
                <<Self as sea_orm::ActiveEnum>::Value as sea_orm::TryGetable>::try_get_by(res, idx)?;
            <Self as sea_orm::ActiveEnum>::try_from_value(&value).map_err(sea_orm::TryGetError::DbErr)
        }
    }

    impl sea_orm::sea_query::ValueType for BuyingType {
        fn try_from(
            v: sea_orm::sea_query::Value,
        ) -> std::result::Result<Self, sea_orm::sea_query::ValueTypeErr> {
            let value =
                <<Self as sea_orm::ActiveEnum>::Value as sea_orm::sea_query::ValueType>::try_from(v)?;
            <Self as sea_orm::ActiveEnum>::try_from_value(&value)
                .map_err(|_| sea_orm::sea_query::ValueTypeErr)
        }

        fn type_name() -> String {
            <<Self as sea_orm::ActiveEnum>::Value as sea_orm::sea_query::ValueType>::type_name()
        }

        fn array_type() -> sea_orm::sea_query::ArrayType {
            <<Self as sea_orm::ActiveEnum>::Value as sea_orm::sea_query::ValueType>::array_type()
        }

        fn column_type() -> sea_orm::sea_query::ColumnType {
            <Self as sea_orm::ActiveEnum>::db_type()
                .get_column_type()
                .to_owned()
                .into()
        }

        fn enum_type_name() -> Option<&'static str> {
            Some(stringify!(BuyingType))
        }
    }

    impl sea_orm::sea_query::Nullable for BuyingType {
        fn null() -> sea_orm::sea_query::Value {
            <<Self as sea_orm::ActiveEnum>::Value as sea_orm::sea_query::Nullable>::null()
        }
    }

    impl sea_orm::sea_query::value::with_array::NotU8 for BuyingType {}

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "orders")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub customer_id: i64,
        pub cart_id: i64,
        #[sea_orm(column_type = "String(StringLen::N(255))")]
        pub first_name: String,
        #[sea_orm(column_type = "String(StringLen::N(255))")]
        pub last_name: String,
        #[sea_orm(column_type = "String(StringLen::N(20))")]
        pub phone: String,
        #[sea_orm(column_type = "String(StringLen::N(1024))", nullable)]
        pub address: Option<String>,
        #[sea_orm(default_value = "new")]
        pub status: OrderStatus,
        pub buying_type: BuyingType,
        #[sea_orm(column_type = "Text", nullable)]
        pub comment: Option<String>,
        pub created_at: Date,
        pub order_date: Date,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(belongs_to = "super::customer::Entity", from = "Column::CustomerId", to = "super::customer::Column::Id")]
        Customer,
        #[sea_orm(belongs_to = "super::cart::Entity", from = "Column::CartId", to = "super::cart::Column::Id")]
        Cart,
    }

    impl Related<super::customer::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Customer.def()
        }
    }

    impl Related<super::cart::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Cart.def()
        }
    }

    #[async_trait]
    impl ActiveModelBehavior for ActiveModel {
        /// `created_at` tracks the latest save; `order_date` defaults to
        /// today when the caller does not request a fulfillment date.
        async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            self.created_at = Set(Utc::now().date_naive());
            if insert && !self.order_date.is_set() {
                self.order_date = Set(Utc::now().date_naive());
            }
            Ok(self)
        }
    }
}

/// Customer profile, one-to-one with an external user account.
pub mod customer {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "customers")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        /// Identity in the external user-account provider.
        #[sea_orm(unique)]
        pub user_id: i64,
        #[sea_orm(default_value = true)]
        pub is_active: bool,
        #[sea_orm(column_type = "String(StringLen::N(20))")]
        pub phone: String,
        #[sea_orm(column_type = "Text", nullable)]
        pub address: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::cart::Entity")]
        Carts,
        #[sea_orm(has_many = "super::notification::Entity")]
        Notifications,
    }

    impl Related<super::cart::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Carts.def()
        }
    }

    impl Related<super::notification::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Notifications.def()
        }
    }

    // Orders twice over: the FK on orders.customer_id, and this join
    // table duplicating it, kept as the original schema has it.
    impl Related<super::order::Entity> for Entity {
        fn to() -> RelationDef {
            super::customer_order::Relation::Order.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::customer_order::Relation::Customer.def().rev())
        }
    }

    impl Related<super::book::Entity> for Entity {
        fn to() -> RelationDef {
            super::wishlist_item::Relation::Book.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::wishlist_item::Relation::Customer.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Join table for the customer-orders many-to-many.
pub mod customer_order {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "customer_orders")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub customer_id: i64,
        #[sea_orm(primary_key, auto_increment = false)]
        pub order_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(belongs_to = "super::customer::Entity", from = "Column::CustomerId", to = "super::customer::Column::Id")]
        Customer,
        #[sea_orm(belongs_to = "super::order::Entity", from = "Column::OrderId", to = "super::order::Column::Id")]
        Order,
    }

    impl Related<super::customer::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Customer.def()
        }
    }

    impl Related<super::order::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Order.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Join table for the customer wishlist.
pub mod wishlist_item {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "wishlist_items")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub customer_id: i64,
        #[sea_orm(primary_key, auto_increment = false)]
        pub book_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(belongs_to = "super::customer::Entity", from = "Column::CustomerId", to = "super::customer::Column::Id")]
        Customer,
        #[sea_orm(belongs_to = "super::book::Entity", from = "Column::BookId", to = "super::book::Column::Id")]
        Book,
    }

    impl Related<super::customer::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Customer.def()
        }
    }

    impl Related<super::book::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Book.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Notification addressed to a customer.
pub mod notification {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "notifications")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub recipient_id: i64,
        #[sea_orm(column_type = "Text")]
        pub text: String,
        #[sea_orm(default_value = false)]
        pub read: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(belongs_to = "super::customer::Entity", from = "Column::RecipientId", to = "super::customer::Column::Id")]
        Recipient,
    }

    impl Related<super::customer::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Recipient.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Image attached to any entity through a generic reference.
pub mod image_gallery {
    use super::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "image_gallery")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub content_kind: ContentKind,
        pub object_id: i64,
        pub image: String,
        #[sea_orm(default_value = false)]
        pub use_in_slider: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
