use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    Set,
};
use tracing::{debug, info};

use crate::entities::{author, book, genre, media_type, publisher};
use crate::error::StorageError;
use crate::model::{NewAuthor, NewBook, NewPublisher};

/// SeaORM-backed storage for the catalog side of the shop: media types,
/// authors, genres, publishers, and books.
pub struct CatalogStorage {
    pub db: DatabaseConnection,
}

impl CatalogStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let db = Database::connect(database_url).await?;
        Ok(Self { db })
    }

    pub fn with_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add_media_type(&self, name: &str) -> Result<media_type::Model, StorageError> {
        let model = media_type::ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
        }
        .insert(&self.db)
        .await?;

        debug!("created media type {} ({})", model.id, model.name);
        Ok(model)
    }

    pub async fn add_author(&self, author: &NewAuthor) -> Result<author::Model, StorageError> {
        let model = author::ActiveModel {
            id: NotSet,
            name: Set(author.name.clone()),
            slug: Set(author.slug.clone()),
            image: Set(author.image.clone()),
        }
        .insert(&self.db)
        .await?;

        debug!("created author {} ({})", model.id, model.name);
        Ok(model)
    }

    pub async fn add_genre(&self, name: &str, slug: &str) -> Result<genre::Model, StorageError> {
        let model = genre::ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
            slug: Set(slug.to_owned()),
        }
        .insert(&self.db)
        .await?;

        debug!("created genre {} ({})", model.id, model.name);
        Ok(model)
    }

    pub async fn add_publisher(
        &self,
        publisher: &NewPublisher,
    ) -> Result<publisher::Model, StorageError> {
        let model = publisher::ActiveModel {
            id: NotSet,
            name: Set(publisher.name.clone()),
            slug: Set(publisher.slug.clone()),
            image: Set(publisher.image.clone()),
            description: Set(publisher.description.clone()),
        }
        .insert(&self.db)
        .await?;

        debug!("created publisher {} ({})", model.id, model.name);
        Ok(model)
    }

    pub async fn add_book(&self, book: &NewBook) -> Result<book::Model, StorageError> {
        let model = book::ActiveModel {
            id: NotSet,
            author_id: Set(book.author_id),
            publisher_id: Set(book.publisher_id),
            media_type_id: Set(book.media_type_id),
            name: Set(book.name.clone()),
            slug: Set(book.slug.clone()),
            image: Set(book.image.clone()),
            release_year: Set(book.release_year),
            description: match &book.description {
                Some(text) => Set(text.clone()),
                // Column default stands in until the description arrives.
                None => NotSet,
            },
            stock: Set(book.stock),
            price: Set(book.price),
            offer_of_the_week: Set(book.offer_of_the_week),
        }
        .insert(&self.db)
        .await?;

        info!("created book {} ({})", model.id, model.name);
        Ok(model)
    }

    pub async fn book(&self, book_id: i64) -> Result<Option<book::Model>, StorageError> {
        Ok(book::Entity::find_by_id(book_id).one(&self.db).await?)
    }

    pub async fn book_by_slug(&self, slug: &str) -> Result<Option<book::Model>, StorageError> {
        Ok(book::Entity::find()
            .filter(book::Column::Slug.eq(slug))
            .one(&self.db)
            .await?)
    }

    pub async fn weekly_offers(&self) -> Result<Vec<book::Model>, StorageError> {
        Ok(book::Entity::find()
            .filter(book::Column::OfferOfTheWeek.eq(true))
            .all(&self.db)
            .await?)
    }

    /// Overwrite a book's catalog price. Existing cart lines keep their
    /// recorded price until their next save.
    pub async fn set_price(&self, book_id: i64, price: Decimal) -> Result<book::Model, StorageError> {
        let book = book::Entity::find_by_id(book_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| StorageError::not_found("book", book_id))?;

        let mut book: book::ActiveModel = book.into();
        book.price = Set(price);
        let model = book.update(&self.db).await?;

        info!("book {} price set to {}", model.id, model.price);
        Ok(model)
    }

    /// Adjust stock by a signed delta. No reservation logic; the count can
    /// go negative the same way the underlying integer column allows, and
    /// it saturates at the column bounds instead of wrapping.
    pub async fn adjust_stock(&self, book_id: i64, delta: i32) -> Result<book::Model, StorageError> {
        let book = book::Entity::find_by_id(book_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| StorageError::not_found("book", book_id))?;

        let new_stock = book.stock.saturating_add(delta);
        let mut book: book::ActiveModel = book.into();
        book.stock = Set(new_stock);
        let model = book.update(&self.db).await?;

        debug!("book {} stock adjusted to {}", model.id, model.stock);
        Ok(model)
    }
}
