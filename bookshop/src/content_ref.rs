//! Generic references: a (content kind, numeric id) pair pointing at a
//! record in any one of the catalog tables, resolved to the concrete row
//! at read time.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

use crate::entities::{author, book, media_type, publisher};

/// Which catalog table a generic reference points into. Stored as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
pub enum ContentKind {
    #[sea_orm(string_value = "book")]
    Book,
    #[sea_orm(string_value = "author")]
    Author,
    #[sea_orm(string_value = "publisher")]
    Publisher,
    #[sea_orm(string_value = "media_type")]
    MediaType,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Book => "book",
            ContentKind::Author => "author",
            ContentKind::Publisher => "publisher",
            ContentKind::MediaType => "media_type",
        }
    }
}

/// A resolved-at-read-time pointer to any catalog entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRef {
    pub kind: ContentKind,
    pub object_id: i64,
}

impl ContentRef {
    pub fn new(kind: ContentKind, object_id: i64) -> Self {
        Self { kind, object_id }
    }

    pub fn book(object_id: i64) -> Self {
        Self::new(ContentKind::Book, object_id)
    }

    /// Current price of the referenced object. Only books carry a price;
    /// resolving any other kind in a pricing context is an error, as is a
    /// dangling id.
    pub async fn price<C>(&self, db: &C) -> Result<Decimal, DbErr>
    where
        C: ConnectionTrait,
    {
        match self.kind {
            ContentKind::Book => {
                let book = book::Entity::find_by_id(self.object_id)
                    .one(db)
                    .await?
                    .ok_or_else(|| self.not_found())?;
                Ok(book.price)
            }
            kind => Err(DbErr::Custom(format!(
                "content kind '{}' has no price",
                kind.as_str()
            ))),
        }
    }

    /// Display label of the referenced object.
    pub async fn label<C>(&self, db: &C) -> Result<String, DbErr>
    where
        C: ConnectionTrait,
    {
        let label = match self.kind {
            ContentKind::Book => book::Entity::find_by_id(self.object_id)
                .one(db)
                .await?
                .map(|m| m.name),
            ContentKind::Author => author::Entity::find_by_id(self.object_id)
                .one(db)
                .await?
                .map(|m| m.name),
            ContentKind::Publisher => publisher::Entity::find_by_id(self.object_id)
                .one(db)
                .await?
                .map(|m| m.name),
            ContentKind::MediaType => media_type::Entity::find_by_id(self.object_id)
                .one(db)
                .await?
                .map(|m| m.name),
        };
        label.ok_or_else(|| self.not_found())
    }

    fn not_found(&self) -> DbErr {
        DbErr::RecordNotFound(format!(
            "no {} with id {}",
            self.kind.as_str(),
            self.object_id
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_strings() {
        for kind in [
            ContentKind::Book,
            ContentKind::Author,
            ContentKind::Publisher,
            ContentKind::MediaType,
        ] {
            assert_eq!(ContentKind::try_from_value(&kind.as_str().to_owned()).unwrap(), kind);
        }
    }

    #[test]
    fn reference_serializes() {
        let reference = ContentRef::book(7);
        let json = serde_json::to_string(&reference).unwrap();
        let back: ContentRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);
    }
}
