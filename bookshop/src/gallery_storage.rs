use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    Set,
};
use tracing::debug;

use crate::content_ref::ContentRef;
use crate::entities::image_gallery;
use crate::error::StorageError;

/// SeaORM-backed storage for the generic image gallery.
pub struct GalleryStorage {
    pub db: DatabaseConnection,
}

impl GalleryStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let db = Database::connect(database_url).await?;
        Ok(Self { db })
    }

    pub fn with_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach an image to any entity via a generic reference.
    pub async fn attach(
        &self,
        reference: ContentRef,
        image: &str,
        use_in_slider: bool,
    ) -> Result<image_gallery::Model, StorageError> {
        let model = image_gallery::ActiveModel {
            id: NotSet,
            content_kind: Set(reference.kind),
            object_id: Set(reference.object_id),
            image: Set(image.to_owned()),
            use_in_slider: Set(use_in_slider),
        }
        .insert(&self.db)
        .await?;

        debug!(
            "image {} attached to {} {}",
            model.id,
            reference.kind.as_str(),
            reference.object_id
        );
        Ok(model)
    }

    pub async fn images_for(
        &self,
        reference: ContentRef,
    ) -> Result<Vec<image_gallery::Model>, StorageError> {
        Ok(image_gallery::Entity::find()
            .filter(image_gallery::Column::ContentKind.eq(reference.kind))
            .filter(image_gallery::Column::ObjectId.eq(reference.object_id))
            .all(&self.db)
            .await?)
    }

    /// Every image flagged for the slider/carousel, across all owners.
    pub async fn slider_images(&self) -> Result<Vec<image_gallery::Model>, StorageError> {
        Ok(image_gallery::Entity::find()
            .filter(image_gallery::Column::UseInSlider.eq(true))
            .all(&self.db)
            .await?)
    }
}
