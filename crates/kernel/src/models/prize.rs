//! Prize models.

use serde::{Deserialize, Serialize};

/// Prize identifier, unique within the catalog that holds it.
pub type PrizeId = u64;

/// A prize held by a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prize {
    /// Identifier, immutable once assigned.
    pub id: PrizeId,

    /// Display title.
    pub title: String,

    /// Free-form description, searched by the description filter.
    pub description: String,

    /// Image URL.
    pub image: String,
}

impl Prize {
    /// Build the seeded prize with the given global running id.
    pub fn seeded(id: PrizeId, catalog_id: u64) -> Self {
        Self {
            id,
            title: format!("Prize {id}"),
            description: format!("Description of prize {id} in catalog {catalog_id}"),
            image: format!("https://example.com/image{id}.png"),
        }
    }
}

/// Input for creating a prize. The id is assigned by the store.
///
/// Unknown keys in the request body are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrize {
    pub title: String,
    pub description: String,
    pub image: String,
}

impl CreatePrize {
    pub fn into_prize(self, id: PrizeId) -> Prize {
        Prize {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
        }
    }
}

/// Partial update of a prize.
///
/// Only `title`, `description` and `image` are updatable; any other key,
/// including `id`, is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePrize {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl UpdatePrize {
    /// Overwrite the supplied fields on `prize`.
    pub fn apply_to(self, prize: &mut Prize) {
        if let Some(title) = self.title {
            prize.title = title;
        }
        if let Some(description) = self.description {
            prize.description = description;
        }
        if let Some(image) = self.image {
            prize.image = image;
        }
    }
}
