pub mod builder;

use crate::ModelError;

use serde::{Deserialize, Serialize};

/// A single image record from the search API.
///
/// Field names follow the API payload. Unknown fields are ignored on
/// decode so API additions never break a search or a favorites reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub urls: PhotoUrls,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub user: PhotoUser,
    pub links: PhotoLinks,
}

/// Image references at the three sizes the gallery displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub small: String,
    pub thumb: String,
    pub regular: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUser {
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoLinks {
    /// Photo page on the source site.
    pub html: String,
}

impl Photo {
    /// Text describing the image, preferring the accessibility description.
    ///
    /// Blank strings count as missing; `fallback` is returned when neither
    /// description has content.
    pub fn alt_text<'a>(&'a self, fallback: &'a str) -> &'a str {
        [&self.alt_description, &self.description]
            .into_iter()
            .flatten()
            .map(|text| text.trim())
            .find(|text| !text.is_empty())
            .unwrap_or(fallback)
    }

    /// Check the fields the gallery cannot render without.
    ///
    /// Serde already guarantees presence; this rejects present-but-empty
    /// values that the API occasionally sends for removed photos.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.id.trim().is_empty() {
            return Err(ModelError::validation("Photo id cannot be empty"));
        }

        let urls = [
            ("small", &self.urls.small),
            ("thumb", &self.urls.thumb),
            ("regular", &self.urls.regular),
        ];
        for (size, url) in urls {
            if url.trim().is_empty() {
                return Err(ModelError::validation(format!(
                    "Photo {} has an empty {size} image URL",
                    self.id
                )));
            }
        }

        Ok(())
    }
}
