use crate::error::model_error::ModelError;
use crate::{Photo, PhotoLinks, PhotoUrls, PhotoUser};

/// Builder for validated [`Photo`] values.
///
/// Photos normally arrive from the API; the builder exists for fixtures and
/// for callers that assemble a photo from stored parts.
#[derive(Debug, Clone, Default)]
pub struct PhotoBuilder {
    id: Option<String>,
    small_url: Option<String>,
    thumb_url: Option<String>,
    regular_url: Option<String>,
    alt_description: Option<String>,
    description: Option<String>,
    photographer: Option<String>,
    username: Option<String>,
    source_url: Option<String>,
}

impl PhotoBuilder {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set all three image sizes from one base URL, the way the CDN names them.
    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.small_url = Some(format!("{base}?w=400"));
        self.thumb_url = Some(format!("{base}?w=200"));
        self.regular_url = Some(format!("{base}?w=1080"));
        self
    }

    pub fn with_small_url(mut self, url: impl Into<String>) -> Self {
        self.small_url = Some(url.into());
        self
    }

    pub fn with_thumb_url(mut self, url: impl Into<String>) -> Self {
        self.thumb_url = Some(url.into());
        self
    }

    pub fn with_regular_url(mut self, url: impl Into<String>) -> Self {
        self.regular_url = Some(url.into());
        self
    }

    pub fn with_alt_description(mut self, alt: impl Into<String>) -> Self {
        self.alt_description = Some(alt.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_photographer(mut self, name: impl Into<String>) -> Self {
        self.photographer = Some(name.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Build the Photo, running the same validation applied to API records.
    #[track_caller]
    pub fn build(self) -> Result<Photo, ModelError> {
        let id = self
            .id
            .ok_or_else(|| ModelError::validation("Photo id is required"))?;

        let small = self
            .small_url
            .ok_or_else(|| ModelError::validation("Small image URL is required"))?;
        let thumb = self
            .thumb_url
            .ok_or_else(|| ModelError::validation("Thumbnail URL is required"))?;
        let regular = self
            .regular_url
            .ok_or_else(|| ModelError::validation("Regular image URL is required"))?;

        let name = self
            .photographer
            .ok_or_else(|| ModelError::validation("Photographer name is required"))?;

        let html = self
            .source_url
            .ok_or_else(|| ModelError::validation("Source URL is required"))?;

        if !html.starts_with("http://") && !html.starts_with("https://") {
            return Err(ModelError::validation(format!(
                "Invalid source URL format: {html}"
            )));
        }

        let photo = Photo {
            id,
            urls: PhotoUrls {
                small,
                thumb,
                regular,
            },
            alt_description: self.alt_description,
            description: self.description,
            user: PhotoUser {
                name,
                username: self.username,
            },
            links: PhotoLinks { html },
        };

        photo.validate()?;

        Ok(photo)
    }
}
