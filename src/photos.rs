//! Photo-search collaborator used for destination image enrichment.

use serde::Deserialize;
use thiserror::Error;

use crate::models::config::PexelsConfig;

/// Errors produced by a photo-search backend.
#[derive(Debug, Error)]
pub enum PhotoSearchError {
    #[error("photo search request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("photo search returned status {status}")]
    Api { status: u16 },
}

/// A single photo hit.
///
/// The medium-resolution URL is preferred for storage; `original_url` is the
/// fallback when the provider supplies no resized variant.
#[derive(Debug, Clone, Default)]
pub struct Photo {
    pub medium_url: String,
    pub original_url: String,
}

impl Photo {
    /// The URL worth persisting, medium resolution preferred.
    pub fn preferred_url(&self) -> Option<&str> {
        if !self.medium_url.trim().is_empty() {
            Some(self.medium_url.trim())
        } else if !self.original_url.trim().is_empty() {
            Some(self.original_url.trim())
        } else {
            None
        }
    }
}

/// Abstract photo-search service.
pub trait PhotoSearcher {
    /// Search for photos matching `query`.
    fn search_photos(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<Photo>, PhotoSearchError>;
}

/// Pexels-backed implementation of [`PhotoSearcher`].
pub struct PexelsClient {
    endpoint: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct PexelsSearchResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    #[serde(default)]
    src: PexelsPhotoSrc,
}

#[derive(Debug, Default, Deserialize)]
struct PexelsPhotoSrc {
    #[serde(default)]
    medium: String,
    #[serde(default)]
    original: String,
}

impl PexelsClient {
    pub fn new(config: &PexelsConfig) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl PhotoSearcher for PexelsClient {
    fn search_photos(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<Photo>, PhotoSearchError> {
        let response = self
            .client
            .get(format!("{}/search", self.endpoint))
            .header("Authorization", &self.api_key)
            .query(&[
                ("query", query),
                ("per_page", &per_page.to_string()),
                ("page", &page.to_string()),
            ])
            .send()?;

        if !response.status().is_success() {
            return Err(PhotoSearchError::Api {
                status: response.status().as_u16(),
            });
        }

        let body: PexelsSearchResponse = response.json()?;
        Ok(body
            .photos
            .into_iter()
            .map(|p| Photo {
                medium_url: p.src.medium,
                original_url: p.src.original,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_url_favors_medium_resolution() {
        let photo = Photo {
            medium_url: "https://img.example.com/medium.jpg".to_string(),
            original_url: "https://img.example.com/original.jpg".to_string(),
        };
        assert_eq!(
            photo.preferred_url(),
            Some("https://img.example.com/medium.jpg")
        );
    }

    #[test]
    fn preferred_url_falls_back_to_original() {
        let photo = Photo {
            medium_url: "  ".to_string(),
            original_url: "https://img.example.com/original.jpg".to_string(),
        };
        assert_eq!(
            photo.preferred_url(),
            Some("https://img.example.com/original.jpg")
        );
    }

    #[test]
    fn preferred_url_is_none_when_both_blank() {
        assert_eq!(Photo::default().preferred_url(), None);
    }

    #[test]
    fn pexels_response_deserializes_with_missing_fields() {
        let body: PexelsSearchResponse =
            serde_json::from_str(r#"{"photos": [{"src": {"medium": "https://m"}}, {}]}"#).unwrap();
        assert_eq!(body.photos.len(), 2);
        assert_eq!(body.photos[0].src.medium, "https://m");
        assert!(body.photos[1].src.original.is_empty());
    }
}
