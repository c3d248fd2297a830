use log::{error, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::{BOOKS_BASE_URL, COVERS_BASE_URL};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Failures while fetching the book list
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
}

/// A single book entry from the books-by-subject listing
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Work {
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover_id: Option<u64>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

impl Work {
    /// Name of the first listed author, or "Unknown"
    pub fn primary_author(&self) -> &str {
        self.authors
            .first()
            .and_then(|author| author.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }

    /// Medium-size cover image, when the work has one
    pub fn cover_url(&self) -> Option<String> {
        self.cover_id
            .map(|id| format!("{}/{}-M.jpg", COVERS_BASE_URL, id))
    }
}

#[derive(Deserialize)]
struct SubjectResponse {
    #[serde(default)]
    works: Option<Vec<Work>>,
}

/// Decode a subject listing body. A missing or null `works` array yields no books.
pub fn parse_works(body: &str) -> Result<Vec<Work>, NetworkError> {
    let response: SubjectResponse = serde_json::from_str(body)?;
    Ok(response.works.unwrap_or_default())
}

/// Read-only client for the public books-by-subject endpoint
pub struct BookCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl BookCatalog {
    pub fn new() -> Result<Self, NetworkError> {
        Self::with_base_url(BOOKS_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, NetworkError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn subject_url(&self, subject: &str, limit: u32) -> String {
        format!("{}/{}.json?limit={}", self.base_url, subject, limit)
    }

    /// Fetch one page of works for a subject. No retries.
    pub fn fetch(&self, subject: &str, limit: u32) -> Result<Vec<Work>, NetworkError> {
        let url = self.subject_url(subject, limit);
        info!("Fetching books from {}", url);

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            return Err(NetworkError::Status(response.status().as_u16()));
        }

        parse_works(&response.text()?)
    }

    /// Fetch works, logging any failure and falling back to an empty list
    pub fn fetch_or_empty(&self, subject: &str, limit: u32) -> Vec<Work> {
        match self.fetch(subject, limit) {
            Ok(works) => works,
            Err(e) => {
                error!("Error fetching data: {}", e);
                Vec::new()
            }
        }
    }
}
