//! Wikipedia-backed enrichment for guessed animals.
//!
//! Looks up the page summary on Wikipedia and image URLs on Wikimedia
//! Commons. Every failure is logged at debug level and leaves the
//! corresponding field empty.

use std::{collections::HashMap, time::Duration};

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    Result,
    ports::{AnimalInfo, AnimalInfoSource},
};

const USER_AGENT: &str = "AnimalInfoBot/1.0 (Educational Project)";
const COMMONS_URL: &str = "https://commons.wikimedia.org/w/api.php";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct Summary {
    extract: Option<String>,
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommonsResponse {
    query: Option<CommonsQuery>,
}

#[derive(Debug, Deserialize)]
struct CommonsQuery {
    #[serde(default)]
    pages: HashMap<String, CommonsPage>,
}

#[derive(Debug, Deserialize)]
struct CommonsPage {
    #[serde(default)]
    imageinfo: Vec<ImageInfo>,
}

#[derive(Debug, Deserialize)]
struct ImageInfo {
    url: Option<String>,
}

/// Blocking client for the Wikipedia REST API and Wikimedia Commons.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    summary_url: String,
    commons_url: String,
}

impl WikipediaClient {
    /// Create a client for the Wikipedia edition in `language` (e.g. `en`).
    pub fn new(language: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            summary_url: format!("https://{language}.wikipedia.org/api/rest_v1/page/summary/"),
            commons_url: COMMONS_URL.to_string(),
        })
    }

    fn fetch_summary(&self, title: &str) -> Result<Summary> {
        let summary = self
            .client
            .get(format!("{}{title}", self.summary_url))
            .send()?
            .error_for_status()?
            .json()?;
        Ok(summary)
    }

    fn fetch_images(&self, title: &str) -> Result<Vec<String>> {
        let response: CommonsResponse = self
            .client
            .get(&self.commons_url)
            .query(&[
                ("action", "query"),
                ("generator", "images"),
                ("titles", title),
                ("prop", "imageinfo"),
                ("iiprop", "url"),
                ("format", "json"),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        let mut pages: Vec<(String, CommonsPage)> = response
            .query
            .map(|q| q.pages.into_iter().collect())
            .unwrap_or_default();
        pages.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(pages
            .into_iter()
            .filter_map(|(_, page)| page.imageinfo.into_iter().next()?.url)
            .collect())
    }
}

impl AnimalInfoSource for WikipediaClient {
    fn describe(&self, animal: &str) -> AnimalInfo {
        let title = animal.trim().replace(' ', "_");
        let mut info = AnimalInfo::empty(animal);

        match self.fetch_summary(&title) {
            Ok(summary) => {
                info.summary = summary.extract;
                info.thumbnail = summary.thumbnail.and_then(|t| t.source);
            }
            Err(error) => debug!(animal, %error, "no summary available"),
        }

        match self.fetch_images(animal.trim()) {
            Ok(images) => info.images = images,
            Err(error) => debug!(animal, %error, "no images available"),
        }

        info
    }
}

/// Offline enrichment source that never has anything to say.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInfo;

impl AnimalInfoSource for NoInfo {
    fn describe(&self, animal: &str) -> AnimalInfo {
        AnimalInfo::empty(animal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_info_is_empty() {
        let info = NoInfo.describe("Dog");
        assert_eq!(info.name, "Dog");
        assert!(info.is_empty());
    }

    #[test]
    fn test_summary_url_uses_language() {
        let client = WikipediaClient::new("fr").unwrap();
        assert_eq!(
            client.summary_url,
            "https://fr.wikipedia.org/api/rest_v1/page/summary/"
        );
    }

    #[test]
    fn test_commons_response_parsing() {
        let body = r#"{"query": {"pages": {
            "-2": {"title": "File:b.jpg", "imageinfo": [{"url": "https://x/b.jpg"}]},
            "-1": {"title": "File:a.jpg", "imageinfo": [{"url": "https://x/a.jpg"}]},
            "-3": {"title": "File:c.jpg"}
        }}}"#;
        let response: CommonsResponse = serde_json::from_str(body).unwrap();
        let pages = response.query.unwrap().pages;
        assert_eq!(pages.len(), 3);
        assert!(pages["-3"].imageinfo.is_empty());
    }
}
