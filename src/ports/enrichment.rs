//! Enrichment port: best-effort descriptions of a guessed animal.

use serde::{Deserialize, Serialize};

/// Descriptive material about an animal. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalInfo {
    pub name: String,
    pub summary: Option<String>,
    pub thumbnail: Option<String>,
    pub images: Vec<String>,
}

impl AnimalInfo {
    /// Info with nothing but the name
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.thumbnail.is_none() && self.images.is_empty()
    }
}

/// Looks up descriptive text and media for an animal name.
///
/// Implementations never fail: lookup problems produce an empty
/// [`AnimalInfo`].
pub trait AnimalInfoSource {
    fn describe(&self, animal: &str) -> AnimalInfo;
}
