use std::collections::BTreeMap;

use crate::RequestToken;

/// Key of the model the backend always offers, and of the fallback catalog entry.
pub const DEFAULT_MODEL_KEY: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub key: String,
    pub name: String,
    pub description: String,
    pub available: bool,
}

/// Server-advertised models keyed by model key, plus the server's default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelCatalog {
    models: BTreeMap<String, ModelDescriptor>,
    default_key: String,
}

impl ModelCatalog {
    pub fn new(
        models: impl IntoIterator<Item = ModelDescriptor>,
        default_key: impl Into<String>,
    ) -> Self {
        Self {
            models: models
                .into_iter()
                .map(|model| (model.key.clone(), model))
                .collect(),
            default_key: default_key.into(),
        }
    }

    /// Single-entry catalog used when the model list cannot be fetched.
    pub fn fallback() -> Self {
        Self::new(
            [ModelDescriptor {
                key: DEFAULT_MODEL_KEY.to_string(),
                name: "TF-IDF + spaCy".to_string(),
                description: "Lightweight model using TF-IDF and spaCy".to_string(),
                available: true,
            }],
            DEFAULT_MODEL_KEY,
        )
    }

    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    pub fn get(&self, key: &str) -> Option<&ModelDescriptor> {
        self.models.get(key)
    }

    pub fn models(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Display name for `key`, or the key itself when the catalog does not know it.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).map_or(key, |model| model.name.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    NotRequested,
    Loading(RequestToken),
    Ready,
    Fallback,
}
