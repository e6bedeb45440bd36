mod ranker;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rplus_core::Category;
use tracing::warn;

/// The immutable topic catalog: every category that has a canned response,
/// in canonical order, built once before the core starts serving.
///
/// Entries come from a JSON document mapping wire labels to response texts.
/// Membership here is what the classifier and ranker validate against, so a
/// category without a response can never be reported to a user.
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    responses: HashMap<Category, String>,
    order: Vec<Category>,
}

impl CategoryCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the catalog document, tolerating its absence: a missing or
    /// malformed file logs a warning and yields an empty catalog so the
    /// process still starts and every question takes the default path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_from_path(path) {
            Ok(catalog) => catalog,
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %format!("{error:#}"),
                    "could not load response catalog, starting empty"
                );
                Self::empty()
            }
        }
    }

    fn try_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed reading response catalog at {}", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Parse a label → response document. Unknown labels are logged and
    /// skipped rather than invented as new categories; blank responses are
    /// rejected at construction.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let entries: HashMap<String, String> =
            serde_json::from_str(raw).context("response catalog is not a string-to-string map")?;

        let mut responses = HashMap::new();
        for (label, text) in entries {
            let Some(category) = Category::from_label(&label) else {
                warn!(label = %label, "response catalog names an unknown category, skipping");
                continue;
            };
            anyhow::ensure!(
                !text.trim().is_empty(),
                "response for {} is blank",
                category.label()
            );
            responses.insert(category, text);
        }

        let order = Category::ALL
            .into_iter()
            .filter(|category| responses.contains_key(category))
            .collect();

        Ok(Self { responses, order })
    }

    pub fn contains(&self, category: Category) -> bool {
        self.responses.contains_key(&category)
    }

    pub fn response(&self, category: Category) -> Option<&str> {
        self.responses.get(&category).map(String::as_str)
    }

    /// Members in catalog order (the `Category` declaration order).
    pub fn categories(&self) -> &[Category] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
