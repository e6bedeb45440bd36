use std::sync::Arc;

use rplus_catalog::CategoryCatalog;
use rplus_core::{classify_fallback, Category};
use tracing::{debug, warn};

use crate::{TextGenerator, TextRequest};

const CLASSIFY_TEMPERATURE: f32 = 0.0;
const CLASSIFY_MAX_TOKENS: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    Generator,
    FallbackRules,
}

#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub category: Category,
    pub source: ClassificationSource,
}

/// Maps a free-text question onto the catalog. Primary path is the
/// generation capability with a label-only instruction; any capability
/// failure drops to the deterministic rule cascade. Either way the result
/// is coerced through catalog membership, so callers only ever see a
/// member or `Other`.
#[derive(Clone)]
pub struct CategoryClassifier<G> {
    catalog: Arc<CategoryCatalog>,
    generator: Arc<G>,
}

impl<G: TextGenerator> CategoryClassifier<G> {
    pub fn new(catalog: Arc<CategoryCatalog>, generator: Arc<G>) -> Self {
        Self { catalog, generator }
    }

    pub async fn classify(&self, question: &str) -> Classification {
        if self.catalog.is_empty() {
            debug!("catalog is empty, every question classifies as OTHER");
            return Classification {
                category: Category::Other,
                source: ClassificationSource::FallbackRules,
            };
        }

        let request = TextRequest {
            prompt: classification_prompt(&self.catalog, question),
            temperature: CLASSIFY_TEMPERATURE,
            max_output_tokens: CLASSIFY_MAX_TOKENS,
        };

        match self.generator.generate(request).await {
            Ok(raw) => {
                let label = raw.trim().to_uppercase();
                let category = Category::from_label(&label)
                    .filter(|category| self.catalog.contains(*category))
                    .unwrap_or(Category::Other);
                if category == Category::Other && label != "OTHER" {
                    debug!(label = %label, "generator returned a non-catalog label");
                }
                Classification {
                    category,
                    source: ClassificationSource::Generator,
                }
            }
            Err(error) => {
                warn!(%error, "generator unavailable, classifying with fallback rules");
                let candidate = classify_fallback(question);
                let category = if self.catalog.contains(candidate) {
                    candidate
                } else {
                    Category::Other
                };
                Classification {
                    category,
                    source: ClassificationSource::FallbackRules,
                }
            }
        }
    }
}

/// The label-only classification instruction: every catalog category with
/// its bilingual hint phrases, then the question.
pub fn classification_prompt(catalog: &CategoryCatalog, question: &str) -> String {
    let categories_with_hints = catalog
        .categories()
        .iter()
        .map(|category| format!("- {}: ({})", category.label(), category.hint_phrases()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a question classifier for a franchise support system.\n\
         Analyze the user's question (it may be in Spanish or English) and return ONLY the \
         category keyword that best matches.\n\
         \n\
         Strict Rules:\n\
         1. Return ONLY ONE keyword from the list below\n\
         2. Return it in UPPERCASE with no extra text or explanation\n\
         3. If no category matches well, return 'OTHER'\n\
         \n\
         Categories with example keywords:\n\
         {categories_with_hints}\n\
         \n\
         User Question: {question}\n\
         \n\
         Return only the category keyword:"
    )
}
