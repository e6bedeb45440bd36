use std::sync::Arc;

use rplus_catalog::CategoryCatalog;
use rplus_core::{Category, Language};
use tracing::warn;

use crate::{TextGenerator, TextRequest};

const TRANSLATE_TEMPERATURE: f32 = 0.3;
const TRANSLATE_MAX_TOKENS: u32 = 512;

/// A canned answer ready to send. `localized` is false when the text had to
/// be returned in its base language because localization failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResponse {
    pub text: String,
    pub localized: bool,
}

/// Turns a resolved category into outbound text. Canned answers are
/// authored in English; Spanish goes through the generation capability and
/// quietly falls back to the English text when that fails — a degraded
/// reply beats a failed turn.
#[derive(Clone)]
pub struct ResponseResolver<G> {
    catalog: Arc<CategoryCatalog>,
    generator: Arc<G>,
}

impl<G: TextGenerator> ResponseResolver<G> {
    pub fn new(catalog: Arc<CategoryCatalog>, generator: Arc<G>) -> Self {
        Self { catalog, generator }
    }

    pub async fn resolve(
        &self,
        category: Category,
        language: Language,
    ) -> Option<ResolvedResponse> {
        let base = self.catalog.response(category)?;

        match language {
            Language::English => Some(ResolvedResponse {
                text: base.to_string(),
                localized: true,
            }),
            Language::Spanish => Some(self.translate(base).await),
        }
    }

    async fn translate(&self, text: &str) -> ResolvedResponse {
        let request = TextRequest {
            prompt: translation_prompt(text),
            temperature: TRANSLATE_TEMPERATURE,
            max_output_tokens: TRANSLATE_MAX_TOKENS,
        };

        match self.generator.generate(request).await {
            Ok(translated) if !translated.trim().is_empty() => ResolvedResponse {
                text: translated.trim().to_string(),
                localized: true,
            },
            Ok(_) => ResolvedResponse {
                text: text.to_string(),
                localized: false,
            },
            Err(error) => {
                warn!(%error, "localization failed, replying with base text");
                ResolvedResponse {
                    text: text.to_string(),
                    localized: false,
                }
            }
        }
    }
}

fn translation_prompt(text: &str) -> String {
    format!(
        "Translate the following text to Spanish. Keep it professional and natural.\n\
         Do not add any extra explanation, just provide the translation.\n\
         \n\
         Text to translate:\n\
         {text}\n\
         \n\
         Translation:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{failing_generator, scripted_generator};

    fn catalog() -> Arc<CategoryCatalog> {
        Arc::new(
            CategoryCatalog::from_json_str(
                r#"{"WHAT_IS_REALTYPLUS": "RealtyPlus is an international real estate network."}"#,
            )
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn english_returns_canonical_text() {
        let resolver = ResponseResolver::new(catalog(), failing_generator());
        let resolved = resolver
            .resolve(Category::WhatIsRealtyplus, Language::English)
            .await
            .unwrap();
        assert_eq!(
            resolved.text,
            "RealtyPlus is an international real estate network."
        );
        assert!(resolved.localized);
    }

    #[tokio::test]
    async fn spanish_uses_translation() {
        let resolver = ResponseResolver::new(
            catalog(),
            scripted_generator(["RealtyPlus es una red inmobiliaria internacional."]),
        );
        let resolved = resolver
            .resolve(Category::WhatIsRealtyplus, Language::Spanish)
            .await
            .unwrap();
        assert_eq!(
            resolved.text,
            "RealtyPlus es una red inmobiliaria internacional."
        );
        assert!(resolved.localized);
    }

    #[tokio::test]
    async fn translation_failure_returns_base_text() {
        let resolver = ResponseResolver::new(catalog(), failing_generator());
        let resolved = resolver
            .resolve(Category::WhatIsRealtyplus, Language::Spanish)
            .await
            .unwrap();
        assert_eq!(
            resolved.text,
            "RealtyPlus is an international real estate network."
        );
        assert!(!resolved.localized);
    }

    #[tokio::test]
    async fn unknown_category_resolves_to_none() {
        let resolver = ResponseResolver::new(catalog(), failing_generator());
        assert!(resolver
            .resolve(Category::VisitHeadquarters, Language::English)
            .await
            .is_none());
    }
}
