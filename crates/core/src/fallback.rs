use crate::category::Category;

/// Deterministic stand-in for the generator-backed classifier, used when the
/// generation capability is unreachable. A short ordered cascade of
/// discriminative phrases, first match wins.
///
/// This deliberately covers only a handful of high-traffic topics; questions
/// outside it come back as `Other` and take the suggestion path. Degraded
/// mode, not a full classifier.
pub fn classify_fallback(text: &str) -> Category {
    let lower = text.to_lowercase();

    if contains_any(&lower, &["qué es", "what is"]) {
        return Category::WhatIsRealtyplus;
    }
    if contains_any(&lower, &["países", "countries"]) {
        return Category::CountriesOperatingIn;
    }
    if contains_any(&lower, &["incluye", "included"]) {
        return Category::FranchiseInclusions;
    }
    if contains_any(&lower, &["empezar", "started"]) {
        return Category::StepsToGetStarted;
    }
    if contains_any(&lower, &["contactar", "contact"]) {
        return Category::ContactExpansionTeam;
    }

    Category::Other
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
