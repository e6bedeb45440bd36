use crate::models::Language;

/// Words that mark a question as Spanish. Matched as case-insensitive
/// substrings, so accents matter but word boundaries do not.
const SPANISH_INDICATORS: &[&str] = &[
    "qué",
    "cómo",
    "cuándo",
    "dónde",
    "por qué",
    "cuál",
    "cuáles",
    "puedo",
    "necesito",
    "quiero",
    "ayuda",
    "información",
    "países",
    "incluye",
    "recibo",
    "apoyo",
    "empezar",
    "contactar",
    "hola",
    "gracias",
    "favor",
    "más",
    "sí",
    "no",
    "bueno",
    "también",
    "esto",
    "eso",
    "aquí",
    "allí",
    "ahora",
    "después",
];

/// Common English words that rarely appear in Spanish text.
const ENGLISH_INDICATORS: &[&str] = &[
    "what", "how", "when", "where", "why", "which", "who", "can", "need", "want", "help",
    "information", "the", "is", "are", "this", "that", "here", "there", "now", "later",
];

/// Decide whether a question reads as Spanish or English.
///
/// Pure and total: Spanish wins only on a strictly greater indicator count;
/// everything else — ties, indicator-free text, empty input — is English.
pub fn detect_language(text: &str) -> Language {
    let lower = text.to_lowercase();

    let spanish_count = SPANISH_INDICATORS
        .iter()
        .filter(|indicator| lower.contains(*indicator))
        .count();
    let english_count = ENGLISH_INDICATORS
        .iter()
        .filter(|indicator| lower.contains(*indicator))
        .count();

    if spanish_count > english_count {
        Language::Spanish
    } else {
        Language::English
    }
}
