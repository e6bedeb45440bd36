//! Fixed, localized reply texts. Canned topic answers live in the catalog
//! document; everything the assistant says around them lives here.

use crate::category::Category;
use crate::models::Language;

pub fn welcome() -> &'static str {
    "Hello! I'm your RealtyPlus assistant.\n\
     (You can also ask in Spanish and I will answer in Spanish.)\n\
     \n\
     I can help you with information about:\n\
     • What is RealtyPlus\n\
     • Franchises and requirements\n\
     • Countries where we operate\n\
     • Support and training\n\
     • Steps to get started\n\
     • And much more...\n\
     \n\
     What would you like to know?"
}

pub fn follow_up(language: Language) -> &'static str {
    match language {
        Language::Spanish => "¿Tienes otra pregunta? Pregúntame lo que quieras.",
        Language::English => "Do you have another question? Feel free to ask me anything.",
    }
}

pub fn invalid_selection(language: Language) -> &'static str {
    match language {
        Language::Spanish => "Por favor selecciona un número válido de la lista.",
        Language::English => "Please select a valid number from the list.",
    }
}

pub fn default_no_answer(language: Language) -> &'static str {
    match language {
        Language::Spanish => {
            "Lo siento, no tengo una respuesta específica para esa pregunta. Por favor \
             contacta a nuestro equipo de expansión para más información, o intenta \
             reformular tu pregunta."
        }
        Language::English => {
            "I'm sorry, I don't have a specific answer for that question. Please contact \
             our expansion team for more information, or try rephrasing your question."
        }
    }
}

/// Numbered disambiguation prompt: framing line, one display name per
/// suggestion, then the pick-a-number-or-rephrase instruction.
pub fn suggestion_prompt(language: Language, suggestions: &[Category]) -> String {
    let intro = match language {
        Language::Spanish => {
            "No estoy seguro de haber entendido tu pregunta. ¿Te refieres a alguna de estas opciones?"
        }
        Language::English => {
            "I'm not sure I understood your question. Did you mean one of these options?"
        }
    };
    let outro = match language {
        Language::Spanish => {
            "Escribe el número de la opción que te interesa, o reformula tu pregunta."
        }
        Language::English => {
            "Type the number of the option you're interested in, or rephrase your question."
        }
    };

    let mut prompt = String::from(intro);
    prompt.push_str("\n\n");
    for (index, category) in suggestions.iter().enumerate() {
        prompt.push_str(&format!(
            "{}. {}\n",
            index + 1,
            category.display_name(language)
        ));
    }
    prompt.push('\n');
    prompt.push_str(outro);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_prompt_numbers_options() {
        let prompt = suggestion_prompt(
            Language::English,
            &[Category::MarketingAssistance, Category::TrainingForTeam],
        );
        assert!(prompt.contains("1. Marketing assistance"));
        assert!(prompt.contains("2. Training for the team"));
        assert!(prompt.contains("rephrase"));
    }

    #[test]
    fn suggestion_prompt_localizes_display_names() {
        let prompt = suggestion_prompt(Language::Spanish, &[Category::WhereCanIOpen]);
        assert!(prompt.contains("1. ¿Dónde puedo abrir?"));
        assert!(prompt.contains("reformula"));
    }
}
