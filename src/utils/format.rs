// src/utils/format.rs
use crate::models::{CharacterClass, PasswordSpec};

// Comma separated class names, e.g. "uppercase, digits"
pub fn format_class_list(spec: &PasswordSpec) -> String {
    if spec.classes.is_empty() {
        return "none".to_string();
    }
    spec.classes
        .iter()
        .map(|class| match class {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Text meter for a 0-100 score, 20 cells wide.
pub fn strength_bar(score: u8) -> String {
    let filled = (score.min(100) as usize) / 5;
    format!("[{}{}] {}%", "#".repeat(filled), "-".repeat(20 - filled), score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_in_fixed_order() {
        let spec = PasswordSpec::new(8, [CharacterClass::Symbols, CharacterClass::Lowercase]);
        assert_eq!(format_class_list(&spec), "lowercase, symbols");
        assert_eq!(format_class_list(&PasswordSpec::new(8, Vec::<CharacterClass>::new())), "none");
    }

    #[test]
    fn bar_scales_with_score() {
        assert_eq!(strength_bar(0), "[--------------------] 0%");
        assert_eq!(strength_bar(50), "[##########----------] 50%");
        assert_eq!(strength_bar(100), "[####################] 100%");
    }
}
