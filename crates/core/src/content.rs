//! Normalization rules for mood labels and encouragement content.
//!
//! Every mood entry carries eight ordered lists of strings (phrases, study
//! tips, songs, ...). Each list must contain at least one element, and every
//! element is stored trimmed of surrounding whitespace. Labels are free-form
//! but must be non-empty after trimming.

use crate::error::CoreError;

/// Trim a label and reject blank results.
///
/// Labels are case-sensitive and matched exactly; no casefolding happens
/// here or anywhere downstream.
pub fn normalize_label(label: &str) -> Result<String, CoreError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "label must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trim every element of a content list, preserving order.
///
/// Fails if the list is empty or if any element is blank after trimming.
/// `field` names the offending list in the error message.
pub fn normalize_list(field: &'static str, items: &[String]) -> Result<Vec<String>, CoreError> {
    if items.is_empty() {
        return Err(CoreError::Validation(format!(
            "{field} must contain at least one element"
        )));
    }

    let mut normalized = Vec::with_capacity(items.len());
    for item in items {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(format!(
                "{field} must not contain blank elements"
            )));
        }
        normalized.push(trimmed.to_string());
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn label_is_trimmed() {
        assert_eq!(normalize_label("  cansada ").unwrap(), "cansada");
    }

    #[test]
    fn blank_label_rejected() {
        assert!(matches!(
            normalize_label("   "),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn label_case_preserved() {
        assert_eq!(normalize_label("Motivada").unwrap(), "Motivada");
    }

    #[test]
    fn list_elements_trimmed_in_order() {
        let input = owned(&["  respire fundo ", "uma coisa de cada vez"]);
        assert_eq!(
            normalize_list("phrases", &input).unwrap(),
            vec!["respire fundo", "uma coisa de cada vez"]
        );
    }

    #[test]
    fn empty_list_rejected() {
        let err = normalize_list("phrases", &[]).unwrap_err();
        assert!(err.to_string().contains("phrases"));
    }

    #[test]
    fn blank_element_rejected() {
        let input = owned(&["ok", "  "]);
        assert!(matches!(
            normalize_list("snacks", &input),
            Err(CoreError::Validation(_))
        ));
    }
}
