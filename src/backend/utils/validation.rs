// src/backend/utils/validation.rs
use crate::error::RegistryError;
use crate::models::common::LABEL_MAX_CHARS;
use crate::models::NewContent;
use validator::Validate;

/// Checks new content metadata before anything is written.
///
/// Fields are checked in argument order (title, size, summary, labels) and
/// the first failing one decides the error.
pub fn validate_new_content(content: &NewContent) -> Result<(), RegistryError> {
    if let Err(errors) = content.validate() {
        let fields = errors.field_errors();
        if fields.contains_key("title") {
            return Err(RegistryError::MetadataInvalid);
        }
        if fields.contains_key("size_bytes") {
            return Err(RegistryError::SizeLimitExceeded);
        }
        if fields.contains_key("summary") {
            return Err(RegistryError::MetadataInvalid);
        }
        return Err(RegistryError::TagFormatError);
    }
    validate_labels(&content.labels)
}

/// Every label must hold 1..=32 characters.
pub fn validate_labels(labels: &[String]) -> Result<(), RegistryError> {
    let well_formed = labels
        .iter()
        .all(|label| (1..=LABEL_MAX_CHARS).contains(&label.chars().count()));
    if well_formed {
        Ok(())
    } else {
        Err(RegistryError::TagFormatError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn content(title: &str, size_bytes: u64, summary: &str, labels: &[&str]) -> NewContent {
        NewContent {
            title: title.to_string(),
            size_bytes,
            summary: summary.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn accepts_boundary_values() {
        let title = "t".repeat(64);
        let summary = "s".repeat(128);
        let label = "l".repeat(32);
        let labels: Vec<&str> = vec![label.as_str(); 10];
        assert_eq!(validate_new_content(&content(&title, 999_999_999, &summary, &labels)), Ok(()));
        assert_eq!(validate_new_content(&content("T", 1, "S", &["a"])), Ok(()));
    }

    #[test]
    fn rejects_title_and_summary_bounds() {
        let long_title = "t".repeat(65);
        let long_summary = "s".repeat(129);
        for bad in [
            content("", 100, "S", &["a"]),
            content(&long_title, 100, "S", &["a"]),
            content("Doc", 100, "", &["a"]),
            content("Doc", 100, &long_summary, &["a"]),
        ] {
            assert_eq!(validate_new_content(&bad), Err(RegistryError::MetadataInvalid));
        }
    }

    #[test]
    fn rejects_size_bounds() {
        assert_eq!(
            validate_new_content(&content("Doc", 0, "S", &["a"])),
            Err(RegistryError::SizeLimitExceeded)
        );
        assert_eq!(
            validate_new_content(&content("Doc", 1_000_000_000, "S", &["a"])),
            Err(RegistryError::SizeLimitExceeded)
        );
    }

    #[test]
    fn rejects_label_rules() {
        let long_label = "l".repeat(33);
        let eleven = vec!["a"; 11];
        for bad in [
            content("Doc", 100, "S", &[]),
            content("Doc", 100, "S", &eleven),
            content("Doc", 100, "S", &["ok", ""]),
            content("Doc", 100, "S", &["ok", long_label.as_str()]),
        ] {
            assert_eq!(validate_new_content(&bad), Err(RegistryError::TagFormatError));
        }
    }

    #[test]
    fn first_failing_argument_decides() {
        assert_eq!(
            validate_new_content(&content("", 0, "", &[])),
            Err(RegistryError::MetadataInvalid)
        );
        assert_eq!(
            validate_new_content(&content("Doc", 0, "", &[])),
            Err(RegistryError::SizeLimitExceeded)
        );
        assert_eq!(
            validate_new_content(&content("Doc", 100, "", &[])),
            Err(RegistryError::MetadataInvalid)
        );
        assert_eq!(
            validate_new_content(&content("Doc", 100, "S", &[])),
            Err(RegistryError::TagFormatError)
        );
    }

    #[test]
    fn lengths_count_characters() {
        let title = "é".repeat(64);
        assert_eq!(validate_new_content(&content(&title, 1, "S", &["ü"])), Ok(()));
    }

    proptest! {
        #[test]
        fn size_accepted_iff_in_range(size in any::<u64>()) {
            let result = validate_new_content(&content("Doc", size, "S", &["a"]));
            if (1..1_000_000_000).contains(&size) {
                prop_assert_eq!(result, Ok(()));
            } else {
                prop_assert_eq!(result, Err(RegistryError::SizeLimitExceeded));
            }
        }

        #[test]
        fn label_accepted_iff_1_to_32_chars(label in "[a-z]{0,40}") {
            let result = validate_labels(&[label.clone()]);
            prop_assert_eq!(result.is_ok(), (1..=32).contains(&label.len()));
        }
    }
}
