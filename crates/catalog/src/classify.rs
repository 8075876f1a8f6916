//! Item-category classification.
//!
//! Substring-membership tests that route an item identifier to the
//! correct enumeration grammar.

use crate::variants::Category;

/// Markers of artifact-class identifiers.
const ARTIFACT_MARKERS: [&str; 2] = ["ARTEFACT", "SKILLBOOK"];

/// Markers of items crafted from an artifact.
const ARTIFACT_ITEM_MARKERS: [&str; 7] = [
    "UNDEAD", "KEEPER", "HELL", "MORGANA", "AVALON", "ROYAL", "INSIGHT",
];

/// True if the identifier names an artifact itself.
pub fn is_artifact(item_id: &str) -> bool {
    !item_id.is_empty() && ARTIFACT_MARKERS.iter().any(|m| item_id.contains(m))
}

/// True if the identifier names an item crafted from an artifact.
pub fn is_artifact_item(item_id: &str) -> bool {
    !item_id.is_empty() && ARTIFACT_ITEM_MARKERS.iter().any(|m| item_id.contains(m))
}

/// Route an identifier to its enumeration category.
///
/// Resources are not detectable from the identifier alone and are
/// requested under [`Category::Resource`] explicitly by the caller.
pub fn category_of(item_id: &str) -> Category {
    if is_artifact(item_id) {
        Category::Artifact
    } else if item_id.contains("JOURNAL") {
        Category::Journal
    } else {
        Category::Item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_artifact() {
        assert!(is_artifact("T4_ARTEFACT_MAIN_SPEAR_KEEPER"));
        assert!(is_artifact("T4_SKILLBOOK_STANDARD"));
        assert!(!is_artifact("T4_BAG"));
    }

    #[test]
    fn test_is_artifact_item() {
        assert!(is_artifact_item("T4_MAIN_SPEAR_KEEPER"));
        assert!(is_artifact_item("T5_ARMOR_PLATE_UNDEAD"));
        assert!(is_artifact_item("QUESTITEM_TOKEN_ROYAL_T4"));
        assert!(is_artifact_item("T4_SHOES_CLOTH_AVALON"));
        assert!(!is_artifact_item("T4_BAG"));
    }

    #[test]
    fn test_empty_input() {
        assert!(!is_artifact(""));
        assert!(!is_artifact_item(""));
    }

    #[test]
    fn test_category_routing() {
        assert_eq!(category_of("T4_ARTEFACT_MAIN_SPEAR_KEEPER"), Category::Artifact);
        assert_eq!(category_of("T4_SKILLBOOK_STANDARD"), Category::Artifact);
        assert_eq!(category_of("T4_JOURNAL_WARRIOR"), Category::Journal);
        assert_eq!(category_of("T4_BAG"), Category::Item);
    }
}
