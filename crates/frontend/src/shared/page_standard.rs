//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a006_offer--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Dashboard with summary cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Build a page id in the `{entity}--{category}` format.
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        let id = page_id("a006_offer", PAGE_CAT_LIST);
        assert_eq!(id, "a006_offer--list");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a006_offer"));
        assert!(!is_valid_page_id("--list"));
    }
}
