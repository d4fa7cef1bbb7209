//! Tab titles.
//!
//! Menu entries carry their own labels; keys outside every role menu fall
//! back to the key itself.

use contracts::system::navigation::label_for_key;

/// Human readable title of a tab key.
pub fn tab_label_for_key(key: &str) -> String {
    label_for_key(key)
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_with_fallback() {
        assert_eq!(tab_label_for_key("a006_offer"), "Offers");
        assert_eq!(tab_label_for_key("dashboard"), "Dashboard");
        assert_eq!(tab_label_for_key("x_unknown"), "x_unknown");
    }
}
