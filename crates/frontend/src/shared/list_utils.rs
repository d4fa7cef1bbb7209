//! List helpers: comparators, sorting state and the search box.

use leptos::prelude::*;
use std::cmp::Ordering;

/// Row type that a list page can sort by column
pub trait Sortable {
    /// Compare two rows by the named column
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive text ordering
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Ordering for floats; NaN sorts last
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Missing values sort after present ones
pub fn cmp_opt_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_f64(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort by the named column
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    if field.is_empty() {
        return;
    }
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Next `(field, ascending)` after a header click: same field flips, a new field starts ascending.
pub fn next_sort(current_field: &str, ascending: bool, clicked: &str) -> (String, bool) {
    if current_field == clicked {
        (clicked.to_string(), !ascending)
    } else {
        (clicked.to_string(), true)
    }
}

/// Arrow shown next to a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search box with a clear button; filtering runs on every keystroke.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let placeholder = move || placeholder.get().unwrap_or_else(|| "Search...".to_string());
    let is_filter_active = move || value.with(|v| !v.trim().is_empty());

    view! {
        <div class="search-input">
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        price: Option<f64>,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => cmp_text(self.name, other.name),
                "price" => cmp_opt_f64(self.price, other.price),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "beta", price: Some(20.0) },
            Row { name: "Alpha", price: None },
            Row { name: "gamma", price: Some(5.0) },
        ]
    }

    #[test]
    fn test_sort_by_text_ignores_case() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);

        sort_list(&mut items, "name", false);
        assert_eq!(items[0].name, "gamma");
    }

    #[test]
    fn test_missing_numbers_sort_last() {
        let mut items = rows();
        sort_list(&mut items, "price", true);
        assert_eq!(items.last().unwrap().name, "Alpha");
        assert_eq!(items[0].name, "gamma");
    }

    #[test]
    fn test_empty_field_keeps_order() {
        let mut items = rows();
        sort_list(&mut items, "", true);
        assert_eq!(items, rows());
    }

    #[test]
    fn test_next_sort_and_indicator() {
        assert_eq!(next_sort("name", true, "name"), ("name".to_string(), false));
        assert_eq!(next_sort("name", false, "price"), ("price".to_string(), true));
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "price", true), " ⇅");
    }
}
