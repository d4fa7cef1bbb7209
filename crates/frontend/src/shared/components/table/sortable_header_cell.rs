//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sort_field="price"
//!     current_sort_field=state.sort_field
//!     sort_ascending=state.sort_ascending
//!     on_sort=Callback::new(move |field| state.toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    sort_field: &'static str,
    #[prop(into)] current_sort_field: Signal<String>,
    #[prop(into)] sort_ascending: Signal<bool>,
    on_sort: Callback<&'static str>,
    #[prop(optional, default = 100.0)] min_width: f64,
    #[prop(optional, default = "left")] align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=true min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field)
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), sort_field)>
                    {move || get_sort_indicator(&current_sort_field.get(), sort_field, sort_ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
