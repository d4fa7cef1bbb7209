//! Table cell for rupee amounts

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned rupee amount; negatives are coloured when `color_by_sign` is set
#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Signal<Option<f64>>,
    #[prop(optional, default = false)] color_by_sign: bool,
    #[prop(optional, default = false)] bold: bool,
) -> impl IntoView {
    let formatted_text = move || value.get().map(format_money).unwrap_or_else(|| "-".to_string());

    let cell_style = move || {
        let mut styles = Vec::new();
        if color_by_sign {
            match value.get() {
                Some(v) if v < 0.0 => styles.push("color: var(--color-error-700)"),
                Some(v) if v > 0.0 => styles.push("color: var(--color-success-700)"),
                _ => {}
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{formatted_text}</span>
        </TableCell>
    }
}
