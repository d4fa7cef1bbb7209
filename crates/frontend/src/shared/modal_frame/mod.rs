use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus positioned surface around a details form.
///
/// The frame renders no header or buttons; details views bring their own.
#[component]
pub fn ModalFrame(
    /// Called on overlay click
    on_close: Callback<()>,
    #[prop(optional)] z_index: Option<i32>,
    /// Extra class for the modal surface (`div.modal`)
    #[prop(optional, into)]
    modal_class: String,
    /// Extra style for the modal surface (`div.modal`)
    #[prop(optional, into)]
    modal_style: String,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    fn is_direct_overlay_event(ev: &ev::MouseEvent) -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    }

    // Both press and release must land on the overlay, so selecting text
    // inside the form and releasing outside does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {modal_class}")
    };
    let surface_style = format!("position: relative; {modal_style}");

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=surface_class
                style=surface_style
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
