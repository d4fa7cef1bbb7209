use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

/// Overlay z-index of the bottom modal; each nested one sits one above.
const BASE_Z_INDEX: i32 = 1000;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

/// Surface of a modal: a css class and a max width in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalSurface {
    pub class: String,
    pub max_width_px: u32,
}

impl ModalSurface {
    /// Details form of one entity (`a006_offer` -> `a006_offer-modal`).
    pub fn form(entity: &str) -> Self {
        Self {
            class: format!("{}-modal", entity),
            max_width_px: 760,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "max-width: min({w}px, 95vw); width: min({w}px, 95vw);",
            w = self.max_width_px
        )
    }
}

#[derive(Clone)]
struct OpenModal {
    id: u64,
    surface: ModalSurface,
    builder: ModalBuilder,
}

/// Given to the modal body so it can close its own modal.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Open modals, bottom first. Escape closes only the top one.
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<OpenModal>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    /// Runs `f` on the next tick; a modal must not unmount inside its own click handler.
    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn depth(&self) -> usize {
        self.stack.with_untracked(|s| s.len())
    }

    pub fn open<F>(&self, surface: ModalSurface, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        log::debug!("🪟 open modal #{} ({})", id, surface.class);

        self.stack.update(|s| {
            s.push(OpenModal {
                id,
                surface,
                builder: Arc::new(builder),
            })
        });

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|m| m.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn close_top_deferred(&self) {
        self.defer(|svc| {
            svc.stack.update(|s| {
                s.pop();
            })
        });
    }
}

fn z_index_at(depth: usize) -> i32 {
    BASE_Z_INDEX + depth as i32
}

/// Renders the open modals. Mounted once, at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|k| k.key() == "Escape");
            if is_escape && svc.depth() > 0 {
                svc.close_top_deferred();
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
            on_keydown.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || { svc.stack.get().into_iter().enumerate().collect::<Vec<_>>() }
                key=|(_, modal)| modal.id
                children=move |(depth, modal): (usize, OpenModal)| {
                    let id = modal.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));
                    let body = (modal.builder)(ModalHandle { id, svc });

                    view! {
                        <ModalFrame
                            z_index=z_index_at(depth)
                            on_close=on_close
                            modal_style=modal.surface.style()
                            modal_class=modal.surface.class.clone()
                        >
                            {body}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_surface() {
        let surface = ModalSurface::form("a006_offer");
        assert_eq!(surface.class, "a006_offer-modal");
        assert_eq!(
            surface.style(),
            "max-width: min(760px, 95vw); width: min(760px, 95vw);"
        );
    }

    #[test]
    fn test_nested_modals_stack_upwards() {
        assert_eq!(z_index_at(0), 1000);
        assert!(z_index_at(2) > z_index_at(1));
    }
}
