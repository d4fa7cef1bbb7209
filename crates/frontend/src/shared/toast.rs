//! Toast notifications shown after saves, deletes and failed requests.

use contracts::domain::common::ValidationError;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, AuthState};

const TOAST_TTL_MS: u32 = 4_000;
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, newest last. Oldest ones drop off past `MAX_VISIBLE`.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context (provide it in app root)")
}

/// Toasts plus session handling for failed requests.
///
/// An `Unauthorized` reply signs the user out; every other error is shown.
#[derive(Clone, Copy)]
pub struct Feedback {
    pub toasts: ToastService,
    set_auth_state: WriteSignal<AuthState>,
}

impl Feedback {
    pub fn success(&self, message: impl Into<String>) {
        self.toasts.success(message);
    }

    pub fn validation(&self, error: &ValidationError) {
        self.toasts.error(error.to_string());
    }

    pub fn api_error(&self, context: &str, error: &ApiError) {
        log!("❌ {}: {}", context, error);
        if error.is_unauthorized() {
            do_logout(self.set_auth_state);
        }
        self.toasts.error(format!("{}: {}", context, error));
    }
}

pub fn use_feedback() -> Feedback {
    let (_, set_auth_state) = crate::system::auth::context::use_auth();
    Feedback {
        toasts: use_toasts(),
        set_auth_state,
    }
}

/// Renders the toast stack. Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| svc.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_assigns_ids_and_dismisses() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "Saved");
        let b = queue.push(ToastKind::Error, "Failed");
        assert_ne!(a, b);

        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].message, "Failed");
    }

    #[test]
    fn test_queue_drops_oldest_past_limit() {
        let mut queue = ToastQueue::default();
        for i in 0..(MAX_VISIBLE + 2) {
            queue.push(ToastKind::Info, format!("t{}", i));
        }
        assert_eq!(queue.items().len(), MAX_VISIBLE);
        assert_eq!(queue.items()[0].message, "t2");
    }
}
