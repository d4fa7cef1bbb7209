use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Tab store shared by the sidebar, the tab strip and every page.
    provide_context(AppGlobalContext::new());

    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppShell />
                <ModalHost />
            </AuthProvider>
            <ToastHost />
        </ConfigProvider>
    }
}
