//! Sidebar component with collapsible menu groups
//!
//! The menu comes from `contracts::system::navigation::visible_menu`, so it
//! is rebuilt whenever the signed-in user (and with it the module grants)
//! changes.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_current_user;
use contracts::system::navigation::{visible_menu, MenuGroup};
use leptos::prelude::*;

#[component]
fn SidebarGroup(group: MenuGroup, expanded_groups: RwSignal<Vec<String>>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let group_id = StoredValue::new(group.id.to_string());
    let is_expanded =
        move || group_id.with_value(|gid| expanded_groups.with(|items| items.contains(gid)));

    let toggle = move |_| {
        let gid = group_id.get_value();
        expanded_groups.update(move |items| {
            if let Some(pos) = items.iter().position(|x| x == &gid) {
                items.remove(pos);
            } else {
                items.push(gid);
            }
        });
    };

    let items = StoredValue::new(group.items);

    view! {
        <div>
            <div class="app-sidebar__item" style:padding-left="12px" on:click=toggle>
                <div class="app-sidebar__item-content">
                    {icon(group.icon)}
                    <span>{group.label}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=is_expanded
                >
                    {icon("chevron-right")}
                </div>
            </div>

            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {items.get_value().into_iter().map(|item| {
                        let (id, label) = (item.id, item.label);
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    ctx.active.with(|a| a.as_deref() == Some(id))
                                }
                                style:padding-left="10px"
                                on:click=move |_| ctx.open_tab(id, label)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{label}</span>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let current_user = use_current_user();

    // Dashboard group starts expanded
    let expanded_groups = RwSignal::new(vec!["dashboards".to_string()]);

    let groups = Memo::new(move |_| {
        current_user
            .get()
            .map(|user| visible_menu(&user))
            .unwrap_or_default()
    });

    view! {
        <div class="app-sidebar__content">
            <For
                each=move || groups.get()
                key=|group| group.id
                children=move |group: MenuGroup| {
                    view! { <SidebarGroup group=group expanded_groups=expanded_groups /> }
                }
            />
        </div>
    }
}
