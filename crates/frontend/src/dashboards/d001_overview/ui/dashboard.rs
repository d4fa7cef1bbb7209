use contracts::dashboards::d001_overview::dto::{DashboardStats, PriceSummary};
use contracts::system::navigation::keys;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d001_overview::api;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::number_format::format_number_int;
use crate::shared::config::config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};
use crate::shared::toast::use_feedback;
use crate::system::auth::context::use_current_user;

fn card_icon(label: &str) -> &'static str {
    match label {
        "Installers" | "Active Installers" => "tool",
        "Agencies" => "building",
        "Active Offers" => "tag",
        "Bundle Plans" => "package",
        "AMC Prices" => "dollar-sign",
        "Journey Stages" => "layers",
        _ => "activity",
    }
}

/// Card tone of the pricing health block.
fn margin_tone(summary: &PriceSummary) -> StatTone {
    if summary.negative_margin > 0 {
        StatTone::Bad
    } else if summary.low_margin > 0 {
        StatTone::Warning
    } else if summary.total > 0 {
        StatTone::Good
    } else {
        StatTone::Neutral
    }
}

/// Landing tab: server counters plus an AMC pricing summary.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let user = use_current_user();
    let feedback = use_feedback();

    let (stats, set_stats) = signal(None::<DashboardStats>);
    let (summary, set_summary) = signal(None::<PriceSummary>);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::get_dashboard_stats().await {
                Ok(data) => set_stats.set(Some(data)),
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                    feedback.api_error("Failed to load dashboard", &e);
                }
            }
            set_loading.set(false);
        });
        spawn_local(async move {
            match api::get_amc_prices().await {
                Ok(prices) => {
                    let low_margin = config().pricing.low_margin_percent;
                    set_summary.set(Some(PriceSummary::from_prices(&prices, low_margin)));
                }
                Err(e) => log::warn!("AMC prices for the dashboard failed: {}", e),
            }
        });
    };

    Effect::new(move |_| load());

    let greeting = move || {
        user.get()
            .map(|u| format!("Welcome, {} ({})", u.display_name(), u.role.label()))
            .unwrap_or_default()
    };

    let summary_value = move |f: fn(&PriceSummary) -> String| {
        Signal::derive(move || summary.get().map(|s| f(&s)))
    };
    let tone = Signal::derive(move || summary.get().map(|s| margin_tone(&s)).unwrap_or_default());

    view! {
        <PageFrame page_id=page_id(keys::DASHBOARD, PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <div>
                        <h1 class="page__title">"Overview"</h1>
                        <div class="page__subtitle">{greeting}</div>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || loading.get())
                        on_click=move |_| load()
                    >
                        "Refresh"
                    </Button>
                </Flex>
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <div class="dashboard__cards">
                {move || match stats.get() {
                    Some(data) => data
                        .cards()
                        .into_iter()
                        .map(|(label, value)| view! {
                            <StatCard
                                label=label
                                icon_name=card_icon(label)
                                value=Signal::derive(move || Some(format_number_int(value as f64)))
                            />
                        })
                        .collect_view()
                        .into_any(),
                    None if loading.get() => view! { <Spinner label="Loading dashboard..." /> }.into_any(),
                    None => view! { <div class="page__empty">"No data"</div> }.into_any(),
                }}
            </div>

            <h2 class="dashboard__section-title">"AMC pricing"</h2>
            <div class="dashboard__cards">
                <StatCard
                    label="Prices"
                    icon_name="dollar-sign"
                    value=summary_value(|s| format!("{} / {} active", s.total, s.active))
                />
                <StatCard
                    label="Average margin"
                    icon_name="activity"
                    value=summary_value(|s| s.average_label())
                    tone=tone
                />
                <StatCard
                    label="Low margin"
                    icon_name="receipt"
                    value=summary_value(|s| s.low_margin.to_string())
                    tone=Signal::derive(move || match summary.get() {
                        Some(s) if s.low_margin > 0 => StatTone::Warning,
                        _ => StatTone::Neutral,
                    })
                    subtitle=format!("below {}%", config().pricing.low_margin_percent)
                />
                <StatCard
                    label="Below cost"
                    icon_name="receipt"
                    value=summary_value(|s| s.negative_margin.to_string())
                    tone=Signal::derive(move || match summary.get() {
                        Some(s) if s.negative_margin > 0 => StatTone::Bad,
                        _ => StatTone::Neutral,
                    })
                />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_tone() {
        let healthy = PriceSummary {
            total: 3,
            active: 3,
            ..Default::default()
        };
        assert_eq!(margin_tone(&healthy), StatTone::Good);
        assert_eq!(
            margin_tone(&PriceSummary {
                low_margin: 1,
                ..healthy.clone()
            }),
            StatTone::Warning
        );
        assert_eq!(
            margin_tone(&PriceSummary {
                low_margin: 1,
                negative_margin: 1,
                ..healthy
            }),
            StatTone::Bad
        );
        assert_eq!(margin_tone(&PriceSummary::default()), StatTone::Neutral);
    }

    #[test]
    fn test_every_card_has_an_icon() {
        for (label, _) in DashboardStats::default().cards() {
            assert_ne!(card_icon(label), "activity", "{}", label);
        }
    }
}
