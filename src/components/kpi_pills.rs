use leptos::*;

use crate::catalog::{AdminFilter, Kpi};
use crate::models::stats::Stats;

const PILLS: [(Kpi, &str); 4] = [
    (Kpi::TotalItems, "Total items"),
    (Kpi::Categories, "Categories"),
    (Kpi::Featured, "Favorites"),
    (Kpi::Voice, "With voice"),
];

fn counter(kpi: Kpi, stats: &Stats) -> u32 {
    match kpi {
        Kpi::TotalItems => stats.total_items,
        Kpi::Categories => stats.total_categories,
        Kpi::Featured => stats.featured_items,
        Kpi::Voice => stats.voice_enabled,
    }
}

/// Dashboard counters; the favorite and voice pills double as table filters.
#[component]
pub fn KpiPills(#[prop(into)] stats: Signal<Stats>, filter: RwSignal<AdminFilter>) -> impl IntoView {
    view! {
        <div class="kpi-pills">
            {PILLS
                .into_iter()
                .map(|(kpi, label)| {
                    view! {
                        <button
                            class="kpi-pill"
                            class:active=move || filter.with(|f| f.active_kpi() == Some(kpi))
                            on:click=move |_| filter.update(|f| f.select_kpi(kpi))
                        >
                            <span class="kpi-value">{move || stats.with(|s| counter(kpi, s))}</span>
                            <span class="kpi-label">{label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
