use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_api;
use crate::components::{error_banner, page_shell, StatCard, StatIcon, Tone};
use crate::format::{category_shares, format_rupiah, relative_width, BudgetProgress};
use crate::models::{BudgetSummary, ChartData};
use crate::services::dashboard;

const SHARE_COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#AF19FF"];

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_api();
    let summary = use_state(|| None::<BudgetSummary>);
    let charts = use_state(ChartData::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let summary = summary.clone();
        let charts = charts.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let loaded = dashboard::overview(&api).await;
                    let mut failures = Vec::new();

                    match loaded.summary {
                        Ok(current) => summary.set(Some(current)),
                        Err(err) => {
                            log::error!("dashboard summary failed: {}", err);
                            failures.push(err.to_string());
                        }
                    }
                    match loaded.charts {
                        Ok(series) => charts.set(series),
                        Err(err) => {
                            log::error!("dashboard charts failed: {}", err);
                            failures.push(err.to_string());
                        }
                    }

                    if !failures.is_empty() {
                        error.set(Some(failures.join(" ")));
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    if *loading {
        return html! {
            <div class="p-6 text-center text-muted-foreground">{"Loading dashboard..."}</div>
        };
    }

    let stat_cards = match &*summary {
        Some(current) => {
            let progress = BudgetProgress::from_summary(current);
            let remaining_tone = if progress.over_budget() {
                Tone::Bad
            } else {
                Tone::Good
            };
            html! {
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <StatCard title="Weekly Spending" amount={progress.spent} icon={StatIcon::Spending} tone={Tone::Bad} />
                    <StatCard title="Weekly Budget" amount={progress.budget} icon={StatIcon::Budget} />
                    <StatCard title="Remaining Budget" amount={progress.remaining} icon={StatIcon::Remaining} tone={remaining_tone} />
                </div>
            }
        }
        None => html! {},
    };

    let shares = category_shares(&charts.by_category);
    let max_week = charts
        .by_week
        .iter()
        .map(|w| w.spent)
        .fold(0.0_f64, f64::max);

    html! {
        { page_shell(
            "Dashboard",
            html! {},
            html! {
                <>
                    { error_banner(&error) }

                    { stat_cards }

                    <div class="grid grid-cols-1 lg:grid-cols-5 gap-6">
                        <div class="lg:col-span-2 bg-white p-5 rounded-[10px] shadow-sm border border-border">
                            <h4 class="text-[#1D617A] font-bold text-[15px] mb-4 tracking-wider">{"Spending by Category"}</h4>
                            if shares.is_empty() {
                                <p class="text-sm text-muted-foreground">{"No category data yet."}</p>
                            } else {
                                <ul class="space-y-3">
                                    { for shares.iter().enumerate().map(|(idx, (name, amount, share))| html! {
                                        <li key={idx} class="flex items-center gap-3 text-sm">
                                            <span class="w-3 h-3 rounded-full" style={format!("background-color: {}", SHARE_COLORS[idx % SHARE_COLORS.len()])}></span>
                                            <span class="flex-1 text-foreground">{ name.clone() }</span>
                                            <span class="text-muted-foreground">{ format!("{}%", share) }</span>
                                            <span class="font-semibold text-foreground">{ format_rupiah(*amount) }</span>
                                        </li>
                                    }) }
                                </ul>
                            }
                        </div>

                        <div class="lg:col-span-3 bg-white p-5 rounded-[10px] shadow-sm border border-border">
                            <h4 class="text-[#1D617A] font-bold text-[15px] mb-4 tracking-wider">{"Weekly Spending"}</h4>
                            if charts.by_week.is_empty() {
                                <p class="text-sm text-muted-foreground">{"No spending data yet."}</p>
                            } else {
                                <div class="flex items-end gap-4 h-48">
                                    { for charts.by_week.iter().map(|week| html! {
                                        <div class="flex-1 flex flex-col items-center justify-end h-full" title={format_rupiah(week.spent)}>
                                            <div class="w-full bg-[#4f46e5] rounded-t" style={format!("height: {}%", relative_width(week.spent, max_week))}></div>
                                            <span class="text-[10px] text-muted-foreground mt-1">{ week.name.clone() }</span>
                                        </div>
                                    }) }
                                </div>
                            }
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
