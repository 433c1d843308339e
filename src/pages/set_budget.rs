use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_api;
use crate::components::icons::icon_target;
use crate::components::{bind_input, error_banner, page_shell};
use crate::format::{format_rupiah, BudgetProgress};
use crate::forms::BudgetForm;
use crate::models::BudgetSummary;
use crate::services::dashboard;

#[function_component(SetBudgetPage)]
pub fn set_budget_page() -> Html {
    let api = use_api();
    let summary = use_state(BudgetSummary::default);
    let form = use_state(BudgetForm::default);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);

    {
        let api = api.clone();
        let summary = summary.clone();
        let form = form.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match dashboard::summary(&api).await {
                        Ok(current) => {
                            form.set(BudgetForm::prefilled(&current));
                            summary.set(current);
                        }
                        Err(err) => {
                            log::error!("could not load budget summary: {}", err);
                            error.set(Some(err.to_string()));
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let on_submit = {
        let api = api.clone();
        let form = form.clone();
        let summary = summary.clone();
        let saving = saving.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            notice.set(None);
            if let Err(err) = form.validate() {
                error.set(Some(err.to_string()));
                return;
            }

            saving.set(true);
            error.set(None);

            let api = api.clone();
            let draft = (*form).clone();
            let summary = summary.clone();
            let saving = saving.clone();
            let error = error.clone();
            let notice = notice.clone();
            spawn_local(async move {
                match draft.submit(&api).await {
                    Ok(Ok(current)) => {
                        summary.set(current);
                        notice.set(Some("Budget saved.".to_string()));
                    }
                    Ok(Err(err)) => {
                        log::error!("budget saved but summary reload failed: {}", err);
                        notice.set(Some("Budget saved.".to_string()));
                        error.set(Some(format!("The summary could not be reloaded: {}", err)));
                    }
                    Err(err) => {
                        log::error!("could not save budget: {}", err);
                        error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let progress = BudgetProgress::from_summary(&summary);
    let bar_color = if progress.over_budget() {
        "bg-red-500"
    } else {
        "bg-[#173E63]"
    };

    html! {
        { page_shell(
            "Set Budget",
            html! {},
            html! {
                <>
                    <form onsubmit={on_submit} class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50 space-y-3 max-w-xl">
                        <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider flex items-center gap-2">
                            { icon_target() }
                            {"Weekly Budget"}
                        </h4>
                        <label class="text-[12px] font-bold text-muted-foreground">{"Amount (Rp)"}</label>
                        <input
                            type="number"
                            min="1"
                            placeholder="1000000"
                            class="w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none"
                            value={form.amount.clone()}
                            disabled={*loading || *saving}
                            oninput={bind_input(&form, |f, v| f.amount = v)}
                        />
                        { error_banner(&error) }
                        if let Some(msg) = &*notice {
                            <div class="text-sm text-green-600">{ msg.clone() }</div>
                        }
                        <button type="submit" disabled={*loading || *saving} class="bg-[#173E63] text-white px-6 py-2 rounded-[10px] text-[11px] font-bold">
                            { if *saving { "Saving..." } else { "Save Budget" } }
                        </button>
                    </form>

                    <div class="bg-white p-5 rounded-[10px] shadow-sm border border-border space-y-3 max-w-xl">
                        <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">{"This Week"}</h4>
                        <div class="flex justify-between text-sm">
                            <span class="text-muted-foreground">{"Spent"}</span>
                            <span class="font-semibold text-foreground">
                                { format!("{} of {}", format_rupiah(progress.spent), format_rupiah(progress.budget)) }
                            </span>
                        </div>
                        <div class="w-full h-3 bg-muted rounded-full overflow-hidden">
                            <div class={classes!("h-full", "rounded-full", bar_color)} style={format!("width: {}%", progress.bar_width())}></div>
                        </div>
                        <div class="flex justify-between text-[11px] text-muted-foreground">
                            <span>{ format!("{}% used", progress.percent_used) }</span>
                            <span>{ format!("Remaining {}", format_rupiah(progress.remaining)) }</span>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
