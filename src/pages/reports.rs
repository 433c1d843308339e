use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use yew::prelude::*;

use crate::app::use_api;
use crate::components::icons::icon_download;
use crate::components::{error_banner, loading_row, page_shell};
use crate::format::format_rupiah;
use crate::models::WeeklySpending;
use crate::services::dashboard;
use crate::services::reports::{self, ReportFile, ReportFormat, DEFAULT_WEEKS};

/// Hands the bytes to the browser as a download through a temporary object URL.
fn save_file(file: &ReportFile) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    anchor.click();
    Url::revoke_object_url(&url)
}

/// Table rows straight from the server's weekly series.
fn week_rows(weeks: &[WeeklySpending]) -> Vec<(String, String)> {
    weeks
        .iter()
        .map(|week| (week.name.clone(), format_rupiah(week.spent)))
        .collect()
}

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let api = use_api();
    let weeks = use_state(Vec::<WeeklySpending>::new);
    let loading = use_state(|| true);
    let downloading = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let api = api.clone();
        let weeks = weeks.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match dashboard::charts(&api).await {
                        Ok(series) => weeks.set(series.by_week),
                        Err(err) => {
                            log::error!("could not load report data: {}", err);
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

    let on_download = {
        let downloading = downloading.clone();
        let error = error.clone();
        Callback::from(move |format: ReportFormat| {
            downloading.set(true);
            error.set(None);

            let api = api.clone();
            let downloading = downloading.clone();
            let error = error.clone();
            spawn_local(async move {
                match reports::download(&api, format, DEFAULT_WEEKS).await {
                    Ok(file) => {
                        if let Err(err) = save_file(&file) {
                            log::error!("could not save {}: {:?}", file.file_name, err);
                            error.set(Some("Could not save the report file.".to_string()));
                        }
                    }
                    Err(err) => {
                        log::error!("report download failed: {}", err);
                        error.set(Some(err.to_string()));
                    }
                }
                downloading.set(false);
            });
        })
    };

    let download_excel = {
        let on_download = on_download.clone();
        Callback::from(move |_| on_download.emit(ReportFormat::Excel))
    };
    let download_pdf = Callback::from(move |_| on_download.emit(ReportFormat::Pdf));

    let actions = html! {
        <div class="flex gap-2">
            <button onclick={download_excel} disabled={*downloading} class="bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-[11px] font-bold flex items-center gap-2">
                { icon_download() }
                { if *downloading { "Downloading..." } else { "Download Excel" } }
            </button>
            <button onclick={download_pdf} disabled={*downloading} class="bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-[10px] text-[11px] font-bold flex items-center gap-2">
                { icon_download() }
                {"PDF"}
            </button>
        </div>
    };

    html! {
        { page_shell(
            "Reports",
            actions,
            html! {
                <>
                    { error_banner(&error) }

                    <div class="bg-card rounded-2xl shadow-md border border-border overflow-hidden">
                        <div class="p-5 border-b border-border">
                            <h3 class="font-bold text-lg text-foreground">{"Weekly Spending"}</h3>
                        </div>
                        <table class="w-full text-left border-collapse">
                            <thead>
                                <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                                    <th class="px-8 py-4 font-bold">{"Week"}</th>
                                    <th class="px-8 py-4 font-bold">{"Spending"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                { if *loading {
                                    loading_row("2")
                                } else if weeks.is_empty() {
                                    html! { <tr><td colspan="2" class="px-8 py-6 text-center text-muted-foreground">{"No spending recorded yet."}</td></tr> }
                                } else {
                                    html! {
                                        <>
                                            { for week_rows(&weeks).into_iter().enumerate().map(|(idx, (week, amount))| html! {
                                                <tr key={idx} class="text-sm">
                                                    <td class="px-8 py-4 text-foreground">{ week }</td>
                                                    <td class="px-8 py-4 font-semibold text-foreground">{ amount }</td>
                                                </tr>
                                            }) }
                                        </>
                                    }
                                }}
                            </tbody>
                        </table>
                    </div>
                </>
            }
        ) }
    }
}
