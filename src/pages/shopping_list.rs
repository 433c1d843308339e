use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_api;
use crate::components::icons::{icon_edit, icon_plus, icon_trash};
use crate::components::{
    bind_input, bind_select, confirm_dialog, error_banner, loading_row, page_shell,
};
use crate::error::ApiError;
use crate::format::format_rupiah;
use crate::forms::ItemForm;
use crate::models::{Category, ShoppingItem};
use crate::services::{categories, items};

const FIELD_CLASS: &str =
    "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none";

#[function_component(ShoppingListPage)]
pub fn shopping_list_page() -> Html {
    let api = use_api();
    let item_list = use_state(Vec::<ShoppingItem>::new);
    let category_list = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let form = use_state(ItemForm::default);
    let submitting = use_state(|| false);
    let editing = use_state(|| None::<i64>);
    let edit_form = use_state(ItemForm::default);

    {
        let api = api.clone();
        let item_list = item_list.clone();
        let category_list = category_list.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let result = async {
                        let cats = categories::list(&api).await?;
                        let list = items::list(&api).await?;
                        Ok::<_, ApiError>((cats, list))
                    }
                    .await;

                    match result {
                        Ok((cats, list)) => {
                            category_list.set(cats);
                            item_list.set(list);
                        }
                        Err(err) => {
                            log::error!("could not load shopping list: {}", err);
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

    let on_add = {
        let api = api.clone();
        let form = form.clone();
        let item_list = item_list.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                error.set(Some(err.to_string()));
                return;
            }

            submitting.set(true);
            error.set(None);

            let api = api.clone();
            let form = form.clone();
            let item_list = item_list.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let mut draft = (*form).clone();
            spawn_local(async move {
                match draft.submit(&api).await {
                    Ok(refreshed) => {
                        form.set(draft);
                        match refreshed {
                            Ok(list) => item_list.set(list),
                            Err(err) => {
                                log::error!("item added but list reload failed: {}", err);
                                error.set(Some(format!("Item added, but the list could not be reloaded: {}", err)));
                            }
                        }
                    }
                    Err(err) => {
                        log::error!("could not add item: {}", err);
                        error.set(Some(err.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let item_list = item_list.clone();
        let error = error.clone();
        Callback::from(move |id: i64| {
            let api = api.clone();
            let item_list = item_list.clone();
            let error = error.clone();
            spawn_local(async move {
                match items::delete_confirmed(&api, id, confirm_dialog).await {
                    Ok(Some(list)) => {
                        error.set(None);
                        item_list.set(list);
                    }
                    Ok(None) => {}
                    Err(err) => {
                        log::error!("could not delete item {}: {}", id, err);
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let on_open_edit = {
        let editing = editing.clone();
        let edit_form = edit_form.clone();
        Callback::from(move |item: ShoppingItem| {
            edit_form.set(ItemForm::from_item(&item));
            editing.set(Some(item.id));
        })
    };

    let on_close_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_save_edit = {
        let api = api.clone();
        let editing = editing.clone();
        let edit_form = edit_form.clone();
        let item_list = item_list.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(id) = *editing else {
                return;
            };
            let draft = (*edit_form).clone();
            if let Err(err) = draft.validate() {
                error.set(Some(err.to_string()));
                return;
            }

            submitting.set(true);
            error.set(None);

            let api = api.clone();
            let editing = editing.clone();
            let item_list = item_list.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            spawn_local(async move {
                match draft.save_edit(&api, id).await {
                    Ok(refreshed) => {
                        editing.set(None);
                        match refreshed {
                            Ok(list) => item_list.set(list),
                            Err(err) => {
                                log::error!("item {} updated but list reload failed: {}", id, err);
                                error.set(Some(format!("Item updated, but the list could not be reloaded: {}", err)));
                            }
                        }
                    }
                    Err(err) => {
                        log::error!("could not update item {}: {}", id, err);
                        error.set(Some(err.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let category_options = |selected: &str| -> Html {
        html! {
            <>
                <option value="" disabled={true} selected={selected.is_empty()}>{"Choose a category"}</option>
                { for category_list.iter().map(|c| {
                    let value = c.id.to_string();
                    let is_selected = value == selected;
                    html! { <option value={value} selected={is_selected}>{ c.name.clone() }</option> }
                }) }
            </>
        }
    };

    html! {
        { page_shell(
            "Shopping List",
            html! {},
            html! {
                <>
                    { error_banner(&error) }

                    <form onsubmit={on_add} class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
                        <h4 class="text-[#1D617A] font-bold text-[15px] mb-3 tracking-wider">{"Add Shopping Item"}</h4>
                        <div class="grid grid-cols-2 md:grid-cols-5 gap-3 items-end">
                            <div class="space-y-1 md:col-span-2">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Item name"}</label>
                                <input type="text" placeholder="e.g. Beras" class={FIELD_CLASS} value={form.name.clone()}
                                    oninput={bind_input(&form, |f, v| f.name = v)} />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Category"}</label>
                                <select class={FIELD_CLASS} onchange={bind_select(&form, |f, v| f.category_id = v)}>
                                    { category_options(&form.category_id) }
                                </select>
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Quantity"}</label>
                                <input type="number" min="1" class={FIELD_CLASS} value={form.quantity.clone()}
                                    oninput={bind_input(&form, |f, v| f.quantity = v)} />
                            </div>
                            <div class="space-y-1">
                                <label class="text-[12px] font-bold text-muted-foreground">{"Unit price (Rp)"}</label>
                                <input type="number" min="0" placeholder="15000" class={FIELD_CLASS} value={form.unit_price.clone()}
                                    oninput={bind_input(&form, |f, v| f.unit_price = v)} />
                            </div>
                        </div>
                        <button type="submit" disabled={*submitting} class="mt-4 bg-[#173E63] text-white px-6 py-2 rounded-[10px] text-[11px] font-bold flex items-center gap-2">
                            { icon_plus() }
                            { if *submitting { "Saving..." } else { "Add" } }
                        </button>
                    </form>

                    <div class="bg-card rounded-2xl shadow-md border border-border overflow-hidden">
                        <div class="p-5 border-b border-border">
                            <h3 class="font-bold text-lg text-foreground">{"Weekly Shopping List"}</h3>
                        </div>
                        <div class="overflow-x-auto">
                            <table class="w-full text-left border-collapse">
                                <thead>
                                    <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                                        <th class="px-8 py-4 font-bold">{"Item"}</th>
                                        <th class="px-8 py-4 font-bold">{"Category"}</th>
                                        <th class="px-8 py-4 font-bold">{"Qty"}</th>
                                        <th class="px-8 py-4 font-bold">{"Unit price"}</th>
                                        <th class="px-8 py-4 font-bold">{"Total"}</th>
                                        <th class="px-8 py-4 font-bold">{"Action"}</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    { if *loading {
                                        loading_row("6")
                                    } else if item_list.is_empty() {
                                        html! { <tr><td colspan="6" class="px-8 py-6 text-center text-muted-foreground">{"No shopping items yet."}</td></tr> }
                                    } else {
                                        html! {
                                            <>
                                                { for item_list.iter().map(|item| {
                                                    let on_edit = {
                                                        let on_open_edit = on_open_edit.clone();
                                                        let item = item.clone();
                                                        Callback::from(move |_| on_open_edit.emit(item.clone()))
                                                    };
                                                    let on_remove = {
                                                        let on_delete = on_delete.clone();
                                                        let id = item.id;
                                                        Callback::from(move |_| on_delete.emit(id))
                                                    };
                                                    let category = item
                                                        .category_name
                                                        .clone()
                                                        .unwrap_or_else(|| categories::name_for(&category_list, item.category_id));
                                                    html! {
                                                        <tr key={item.id} class="text-sm hover:bg-muted/40 transition-colors">
                                                            <td class="px-8 py-4 text-foreground">{ item.name.clone() }</td>
                                                            <td class="px-8 py-4">
                                                                <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">{ category }</span>
                                                            </td>
                                                            <td class="px-8 py-4 text-muted-foreground">{ item.quantity.to_string() }</td>
                                                            <td class="px-8 py-4 text-muted-foreground">{ format_rupiah(item.unit_price) }</td>
                                                            <td class="px-8 py-4 font-semibold text-foreground">{ format_rupiah(item.total) }</td>
                                                            <td class="px-8 py-4 flex gap-2">
                                                                <button title="Edit" onclick={on_edit} class="p-1 text-[#173E63]">{ icon_edit() }</button>
                                                                <button title="Delete" onclick={on_remove} class="p-1 text-red-500">{ icon_trash() }</button>
                                                            </td>
                                                        </tr>
                                                    }
                                                }) }
                                            </>
                                        }
                                    }}
                                </tbody>
                            </table>
                        </div>
                    </div>

                    if editing.is_some() {
                        <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-50">
                            <form onsubmit={on_save_edit} class="bg-white rounded-2xl shadow-lg p-6 w-full max-w-lg space-y-3">
                                <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">{"Edit Item"}</h4>
                                <input type="text" class={FIELD_CLASS} value={edit_form.name.clone()}
                                    oninput={bind_input(&edit_form, |f, v| f.name = v)} />
                                <select class={FIELD_CLASS} onchange={bind_select(&edit_form, |f, v| f.category_id = v)}>
                                    { category_options(&edit_form.category_id) }
                                </select>
                                <div class="grid grid-cols-2 gap-3">
                                    <input type="number" min="1" class={FIELD_CLASS} value={edit_form.quantity.clone()}
                                        oninput={bind_input(&edit_form, |f, v| f.quantity = v)} />
                                    <input type="number" min="0" class={FIELD_CLASS} value={edit_form.unit_price.clone()}
                                        oninput={bind_input(&edit_form, |f, v| f.unit_price = v)} />
                                </div>
                                <div class="flex gap-3 justify-end pt-2">
                                    <button type="button" onclick={on_close_edit} class="bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-[10px] text-[11px] font-bold">{"Cancel"}</button>
                                    <button type="submit" disabled={*submitting} class="bg-[#173E63] text-white px-4 py-2 rounded-[10px] text-[11px] font-bold">{"Save changes"}</button>
                                </div>
                            </form>
                        </div>
                    }
                </>
            }
        ) }
    }
}
