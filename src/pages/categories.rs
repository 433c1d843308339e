use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_api;
use crate::components::icons::{icon_edit, icon_plus, icon_trash};
use crate::components::{bind_input, confirm_dialog, error_banner, loading_row, page_shell};
use crate::forms::CategoryForm;
use crate::models::Category;
use crate::services::categories;

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let api = use_api();
    let category_list = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let list_error = use_state(|| None::<String>);

    let form = use_state(CategoryForm::default);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);

    {
        let api = api.clone();
        let category_list = category_list.clone();
        let loading = loading.clone();
        let list_error = list_error.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match categories::list(&api).await {
                        Ok(list) => category_list.set(list),
                        Err(err) => {
                            log::error!("could not load categories: {}", err);
                            list_error.set(Some(err.to_string()));
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
        let category_list = category_list.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let list_error = list_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                form_error.set(Some(err.to_string()));
                return;
            }

            submitting.set(true);
            form_error.set(None);

            let api = api.clone();
            let form = form.clone();
            let category_list = category_list.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let list_error = list_error.clone();
            let mut draft = (*form).clone();
            spawn_local(async move {
                match draft.submit(&api).await {
                    Ok(refreshed) => {
                        form.set(draft);
                        match refreshed {
                            Ok(list) => category_list.set(list),
                            Err(err) => {
                                log::error!("category saved but list reload failed: {}", err);
                                list_error.set(Some(format!("Category saved, but the list could not be reloaded: {}", err)));
                            }
                        }
                    }
                    Err(err) => {
                        log::error!("could not save category: {}", err);
                        form_error.set(Some(err.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_cancel = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            form_error.set(None);
            form.set(CategoryForm::default());
        })
    };

    let on_edit = {
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |category: Category| {
            form_error.set(None);
            form.set(CategoryForm::start_edit(&category));
        })
    };

    let on_delete = {
        let api = api.clone();
        let category_list = category_list.clone();
        let list_error = list_error.clone();
        Callback::from(move |id: i64| {
            let api = api.clone();
            let category_list = category_list.clone();
            let list_error = list_error.clone();
            spawn_local(async move {
                match categories::delete_confirmed(&api, id, confirm_dialog).await {
                    Ok(Some(list)) => {
                        list_error.set(None);
                        category_list.set(list);
                    }
                    Ok(None) => {}
                    Err(err) => {
                        log::error!("could not delete category {}: {}", id, err);
                        list_error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let is_editing = form.editing.is_some();

    html! {
        { page_shell(
            "Categories",
            html! {},
            html! {
                <>
                    <form onsubmit={on_submit} class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50 space-y-3">
                        <h4 class="text-[#1D617A] font-bold text-[15px] tracking-wider">
                            { if is_editing { "Edit Category" } else { "Add Category" } }
                        </h4>
                        <div class="flex gap-3">
                            <input
                                type="text"
                                placeholder="e.g. Groceries"
                                class="flex-1 bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none"
                                value={form.name.clone()}
                                disabled={*submitting}
                                oninput={bind_input(&form, |f, v| f.name = v)}
                            />
                            <button type="submit" disabled={*submitting} class="bg-[#173E63] text-white px-6 py-2 rounded-[10px] text-[11px] font-bold flex items-center gap-2">
                                { icon_plus() }
                                { if *submitting { "Saving..." } else if is_editing { "Update" } else { "Add" } }
                            </button>
                            if is_editing {
                                <button type="button" onclick={on_cancel} class="bg-[#B2CBDE] text-[#173E63] px-4 py-2 rounded-[10px] text-[11px] font-bold">
                                    {"Cancel"}
                                </button>
                            }
                        </div>
                        { error_banner(&form_error) }
                    </form>

                    { error_banner(&list_error) }

                    <div class="bg-card rounded-2xl shadow-md border border-border overflow-hidden">
                        <table class="w-full text-left border-collapse">
                            <thead>
                                <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                                    <th class="px-8 py-4 font-bold">{"Name"}</th>
                                    <th class="px-8 py-4 font-bold">{"Action"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                { if *loading {
                                    loading_row("2")
                                } else if category_list.is_empty() {
                                    html! { <tr><td colspan="2" class="px-8 py-6 text-center text-muted-foreground">{"No categories yet."}</td></tr> }
                                } else {
                                    html! {
                                        <>
                                            { for category_list.iter().map(|category| {
                                                let edit = {
                                                    let on_edit = on_edit.clone();
                                                    let category = category.clone();
                                                    Callback::from(move |_| on_edit.emit(category.clone()))
                                                };
                                                let remove = {
                                                    let on_delete = on_delete.clone();
                                                    let id = category.id;
                                                    Callback::from(move |_| on_delete.emit(id))
                                                };
                                                html! {
                                                    <tr key={category.id} class="text-sm hover:bg-muted/40 transition-colors">
                                                        <td class="px-8 py-4 text-foreground">{ category.name.clone() }</td>
                                                        <td class="px-8 py-4 flex gap-2">
                                                            <button title="Edit" onclick={edit} class="p-1 text-[#173E63]">{ icon_edit() }</button>
                                                            <button title="Delete" onclick={remove} class="p-1 text-red-500">{ icon_trash() }</button>
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
                </>
            }
        ) }
    }
}
