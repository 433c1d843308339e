pub mod icons;
pub mod layout;
pub mod stat_card;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

pub use layout::Layout;
pub use stat_card::{StatCard, StatIcon, Tone};

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

pub fn error_banner(message: &Option<String>) -> Html {
    match message {
        Some(msg) => html! {
            <div class="bg-red-50 border border-red-200 text-red-600 text-sm rounded-[10px] px-4 py-3">{ msg.clone() }</div>
        },
        None => html! {},
    }
}

pub fn loading_row(colspan: &'static str) -> Html {
    html! {
        <tr><td colspan={colspan} class="px-8 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr>
    }
}

/// `oninput` handler writing one field of a form held in state.
pub fn bind_input<T>(state: &UseStateHandle<T>, apply: fn(&mut T, String)) -> Callback<InputEvent>
where
    T: Clone + 'static,
{
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, input.value());
        state.set(next);
    })
}

pub fn bind_select<T>(state: &UseStateHandle<T>, apply: fn(&mut T, String)) -> Callback<Event>
where
    T: Clone + 'static,
{
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, select.value());
        state.set(next);
    })
}

/// Native confirm dialog; no window means no.
pub fn confirm_dialog(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
