use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::use_api;
use crate::components::{bind_input, error_banner};
use crate::forms::{LoginForm, RegisterForm};
use crate::models::UserProfile;
use crate::services::auth;

const INPUT_CLASS: &str = "w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary";

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub on_authenticated: Callback<Option<UserProfile>>,
}

#[function_component(AuthScreen)]
pub fn auth_screen(props: &AuthScreenProps) -> Html {
    let is_login = use_state(|| true);
    let notice = use_state(|| None::<String>);

    let to_register = {
        let is_login = is_login.clone();
        let notice = notice.clone();
        Callback::from(move |_| {
            notice.set(None);
            is_login.set(false);
        })
    };
    let to_login = {
        let is_login = is_login.clone();
        let notice = notice.clone();
        Callback::from(move |message: Option<String>| {
            notice.set(message);
            is_login.set(true);
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-background">
            <div class="w-full max-w-md bg-card border border-border rounded-2xl shadow-lg p-8">
                if *is_login {
                    <LoginView
                        on_authenticated={props.on_authenticated.clone()}
                        on_switch={to_register}
                        notice={(*notice).clone()}
                    />
                } else {
                    <RegisterView on_switch={to_login} />
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LoginViewProps {
    on_authenticated: Callback<Option<UserProfile>>,
    on_switch: Callback<()>,
    notice: Option<String>,
}

#[function_component(LoginView)]
fn login_view(props: &LoginViewProps) -> Html {
    let api = use_api();
    let form = use_state(LoginForm::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_authenticated = props.on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };

            loading.set(true);
            error.set(None);

            let api = api.clone();
            let error = error.clone();
            let loading = loading.clone();
            let on_authenticated = on_authenticated.clone();
            spawn_local(async move {
                match auth::login(&api, &request).await {
                    Ok(user) => {
                        loading.set(false);
                        on_authenticated.emit(user);
                    }
                    Err(err) => {
                        log::error!("login failed: {}", err);
                        error.set(Some(err.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let on_switch = {
        let on_switch = props.on_switch.clone();
        Callback::from(move |_| on_switch.emit(()))
    };

    html! {
        <>
            <div class="text-center mb-6">
                <h1 class="text-2xl font-bold text-foreground">{"Welcome back"}</h1>
                <p class="text-sm text-muted-foreground mt-2">{"Sign in to your account to continue."}</p>
            </div>

            if let Some(msg) = &props.notice {
                <div class="text-sm text-green-600 mb-4">{ msg.clone() }</div>
            }

            <form class="space-y-4" onsubmit={on_submit}>
                <div class="space-y-1">
                    <label class="text-sm font-medium text-foreground">{"Username"}</label>
                    <input
                        type="text"
                        autocomplete="username"
                        class={INPUT_CLASS}
                        placeholder="Enter your username"
                        value={form.username.clone()}
                        disabled={*loading}
                        oninput={bind_input(&form, |f, v| f.username = v)}
                    />
                </div>
                <div class="space-y-1">
                    <label class="text-sm font-medium text-foreground">{"Password"}</label>
                    <input
                        type="password"
                        autocomplete="current-password"
                        class={INPUT_CLASS}
                        placeholder="Enter your password"
                        value={form.password.clone()}
                        disabled={*loading}
                        oninput={bind_input(&form, |f, v| f.password = v)}
                    />
                </div>

                { error_banner(&error) }

                <button
                    type="submit"
                    class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                    disabled={*loading}
                >
                    { if *loading { "Please wait..." } else { "Sign in" } }
                </button>
            </form>

            <div class="mt-6 text-center text-sm text-muted-foreground">
                {"No account yet?"}
                <button class="ml-2 text-primary font-semibold" disabled={*loading} onclick={on_switch}>
                    {"Register here"}
                </button>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct RegisterViewProps {
    on_switch: Callback<Option<String>>,
}

#[function_component(RegisterView)]
fn register_view(props: &RegisterViewProps) -> Html {
    let api = use_api();
    let form = use_state(RegisterForm::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_switch = props.on_switch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };

            loading.set(true);
            error.set(None);

            let api = api.clone();
            let error = error.clone();
            let loading = loading.clone();
            let on_switch = on_switch.clone();
            spawn_local(async move {
                match auth::register(&api, &request).await {
                    Ok(message) => {
                        loading.set(false);
                        on_switch.emit(Some(message));
                    }
                    Err(err) => {
                        log::error!("registration failed: {}", err);
                        error.set(Some(err.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let on_back = {
        let on_switch = props.on_switch.clone();
        Callback::from(move |_| on_switch.emit(None))
    };

    html! {
        <>
            <div class="text-center mb-6">
                <h1 class="text-2xl font-bold text-foreground">{"Create an account"}</h1>
                <p class="text-sm text-muted-foreground mt-2">{"Fill in your details to get started."}</p>
            </div>

            <form class="space-y-4" onsubmit={on_submit}>
                <div class="space-y-1">
                    <label class="text-sm font-medium text-foreground">{"Username"}</label>
                    <input type="text" class={INPUT_CLASS} value={form.username.clone()} disabled={*loading}
                        oninput={bind_input(&form, |f, v| f.username = v)} />
                </div>
                <div class="space-y-1">
                    <label class="text-sm font-medium text-foreground">{"Password"}</label>
                    <input type="password" class={INPUT_CLASS} value={form.password.clone()} disabled={*loading}
                        oninput={bind_input(&form, |f, v| f.password = v)} />
                </div>
                <div class="space-y-1">
                    <label class="text-sm font-medium text-foreground">{"Full name"}</label>
                    <input type="text" class={INPUT_CLASS} value={form.name.clone()} disabled={*loading}
                        oninput={bind_input(&form, |f, v| f.name = v)} />
                </div>
                <div class="space-y-1">
                    <label class="text-sm font-medium text-foreground">{"Email"}</label>
                    <input type="email" class={INPUT_CLASS} value={form.email.clone()} disabled={*loading}
                        oninput={bind_input(&form, |f, v| f.email = v)} />
                </div>

                { error_banner(&error) }

                <button
                    type="submit"
                    class="w-full bg-primary text-primary-foreground py-2 rounded-lg font-semibold hover:opacity-90 transition-opacity"
                    disabled={*loading}
                >
                    { if *loading { "Please wait..." } else { "Register" } }
                </button>
            </form>

            <div class="mt-6 text-center text-sm text-muted-foreground">
                {"Already have an account?"}
                <button class="ml-2 text-primary font-semibold" disabled={*loading} onclick={on_back}>
                    {"Sign in"}
                </button>
            </div>
        </>
    }
}
