use std::rc::Rc;

use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::Layout;
use crate::config::AppConfig;
use crate::models::UserProfile;
use crate::pages::{
    AuthScreen, CategoriesPage, DashboardPage, ReportsPage, SetBudgetPage, ShoppingListPage,
};
use crate::services::auth;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Page {
    Dashboard,
    ShoppingList,
    SetBudget,
    Categories,
    Reports,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::ShoppingList => "Shopping List",
            Page::SetBudget => "Set Budget",
            Page::Categories => "Categories",
            Page::Reports => "Reports",
        }
    }
}

/// Shared client handed down through context.
#[derive(Clone)]
pub struct ApiContext(pub Rc<ApiClient>);

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[hook]
pub fn use_api() -> Rc<ApiClient> {
    match use_context::<ApiContext>() {
        Some(ctx) => ctx.0,
        None => {
            log::warn!("no ApiContext provided, using a standalone client");
            Rc::new(ApiClient::browser(&AppConfig::from_env()))
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let api = {
        let config = props.config.clone();
        use_memo(move |_| ApiClient::browser(&config), ())
    };
    let authenticated = use_state(|| api.session().is_authenticated());
    let active_page = use_state(|| Page::Dashboard);
    let user = use_state(|| None::<UserProfile>);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let on_authenticated = {
        let authenticated = authenticated.clone();
        let active_page = active_page.clone();
        let user = user.clone();
        Callback::from(move |profile: Option<UserProfile>| {
            user.set(profile);
            active_page.set(Page::Dashboard);
            authenticated.set(true);
        })
    };

    let on_logout = {
        let api = api.clone();
        let authenticated = authenticated.clone();
        let user = user.clone();
        Callback::from(move |_| {
            auth::logout(&api);
            user.set(None);
            authenticated.set(false);
        })
    };

    let context = ApiContext(api);

    if !*authenticated {
        return html! {
            <ContextProvider<ApiContext> context={context}>
                <AuthScreen on_authenticated={on_authenticated} />
            </ContextProvider<ApiContext>>
        };
    }

    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage /> },
        Page::ShoppingList => html! { <ShoppingListPage /> },
        Page::SetBudget => html! { <SetBudgetPage /> },
        Page::Categories => html! { <CategoriesPage /> },
        Page::Reports => html! { <ReportsPage /> },
    };
    let username = user
        .as_ref()
        .map(|u| if u.name.is_empty() { u.username.clone() } else { u.name.clone() });

    html! {
        <ContextProvider<ApiContext> context={context}>
            <Layout active_page={*active_page} on_select={on_select} on_logout={on_logout} username={username}>
                { content }
            </Layout>
        </ContextProvider<ApiContext>>
    }
}
