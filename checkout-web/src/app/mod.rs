use crate::api::ApiClient;
use crate::hooks::{use_locale, use_query_params};
use crate::i18n::LocaleContext;
use crate::pages::checkout::CheckoutPage;
use crate::pages::not_found::NotFound;
use crate::pages::order_confirmation::OrderConfirmation;
use crate::pages::showcase::Showcase;
use crate::providers::{AlertsProvider, ApiProvider, AppConfigProvider};
use crate::router::Route;
use checkout_core::{AppEnv, RootView, select_view};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod boundary;

pub use boundary::{BoundaryHandle, ErrorBoundary, ViewError, use_boundary};

#[function_component(App)]
pub fn app() -> Html {
    let env = use_memo((), |_| AppEnv::from_build_env());
    let router_base = env.router_base.clone().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppRoutes env={(*env).clone()} />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppRoutesProps {
    pub env: AppEnv,
}

/// Route dispatch below the router.
#[function_component(AppRoutes)]
pub fn app_routes(props: &AppRoutesProps) -> Html {
    match use_route::<Route>() {
        Some(Route::Stories) => html! { <Showcase /> },
        Some(Route::NotFound) => html! {
            <Root env={props.env.clone()} view_override={RootOverride::NotFound} />
        },
        Some(Route::Root) | None => html! { <Root env={props.env.clone()} /> },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootOverride {
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct RootProps {
    pub env: AppEnv,
    #[prop_or_default]
    pub view_override: Option<RootOverride>,
}

/// Mounts the checkout or order-confirmation view for the current query
/// string, wrapped in the config, locale, alert and API providers.
#[function_component(Root)]
pub fn root(props: &RootProps) -> Html {
    let query = use_query_params();
    let locale = use_locale();
    let view = use_memo(query, |query| select_view(query));
    let i18n = use_memo(locale, |state| LocaleContext::from_state(state));
    let client = use_memo(props.env.clone(), |env| {
        ApiClient::new(env).inspect_err(|err| log::error!("api client unavailable: {err}"))
    });

    let content = match (props.view_override, client.as_ref()) {
        (Some(RootOverride::NotFound), _) | (None, Err(_)) => html! { <NotFound /> },
        (None, Ok(client)) => html! {
            <ApiProvider client={client.clone()}>
                <ErrorBoundary fallback={html! { <NotFound /> }}>
                    { render_view(&view) }
                </ErrorBoundary>
            </ApiProvider>
        },
    };

    html! {
        <AppConfigProvider env={props.env.clone()}>
            <ContextProvider<LocaleContext> context={(*i18n).clone()}>
                <AlertsProvider>
                    { content }
                </AlertsProvider>
            </ContextProvider<LocaleContext>>
        </AppConfigProvider>
    }
}

fn render_view(view: &RootView) -> Html {
    match view {
        RootView::OrderConfirmation { order_id } => html! {
            <OrderConfirmation key={order_id.clone()} order_id={AttrValue::from(order_id.clone())} />
        },
        RootView::Checkout => html! { <CheckoutPage /> },
    }
}
