use super::{LoadState, ViewQuery, spawn_query};
use crate::api::{ApiClient, CHECKOUT_QUERY, Checkout, CheckoutData};
use crate::app::boundary::use_boundary;
use crate::components::LocaleSwitcher;
use crate::components::daisy_ui::Skeleton;
use crate::components::summary::{Summary, SummarySkeleton};
use crate::hooks::use_query_vars_with_locale;
use crate::i18n::{fmt_money, use_i18n};
use crate::providers::{use_alerts, use_api_client};
use serde_json::json;
use yew::prelude::*;

/// `localStorage` key holding the active checkout token.
pub const CHECKOUT_TOKEN_KEY: &str = "checkout.token";

#[must_use]
pub fn stored_checkout_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::local_storage()
            .ok()?
            .get_item(CHECKOUT_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.trim().is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckoutPageProps {
    /// Overrides the token read from storage.
    #[prop_or_default]
    pub token: Option<AttrValue>,
}

#[function_component(CheckoutPage)]
pub fn checkout_page(props: &CheckoutPageProps) -> Html {
    let i18n = use_i18n();
    let client = use_api_client();
    let boundary = use_boundary();
    let alerts = use_alerts();
    let state = use_state(|| LoadState::<Checkout>::Loading);
    let token = use_memo(props.token.clone(), |token| {
        token
            .as_ref()
            .map(ToString::to_string)
            .or_else(stored_checkout_token)
    });
    let variables = use_query_vars_with_locale(json!({
        "id": token.as_deref().unwrap_or_default(),
        "channel": client.as_ref().map(ApiClient::channel).unwrap_or_default(),
    }));

    {
        let state = state.clone();
        let locale = i18n.locale();
        let missing = i18n.t("checkout.missing");
        let has_token = token.is_some();
        use_effect_with(variables, move |variables| {
            if has_token {
                let query = ViewQuery {
                    view: "checkout",
                    document: CHECKOUT_QUERY,
                    variables: variables.clone(),
                    locale,
                };
                spawn_query(client, query, boundary, move |data: CheckoutData| {
                    if let Some(checkout) = data.checkout {
                        state.set(LoadState::Ready(checkout));
                    } else {
                        alerts.show_error(missing);
                        state.set(LoadState::Empty);
                    }
                });
            }
            || ()
        });
    }

    if token.is_none() {
        return html! { <CheckoutMissing /> };
    }
    match &*state {
        LoadState::Loading => html! { <CheckoutSkeleton /> },
        LoadState::Ready(checkout) => html! { <CheckoutContent checkout={checkout.clone()} /> },
        LoadState::Empty => html! { <CheckoutMissing /> },
    }
}

#[function_component(CheckoutMissing)]
pub fn checkout_missing() -> Html {
    let i18n = use_i18n();
    html! {
        <main class="checkout checkout-missing">
            <header class="flex justify-between items-center">
                <h1>{ i18n.t("checkout.title") }</h1>
                <LocaleSwitcher />
            </header>
            <p role="status">{ i18n.t("checkout.missing") }</p>
        </main>
    }
}

#[function_component(CheckoutSkeleton)]
pub fn checkout_skeleton() -> Html {
    let i18n = use_i18n();
    html! {
        <main class="checkout checkout-skeleton" aria-busy="true">
            <span class="sr-only">{ i18n.t("checkout.loading") }</span>
            <div class="grid gap-6 md:grid-cols-2">
                <div class="flex flex-col gap-4">
                    <Skeleton width={AttrValue::from("50%")} height={AttrValue::from("2rem")} />
                    { for (0..3).map(|_| html! {
                        <Skeleton width={AttrValue::from("100%")} height={AttrValue::from("6rem")} />
                    }) }
                </div>
                <SummarySkeleton rows={3} />
            </div>
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckoutContentProps {
    pub checkout: Checkout,
}

#[function_component(CheckoutContent)]
pub fn checkout_content(props: &CheckoutContentProps) -> Html {
    let i18n = use_i18n();
    let checkout = &props.checkout;
    let totals = checkout.totals();
    let pay_label = totals.total.as_ref().map_or_else(
        || i18n.t("checkout.payment.title"),
        |total| {
            let amount = fmt_money(i18n.locale(), total);
            i18n.tr("checkout.payment.pay", &[("amount", amount.as_str())])
        },
    );

    html! {
        <main class="checkout" data-checkout-id={checkout.id.clone()}>
            <header class="flex justify-between items-center">
                <h1>{ i18n.t("checkout.title") }</h1>
                <LocaleSwitcher />
            </header>
            <div class="grid gap-6 md:grid-cols-2">
                <div class="flex flex-col gap-6">
                    <section class="checkout-contact">
                        <h2>{ i18n.t("checkout.contact.title") }</h2>
                        <p>
                            <span class="label">{ i18n.t("checkout.contact.email") }</span>
                            { checkout.email.clone().unwrap_or_default() }
                        </p>
                    </section>
                    <section class="checkout-shipping">
                        <h2>{ i18n.t("checkout.shipping.title") }</h2>
                        <p class="label">{ i18n.t("checkout.shipping.method") }</p>
                    </section>
                    <section class="checkout-payment">
                        <h2>{ i18n.t("checkout.payment.title") }</h2>
                        <button type="button" class="btn btn-primary w-full" disabled={checkout.lines.is_empty()}>
                            { pay_label }
                        </button>
                    </section>
                </div>
                <Summary lines={checkout.lines.clone()} totals={totals} />
            </div>
        </main>
    }
}
