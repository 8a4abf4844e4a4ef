use super::{LoadState, ViewQuery, spawn_query};
use crate::api::{ORDER_QUERY, Order, OrderData};
use crate::app::boundary::{ViewError, use_boundary};
use crate::components::LocaleSwitcher;
use crate::components::daisy_ui::{Alert, DaisyColor, Skeleton};
use crate::components::summary::{Summary, SummarySkeleton};
use crate::hooks::use_query_vars_with_locale;
use crate::i18n::{fmt_date_iso, use_i18n};
use crate::providers::use_api_client;
use serde_json::json;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OrderConfirmationProps {
    pub order_id: AttrValue,
}

#[function_component(OrderConfirmation)]
pub fn order_confirmation(props: &OrderConfirmationProps) -> Html {
    let i18n = use_i18n();
    let client = use_api_client();
    let boundary = use_boundary();
    let state = use_state(|| LoadState::<Order>::Loading);
    let variables = use_query_vars_with_locale(json!({ "id": props.order_id.as_str() }));

    {
        let state = state.clone();
        let locale = i18n.locale();
        use_effect_with(variables, move |variables| {
            let query = ViewQuery {
                view: "order-confirmation",
                document: ORDER_QUERY,
                variables: variables.clone(),
                locale,
            };
            let not_found = boundary.clone();
            spawn_query(client, query, boundary, move |data: OrderData| {
                if let Some(order) = data.order {
                    state.set(LoadState::Ready(order));
                } else {
                    not_found.report(ViewError::NotFound("order"));
                }
            });
            || ()
        });
    }

    match &*state {
        LoadState::Ready(order) => html! { <OrderConfirmationContent order={order.clone()} /> },
        LoadState::Loading | LoadState::Empty => html! { <OrderConfirmationSkeleton /> },
    }
}

#[function_component(OrderConfirmationSkeleton)]
pub fn order_confirmation_skeleton() -> Html {
    let i18n = use_i18n();
    html! {
        <main class="order-confirmation order-confirmation-skeleton" aria-busy="true">
            <span class="sr-only">{ i18n.t("order_confirmation.loading") }</span>
            <Skeleton width={AttrValue::from("60%")} height={AttrValue::from("2.5rem")} />
            <Skeleton text={true} width={AttrValue::from("30%")} />
            <SummarySkeleton rows={2} />
        </main>
    }
}

#[derive(Properties, PartialEq)]
pub struct OrderConfirmationContentProps {
    pub order: Order,
}

#[function_component(OrderConfirmationContent)]
pub fn order_confirmation_content(props: &OrderConfirmationContentProps) -> Html {
    let i18n = use_i18n();
    let order = &props.order;
    let placed = fmt_date_iso(i18n.locale(), &order.created);
    let email_notice = order
        .user_email
        .as_deref()
        .filter(|email| !email.is_empty())
        .map(|email| i18n.tr("order_confirmation.email_sent", &[("email", email)]));

    html! {
        <main class="order-confirmation" data-order-id={order.id.clone()}>
            <header class="flex justify-between items-center">
                <div>
                    <h1>{ i18n.t("order_confirmation.title") }</h1>
                    <p class="order-number">{ i18n.tr("order_confirmation.number", &[("number", order.number.as_str())]) }</p>
                    <p class="text-sm">
                        <time datetime={order.created.clone()}>{ placed }</time>
                        { " · " }
                        { i18n.tr("order_confirmation.status", &[("status", order.status.as_str())]) }
                    </p>
                </div>
                <LocaleSwitcher />
            </header>
            if let Some(notice) = email_notice {
                <Alert message={AttrValue::from(notice)} variant={DaisyColor::Success} />
            }
            <Summary lines={order.lines.clone()} totals={order.totals()} />
        </main>
    }
}
