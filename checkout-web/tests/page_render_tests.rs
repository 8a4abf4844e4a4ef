use checkout_core::{AppEnv, LocaleState, MessageStore, QueryParams};
use checkout_web::api::{Checkout, Order};
use checkout_web::app::{Root, RootProps};
use checkout_web::i18n::LocaleContext;
use checkout_web::pages::checkout::{
    CheckoutContent, CheckoutContentProps, CheckoutPage, CheckoutPageProps,
};
use checkout_web::pages::not_found::NotFound;
use checkout_web::pages::order_confirmation::{
    OrderConfirmationContent, OrderConfirmationContentProps,
};
use futures::executor::block_on;
use yew::LocalServerRenderer;
use yew::prelude::*;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

#[derive(Properties, PartialEq)]
struct RoutedRootProps {
    url: AttrValue,
    #[prop_or_default]
    env: AppEnv,
}

#[function_component(RoutedRoot)]
fn routed_root(props: &RoutedRootProps) -> Html {
    let history = use_memo(props.url.clone(), |url| {
        AnyHistory::from(MemoryHistory::with_entries(vec![url.to_string()]))
    });
    html! {
        <Router history={(*history).clone()}>
            <Root env={props.env.clone()} />
        </Router>
    }
}

fn render_root(url: &str) -> String {
    block_on(
        LocalServerRenderer::<RoutedRoot>::with_props(RoutedRootProps {
            url: AttrValue::from(url.to_string()),
            env: AppEnv::default(),
        })
        .render(),
    )
}

#[test]
fn order_id_selects_order_confirmation() {
    let html = render_root("/?orderId=abc123");
    assert!(html.contains("order-confirmation-skeleton"));
    assert!(html.contains("Loading your order"));
    assert!(!html.contains("checkout-missing"));
}

#[test]
fn missing_order_id_selects_checkout() {
    let html = render_root("/");
    assert!(html.contains("checkout-missing"));
    assert!(html.contains("find a checkout for this session"));
    assert!(!html.contains("order-confirmation"));
}

#[test]
fn empty_order_id_still_selects_checkout() {
    let html = render_root("/?orderId=");
    assert!(html.contains("checkout-missing"));
}

#[test]
fn locale_parameter_switches_messages() {
    let html = render_root("/?locale=minion");
    assert!(html.contains("Chekka-oot"));
    // keys missing from the joke bundle fall back to the default messages
    assert!(html.contains("find a checkout for this session"));
    let unknown = render_root("/?locale=xx-YY");
    assert!(unknown.contains(">Checkout<"));
}

#[test]
fn invalid_environment_renders_not_found() {
    let html = block_on(
        LocalServerRenderer::<RoutedRoot>::with_props(RoutedRootProps {
            url: AttrValue::from("/?orderId=abc123"),
            env: AppEnv {
                api_url: "not a url".into(),
                ..AppEnv::default()
            },
        })
        .render(),
    );
    assert!(html.contains("Page not found"));
    assert!(!html.contains("order-confirmation"));
}

#[test]
fn root_renders_outside_a_router() {
    let html = block_on(
        LocalServerRenderer::<Root>::with_props(RootProps {
            env: AppEnv::default(),
            view_override: None,
        })
        .render(),
    );
    assert!(html.contains("checkout-missing"));
    assert!(html.contains("toast-top"));
}

#[test]
fn not_found_links_home() {
    let html = block_on(LocalServerRenderer::<NotFound>::new().render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("href=\"/\""));
    assert!(html.contains("Back to store"));
}

#[test]
fn checkout_page_with_token_shows_skeleton() {
    let html = block_on(
        LocalServerRenderer::<CheckoutPage>::with_props(CheckoutPageProps {
            token: Some(AttrValue::from("token-1")),
        })
        .render(),
    );
    assert!(html.contains("checkout-skeleton"));
    assert!(html.contains("aria-busy=\"true\""));
    assert!(html.contains("Loading your checkout"));
}

fn checkout_fixture() -> Checkout {
    serde_json::from_value(serde_json::json!({
        "id": "Q2hlY2tvdXQ6MQ==",
        "email": "shopper@example.com",
        "lines": [{
            "__typename": "CheckoutLine",
            "id": "line-1",
            "quantity": 1,
            "variant": {
                "id": "v-1",
                "name": "Blue Mug",
                "attributes": [],
                "product": { "name": "Mug" }
            }
        }],
        "totalPrice": { "gross": { "amount": 12.0, "currency": "EUR" } }
    }))
    .expect("checkout fixture")
}

#[test]
fn checkout_content_renders_sections_and_pay_button() {
    let html = block_on(
        LocalServerRenderer::<CheckoutContent>::with_props(CheckoutContentProps {
            checkout: checkout_fixture(),
        })
        .render(),
    );
    assert!(html.contains("shopper@example.com"));
    assert!(html.contains("Contact details"));
    assert!(html.contains("Shipping address"));
    assert!(html.contains("Pay EUR 12.00"));
    assert!(html.contains("Blue Mug"));
    assert!(html.contains("id=\"locale-switcher\""));
}

#[derive(Properties, PartialEq)]
struct LocalizedOrderProps {
    locale: AttrValue,
    order: Order,
}

#[function_component(LocalizedOrder)]
fn localized_order(props: &LocalizedOrderProps) -> Html {
    let state = LocaleState::resolve(
        MessageStore::global(),
        &QueryParams::from_iter([("locale", props.locale.as_str())]),
    );
    html! {
        <ContextProvider<LocaleContext> context={LocaleContext::from_state(&state)}>
            <OrderConfirmationContent order={props.order.clone()} />
        </ContextProvider<LocaleContext>>
    }
}

fn order_fixture() -> Order {
    serde_json::from_value(serde_json::json!({
        "id": "T3JkZXI6MQ==",
        "number": "1042",
        "created": "2024-05-01T10:00:00Z",
        "status": "UNFULFILLED",
        "userEmail": "shopper@example.com",
        "lines": [{
            "__typename": "OrderLine",
            "id": "line-9",
            "quantity": 3,
            "variantName": "X",
            "productName": "Y",
            "thumbnail": { "url": "https://cdn.test/t.png", "alt": "T" }
        }]
    }))
    .expect("order fixture")
}

#[test]
fn order_confirmation_content_uses_active_locale() {
    let html = block_on(
        LocalServerRenderer::<LocalizedOrder>::with_props(LocalizedOrderProps {
            locale: AttrValue::from("minion"),
            order: order_fixture(),
        })
        .render(),
    );
    assert!(html.contains("Tank yu!"));
    assert!(html.contains("Ordero #1042"));
    assert!(html.contains("Status: UNFULFILLED"));
    assert!(html.contains("A confirmation was sent to shopper@example.com."));
    assert!(html.contains("https://cdn.test/t.png"));
    assert!(html.contains("datetime=\"2024-05-01T10:00:00Z\""));
}

#[test]
fn order_confirmation_content_in_default_locale() {
    let html = block_on(
        LocalServerRenderer::<OrderConfirmationContent>::with_props(
            OrderConfirmationContentProps {
                order: order_fixture(),
            },
        )
        .render(),
    );
    assert!(html.contains("Thank you for your order"));
    assert!(html.contains("Order #1042"));
    assert!(html.contains("3 items"));
}
