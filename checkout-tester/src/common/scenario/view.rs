use anyhow::{Result, ensure};
use checkout_core::{MessageStore, QueryParams, RootView, select_view};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::browser::page::{CHECKOUT_SELECTOR, NOT_FOUND_SELECTOR, ORDER_CONFIRMATION_SELECTOR};

const SAMPLE_ORDER_ID: &str = "T3JkZXI6MTA0Mg==";

pub struct ViewSelectionScenario;

impl ViewSelectionScenario {
    fn plan() -> TestScenario {
        TestScenario::new("Root View Selection")
            .with_check("order id", order_id_selects_confirmation)
            .with_check("checkout fallback", other_queries_select_checkout)
            .with_check("duplicate keys", first_order_id_wins)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for ViewSelectionScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open(&[("orderId", SAMPLE_ORDER_ID)]).await?;
        // Without a backend the order request fails and the boundary shows not-found.
        let matched = ctx
            .page
            .wait_for_any(&[ORDER_CONFIRMATION_SELECTOR, NOT_FOUND_SELECTOR])
            .await?;
        let checkout = driver.find_all(By::Css(CHECKOUT_SELECTOR)).await?;
        ensure!(checkout.is_empty(), "checkout rendered alongside {matched}");

        ctx.page.open(&[("orderId", ""), ("locale", "minion")]).await?;
        ctx.page.wait_for_any(&[CHECKOUT_SELECTOR]).await?;

        if ctx.verbose {
            println!("  🌐 orderId mounted {matched}, empty orderId mounted checkout");
        }
        Ok(())
    }
}

impl CombinedScenario for ViewSelectionScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(Self::plan())
    }
}

fn order_id_selects_confirmation(_store: &MessageStore) -> Result<()> {
    let search = format!("?locale=minion&orderId={SAMPLE_ORDER_ID}");
    let view = select_view(&QueryParams::parse(&search));
    ensure!(
        view.order_id() == Some(SAMPLE_ORDER_ID),
        "expected order confirmation for {SAMPLE_ORDER_ID}, got {view:?}"
    );
    ensure!(view.name() == "order-confirmation", "unexpected view name {}", view.name());
    Ok(())
}

fn other_queries_select_checkout(_store: &MessageStore) -> Result<()> {
    for search in ["", "?", "?locale=minion", "?orderId=", "?orderid=1", "?order_id=1"] {
        let view = select_view(&QueryParams::parse(search));
        ensure!(view == RootView::Checkout, "{search:?} selected {view:?}");
    }
    Ok(())
}

fn first_order_id_wins(_store: &MessageStore) -> Result<()> {
    let view = select_view(&QueryParams::from_url("/?orderId=a&orderId=b#summary"));
    ensure!(view.order_id() == Some("a"), "duplicate orderId resolved to {view:?}");
    Ok(())
}
