//! Locale resolution scenarios: query parsing, bundle fallback and the
//! switcher round-trip through the URL.

use anyhow::{Result, ensure};
use checkout_core::{
    DEFAULT_COUNTRY, Locale, LocaleData, LocaleState, LocaleWatcher, MessageBundle, MessageStore,
    QueryParams, parse_locale_data, with_language_code,
};
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;
use thirtyfour::prelude::*;

use super::{
    BrowserScenario, CombinedScenario, LogicCheck, LogicOnlyScenario, ScenarioCtx, TestScenario,
};
use crate::browser::page::CHECKOUT_SELECTOR;

pub struct LocaleFallbackScenario;

impl LocaleFallbackScenario {
    fn plan() -> TestScenario {
        TestScenario::new("Locale Fallback")
            .with_check("unknown tags", unknown_tags_use_default)
            .with_check("tag normalisation", tags_ignore_case_and_separator)
            .with_check("missing bundle", missing_bundle_falls_back)
            .with_check("api language code", unsupported_locale_sends_default_code)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for LocaleFallbackScenario {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let heading = format!("{CHECKOUT_SELECTOR} h1");

        ctx.page.open(&[("locale", "xx-YY")]).await?;
        ctx.page.wait_for_any(&[CHECKOUT_SELECTOR]).await?;
        ctx.page.wait_for_text(&heading, "Checkout").await?;

        ctx.page.open(&[("locale", "MINION")]).await?;
        ctx.page.wait_for_text(&heading, "Chekka-oot").await?;

        if ctx.verbose {
            println!("  🌐 Unknown tag rendered the default bundle, MINION the translated one");
        }
        Ok(())
    }
}

impl CombinedScenario for LocaleFallbackScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(Self::plan())
    }
}

/// Picks a locale in the switcher and expects the URL and heading to follow.
pub struct LocaleSwitchScenario;

#[async_trait::async_trait]
impl BrowserScenario for LocaleSwitchScenario {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let heading = format!("{CHECKOUT_SELECTOR} h1");

        ctx.page.open(&[]).await?;
        ctx.page.wait_for_any(&[CHECKOUT_SELECTOR]).await?;
        ctx.page.select_locale(Locale::Minion.tag()).await?;
        ctx.page.wait_for_text(&heading, "Chekka-oot").await?;

        let param = ctx.page.query_param("locale").await?;
        ensure!(
            param.as_deref() == Some(Locale::Minion.tag()),
            "locale parameter is {param:?} after switching"
        );

        ctx.page.select_locale(Locale::EnUs.tag()).await?;
        ctx.page.wait_for_text(&heading, "Checkout").await?;
        Ok(())
    }
}

impl CombinedScenario for LocaleSwitchScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        None
    }
}

const URL_SEQUENCE_CHECKS: &[(&str, LogicCheck)] = &[
    ("last write wins", last_notification_wins),
    ("repeated urls", repeated_urls_notify_again),
    ("unsubscribe", unsubscribed_listener_is_silent),
];

pub const fn url_sequence_scenario() -> LogicOnlyScenario {
    LogicOnlyScenario::new("URL Change Sequence", URL_SEQUENCE_CHECKS)
}

fn unknown_tags_use_default(_store: &MessageStore) -> Result<()> {
    for raw in [None, Some(""), Some("  "), Some("xx"), Some("fr-FR"), Some("en")] {
        let data = parse_locale_data(raw);
        ensure!(
            data == LocaleData::default(),
            "{raw:?} resolved to {} instead of the default",
            data.locale
        );
    }
    Ok(())
}

fn tags_ignore_case_and_separator(_store: &MessageStore) -> Result<()> {
    ensure!(parse_locale_data(Some("EN_us")).locale == Locale::EnUs, "EN_us not recognised");
    let minion = parse_locale_data(Some("MINION"));
    ensure!(minion.locale == Locale::Minion, "MINION not recognised");
    ensure!(
        minion.country_code == DEFAULT_COUNTRY,
        "minion should pair with {DEFAULT_COUNTRY}, got {}",
        minion.country_code
    );
    Ok(())
}

fn missing_bundle_falls_back(store: &MessageStore) -> Result<()> {
    let query = QueryParams::parse("?locale=minion");
    let complete = LocaleState::resolve(store, &query);
    ensure!(complete.fallback.is_none(), "builtin store reported a missing bundle");
    ensure!(complete.messages.locale() == Locale::Minion, "minion bundle not selected");

    let partial = MessageStore::new(MessageBundle::empty(Locale::EnUs));
    let degraded = LocaleState::resolve(&partial, &query);
    ensure!(
        degraded.fallback.map(|missing| missing.locale) == Some(Locale::Minion),
        "missing minion bundle was not reported"
    );
    ensure!(
        degraded.messages.locale() == Locale::EnUs,
        "fallback should use the default bundle"
    );
    ensure!(
        degraded.data.locale == Locale::Minion,
        "fallback must keep the requested locale"
    );
    Ok(())
}

fn unsupported_locale_sends_default_code(_store: &MessageStore) -> Result<()> {
    let vars = with_language_code(json!({ "id": "Q2hlY2tvdXQ6MQ==" }), Locale::Minion);
    ensure!(
        vars == json!({ "id": "Q2hlY2tvdXQ6MQ==", "languageCode": "EN_US" }),
        "unexpected variables {vars}"
    );
    Ok(())
}

fn record_locales(watcher: &mut LocaleWatcher<'_>) -> Rc<RefCell<Vec<Locale>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    watcher.subscribe(move |state| sink.borrow_mut().push(state.data.locale));
    seen
}

fn last_notification_wins(store: &MessageStore) -> Result<()> {
    let mut watcher = LocaleWatcher::new(store, &QueryParams::default());
    let seen = record_locales(&mut watcher);
    for url in [
        "/?locale=minion",
        "/?locale=en-US&orderId=42",
        "/checkout?orderId=42&locale=minion",
    ] {
        watcher.notify_url(url);
    }
    ensure!(
        *seen.borrow() == [Locale::Minion, Locale::EnUs, Locale::Minion],
        "listener saw {:?}",
        seen.borrow()
    );
    ensure!(
        watcher.state().messages.locale() == Locale::Minion,
        "final state does not match the last url"
    );
    Ok(())
}

fn repeated_urls_notify_again(store: &MessageStore) -> Result<()> {
    let mut watcher = LocaleWatcher::new(store, &QueryParams::parse("locale=minion"));
    let seen = record_locales(&mut watcher);
    watcher.notify_url("/?locale=minion");
    watcher.notify_url("/?locale=minion");
    ensure!(seen.borrow().len() == 2, "expected one callback per notification");
    ensure!(
        watcher.translator().t("checkout.title") == "Chekka-oot",
        "translator does not follow the watcher state"
    );
    Ok(())
}

fn unsubscribed_listener_is_silent(store: &MessageStore) -> Result<()> {
    let mut watcher = LocaleWatcher::new(store, &QueryParams::default());
    let seen = Rc::new(RefCell::new(0_usize));
    let sink = Rc::clone(&seen);
    let id = watcher.subscribe(move |_| *sink.borrow_mut() += 1);
    watcher.notify_url("/?locale=minion");
    ensure!(watcher.unsubscribe(id), "listener was not registered");
    watcher.notify_url("/?locale=en-US");
    ensure!(*seen.borrow() == 1, "listener ran after unsubscribe");
    Ok(())
}
