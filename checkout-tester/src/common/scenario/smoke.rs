use anyhow::{Result, ensure};
use checkout_core::{AppEnv, LOCALES, Locale, MessageStore, Translator};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};
use crate::browser::page::{CHECKOUT_SELECTOR, LOCALE_SWITCHER_SELECTOR};

pub struct SmokeScenario;

impl SmokeScenario {
    fn plan() -> TestScenario {
        TestScenario::new("Smoke Test")
            .with_check("bundles", bundles_cover_registry)
            .with_check("bundle keys", translations_are_subset_of_default)
            .with_check("fallback", missing_translation_uses_default)
            .with_check("environment", default_environment_is_valid)
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, _driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.page.open(&[]).await?;
        ctx.page.wait_for_any(&[CHECKOUT_SELECTOR]).await?;

        let title = ctx.page.text_of(&format!("{CHECKOUT_SELECTOR} h1")).await?;
        ensure!(title == "Checkout", "expected default title, got {title:?}");

        let options = ctx.page.locale_options().await?;
        let expected: Vec<_> = LOCALES.iter().map(|l| l.tag().to_string()).collect();
        ensure!(
            options == expected,
            "{LOCALE_SWITCHER_SELECTOR} offers {options:?}, expected {expected:?}"
        );

        if ctx.verbose {
            println!("  🌐 Checkout mounted at {}", ctx.base_url);
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(Self::plan())
    }
}

fn bundles_cover_registry(store: &MessageStore) -> Result<()> {
    for locale in LOCALES {
        ensure!(store.contains(*locale), "no message bundle for {locale}");
    }
    Ok(())
}

fn translations_are_subset_of_default(store: &MessageStore) -> Result<()> {
    let default_keys = store.default_bundle().keys();
    for locale in store.locales() {
        let lookup = store.lookup(locale);
        let extra: Vec<_> = lookup.messages.keys().difference(&default_keys).cloned().collect();
        ensure!(extra.is_empty(), "{locale} has keys missing from the default bundle: {extra:?}");
    }
    Ok(())
}

fn missing_translation_uses_default(store: &MessageStore) -> Result<()> {
    let minion = store.lookup(Locale::Minion).messages.keys();
    let default = Translator::for_locale(store, Locale::EnUs);
    let translator = Translator::for_locale(store, Locale::Minion);
    let Some(key) = store.default_bundle().keys().difference(&minion).next().cloned() else {
        return Ok(());
    };
    ensure!(
        translator.t(&key) == default.t(&key),
        "{key} did not fall back to the default bundle"
    );
    ensure!(translator.t("no.such.key") == "no.such.key", "unknown keys should render as the key");
    Ok(())
}

fn default_environment_is_valid(_store: &MessageStore) -> Result<()> {
    let url = AppEnv::default().validate()?;
    ensure!(url.path().ends_with("/graphql/"), "unexpected default api path {url}");
    Ok(())
}
