use anyhow::Result;
use checkout_core::MessageStore;
use thirtyfour::prelude::*;

use crate::browser::StorefrontPage;

pub mod lines;
pub mod locale;
pub mod smoke;
pub mod view;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub page: StorefrontPage<'a>,
    pub verbose: bool,
}

/// One pure check run against a freshly loaded message store.
pub type LogicCheck = fn(&MessageStore) -> Result<()>;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub checks: Vec<(&'static str, LogicCheck)>,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_check(mut self, label: &'static str, check: LogicCheck) -> Self {
        self.checks.push((label, check));
        self
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;

    /// False for scenarios whose browser half is empty; drivers skip them.
    fn has_browser_steps(&self) -> bool {
        true
    }
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// Scenario that only exercises core logic.
#[derive(Clone)]
pub struct LogicOnlyScenario {
    name: &'static str,
    checks: &'static [(&'static str, LogicCheck)],
}

impl LogicOnlyScenario {
    #[must_use]
    pub const fn new(name: &'static str, checks: &'static [(&'static str, LogicCheck)]) -> Self {
        Self { name, checks }
    }
}

#[async_trait::async_trait]
impl BrowserScenario for LogicOnlyScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("{} has no browser steps", self.name)
    }

    fn has_browser_steps(&self) -> bool {
        false
    }
}

impl CombinedScenario for LogicOnlyScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(
            self.checks
                .iter()
                .fold(TestScenario::new(self.name), |scenario, &(label, check)| {
                    scenario.with_check(label, check)
                }),
        )
    }
}

const SCENARIOS: &[(&str, &str)] = &[
    ("smoke", "Smoke Test"),
    ("locale-fallback", "Locale Fallback"),
    ("locale-switch", "Locale Switcher Navigation"),
    ("url-sequence", "URL Change Sequence"),
    ("view-selection", "Root View Selection"),
    ("line-summary", "Line Summary Presentation"),
];

/// Every scenario key, in listing order.
pub fn scenario_keys() -> impl Iterator<Item = &'static str> {
    SCENARIOS.iter().map(|(key, _)| *key)
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "locale-fallback" | "locale" => Some(Box::new(locale::LocaleFallbackScenario)),
        "locale-switch" | "switch" => Some(Box::new(locale::LocaleSwitchScenario)),
        "url-sequence" | "url" => Some(Box::new(locale::url_sequence_scenario())),
        "view-selection" | "view" => Some(Box::new(view::ViewSelectionScenario)),
        "line-summary" | "lines" => Some(Box::new(lines::line_summary_scenario())),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves() {
        for key in scenario_keys() {
            assert!(get_scenario(key).is_some(), "missing scenario {key}");
        }
        assert!(get_scenario("LINES").is_some());
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn logic_only_scenario_copies_its_checks() {
        fn ok(_: &MessageStore) -> Result<()> {
            Ok(())
        }
        const CHECKS: &[(&str, LogicCheck)] = &[("a", ok), ("b", ok)];
        let logic = LogicOnlyScenario::new("Demo", CHECKS)
            .as_logic_scenario()
            .expect("logic");
        assert_eq!(logic.name, "Demo");
        let labels: Vec<_> = logic.checks.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn logic_only_scenarios_have_no_browser_steps() {
        for key in ["url-sequence", "line-summary"] {
            let scenario = get_scenario(key).expect("scenario");
            assert!(!scenario.has_browser_steps(), "{key} should be logic-only");
            assert!(scenario.as_logic_scenario().is_some());
        }
        for key in ["smoke", "locale-fallback", "locale-switch", "view-selection"] {
            let scenario = get_scenario(key).expect("scenario");
            assert!(scenario.has_browser_steps(), "{key} should drive a browser");
        }
    }
}
