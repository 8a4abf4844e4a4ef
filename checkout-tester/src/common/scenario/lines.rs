use anyhow::{Context, Result, ensure};
use checkout_core::{Line, MessageStore, line_attributes_text, summary_line_props};
use serde::Deserialize;

use super::{LogicCheck, LogicOnlyScenario};

const LINE_FIXTURES: &str = include_str!("../../../fixtures/lines.json");

#[derive(Debug, Deserialize)]
struct LineCase {
    name: String,
    line: Line,
    expected: ExpectedLine,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpectedLine {
    variant_name: String,
    product_name: String,
    image_url: Option<String>,
    attributes: String,
}

fn load_cases() -> Result<Vec<LineCase>> {
    serde_json::from_str(LINE_FIXTURES).context("parsing line fixtures")
}

const LINE_SUMMARY_CHECKS: &[(&str, LogicCheck)] = &[
    ("presentation", fixtures_present_as_expected),
    ("quantities", quantities_and_prices_are_read),
];

pub const fn line_summary_scenario() -> LogicOnlyScenario {
    LogicOnlyScenario::new("Line Summary Presentation", LINE_SUMMARY_CHECKS)
}

fn fixtures_present_as_expected(_store: &MessageStore) -> Result<()> {
    for case in load_cases()? {
        let props = summary_line_props(&case.line);
        let expected = &case.expected;
        ensure!(
            props.variant_name == expected.variant_name,
            "{}: variant name {:?}",
            case.name,
            props.variant_name
        );
        ensure!(
            props.product_name == expected.product_name,
            "{}: product name {:?}",
            case.name,
            props.product_name
        );
        let image_url = props.product_image.map(|image| image.url);
        ensure!(
            image_url == expected.image_url,
            "{}: image {image_url:?}",
            case.name
        );
        let attributes = line_attributes_text(&case.line);
        ensure!(
            attributes == expected.attributes,
            "{}: attributes {attributes:?}",
            case.name
        );
    }
    Ok(())
}

fn quantities_and_prices_are_read(_store: &MessageStore) -> Result<()> {
    let cases = load_cases()?;
    let quantity: u32 = cases.iter().map(|case| case.line.quantity()).sum();
    ensure!(quantity == 6, "fixture quantities sum to {quantity}");

    let priced: Vec<_> = cases
        .iter()
        .filter_map(|case| case.line.total_price())
        .collect();
    ensure!(priced.len() == 1, "expected one priced line, found {}", priced.len());
    ensure!(
        priced[0].currency == "USD" && (priced[0].amount - 39.0).abs() < f64::EPSILON,
        "unexpected price {:?}",
        priced[0]
    );
    Ok(())
}
