use super::SummaryLine;
use crate::api::Totals;
use crate::components::daisy_ui::Skeleton;
use crate::i18n::{fmt_money, use_i18n};
use checkout_core::{Line, Money};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub lines: Vec<Line>,
    #[prop_or_default]
    pub totals: Totals,
}

#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let i18n = use_i18n();
    let count = props
        .lines
        .iter()
        .map(Line::quantity)
        .sum::<u32>()
        .to_string();
    let row = |key: &str, money: Option<&Money>, emphasized: bool| {
        money
            .map(|money| {
                html! {
                    <div class={classes!("flex", "justify-between", emphasized.then_some("font-bold"))}>
                        <dt>{ i18n.t(key) }</dt>
                        <dd>{ fmt_money(i18n.locale(), money) }</dd>
                    </div>
                }
            })
            .unwrap_or_default()
    };

    html! {
        <section class="summary card bg-base-100" aria-labelledby="summary-title">
            <div class="card-body">
                <h2 id="summary-title" class="card-title">{ i18n.t("summary.title") }</h2>
                <p class="text-sm">{ i18n.tr("summary.items", &[("count", count.as_str())]) }</p>
                <ul class="summary-lines flex flex-col gap-4">
                    { for props.lines.iter().map(|line| html! {
                        <SummaryLine key={line.id().to_string()} line={line.clone()} />
                    }) }
                </ul>
                <dl class="summary-totals">
                    { row("summary.subtotal", props.totals.subtotal.as_ref(), false) }
                    { row("summary.shipping", props.totals.shipping.as_ref(), false) }
                    { row("summary.total", props.totals.total.as_ref(), true) }
                </dl>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq, Eq)]
pub struct SummarySkeletonProps {
    #[prop_or(2)]
    pub rows: usize,
}

/// Placeholder summary with `rows` line skeletons.
#[function_component(SummarySkeleton)]
pub fn summary_skeleton(props: &SummarySkeletonProps) -> Html {
    html! {
        <section class="summary card bg-base-100" aria-busy="true">
            <div class="card-body">
                <Skeleton width={AttrValue::from("40%")} height={AttrValue::from("1.5rem")} />
                { for (0..props.rows).map(|_| html! {
                    <div class="flex gap-3">
                        <Skeleton width={AttrValue::from("4rem")} height={AttrValue::from("4rem")} />
                        <div class="flex-1 flex flex-col gap-2">
                            <Skeleton text={true} width={AttrValue::from("70%")} />
                            <Skeleton text={true} width={AttrValue::from("50%")} />
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
