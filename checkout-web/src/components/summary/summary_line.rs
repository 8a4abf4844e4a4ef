use crate::i18n::{fmt_money, use_i18n};
use checkout_core::{Line, line_attributes_text, summary_line_props};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryLineProps {
    pub line: Line,
}

/// Thumbnail, names, attribute text and price for one line of either shape.
#[function_component(SummaryLine)]
pub fn summary_line(props: &SummaryLineProps) -> Html {
    let i18n = use_i18n();
    let presentation = summary_line_props(&props.line);
    let attributes = line_attributes_text(&props.line);
    let quantity = props.line.quantity().to_string();
    let price = props
        .line
        .total_price()
        .map(|money| fmt_money(i18n.locale(), money));

    let thumbnail = presentation.product_image.as_ref().map_or_else(
        || {
            html! {
                <div class="summary-thumb placeholder bg-base-200" role="img" aria-label={i18n.t("summary.no_image")}></div>
            }
        },
        |image| {
            let alt = image
                .alt
                .clone()
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| presentation.product_name.clone());
            html! { <img class="summary-thumb" src={image.url.clone()} alt={alt} /> }
        },
    );

    html! {
        <li class="summary-line flex gap-3" data-line-id={props.line.id().to_string()}>
            { thumbnail }
            <div class="flex-1">
                <p class="font-semibold">{ presentation.product_name.clone() }</p>
                <p class="text-sm">{ presentation.variant_name.clone() }</p>
                if !attributes.is_empty() {
                    <p class="text-xs opacity-70 summary-attributes">{ attributes }</p>
                }
                <p class="text-xs">{ i18n.tr("summary.quantity", &[("count", quantity.as_str())]) }</p>
            </div>
            if let Some(price) = price {
                <p class="summary-price">{ price }</p>
            }
        </li>
    }
}
