use crate::i18n::use_i18n;
use crate::providers::use_app_config;
use yew::prelude::*;

/// Fallback page for unknown paths and failed views.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let i18n = use_i18n();
    let home = format!("{}/", use_app_config().router_base.unwrap_or_default());

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ i18n.t("not_found.title") }</h1>
            <p>{ i18n.t("not_found.message") }</p>
            <a class="btn btn-primary" href={home}>{ i18n.t("not_found.back") }</a>
        </section>
    }
}
