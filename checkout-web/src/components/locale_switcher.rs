use crate::components::daisy_ui::{Select, SelectOption};
use crate::hooks::use_query_params;
use crate::i18n::use_i18n;
use crate::providers::use_alerts;
use crate::router::Route;
use checkout_core::{LOCALES, Locale, MessageStore, Translator};
use std::collections::BTreeMap;
use yew::prelude::*;
use yew_router::prelude::*;

/// Locale picker that rewrites the `locale` query parameter in place.
#[function_component(LocaleSwitcher)]
pub fn locale_switcher() -> Html {
    let i18n = use_i18n();
    let query = use_query_params();
    let navigator = use_navigator();
    let alerts = use_alerts();

    let options = LOCALES
        .iter()
        .map(|locale| SelectOption::new(locale.tag(), locale.display_name()))
        .collect::<Vec<_>>();

    let on_change = {
        let generic_error = i18n.t("alerts.generic_error");
        Callback::from(move |value: AttrValue| {
            let Some(locale) = Locale::from_tag(&value) else {
                return;
            };
            let Some(navigator) = navigator.as_ref() else {
                log::warn!("locale switch to {locale} outside a router");
                return;
            };
            match navigator.push_with_query(&Route::Root, &query.with_locale(locale.tag())) {
                Ok(()) => {
                    let translator = Translator::for_locale(MessageStore::global(), locale);
                    let args = BTreeMap::from([("language", locale.display_name())]);
                    alerts.show_success(translator.tr("alerts.language_changed", Some(&args)));
                }
                Err(err) => {
                    log::warn!("locale switch to {locale} failed: {err}");
                    alerts.show_error(generic_error.clone());
                }
            }
        })
    };

    html! {
        <Select
            id={AttrValue::from("locale-switcher")}
            class={classes!("select-sm")}
            label={AttrValue::from(i18n.t("checkout.language"))}
            options={options}
            value={AttrValue::from(i18n.locale().tag())}
            on_change={on_change}
        />
    }
}
