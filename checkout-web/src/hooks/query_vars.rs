use crate::i18n::use_i18n;
use checkout_core::with_language_code;
use serde_json::Value;
use yew::prelude::*;

/// Request variables with the backend `languageCode` for the active locale.
///
/// The result changes with the locale, so views can key fetch effects on it.
#[hook]
pub fn use_query_vars_with_locale(variables: Value) -> Value {
    let locale = use_i18n().locale();
    with_language_code(variables, locale)
}
