use super::use_query_params;
use checkout_core::{LocaleState, MessageStore};
use std::rc::Rc;
use yew::prelude::*;

/// Locale, country and messages for the current URL.
///
/// The first value is computed synchronously during the mounting render. A
/// new value is derived whenever the query string changes; a locale without
/// a bundle falls back to the default messages and logs one warning per
/// derivation.
#[hook]
pub fn use_locale() -> Rc<LocaleState> {
    let query = use_query_params();
    use_memo(query, |query| {
        LocaleState::resolve(MessageStore::global(), query.as_ref())
    })
}
