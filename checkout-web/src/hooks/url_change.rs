use crate::dom;
use checkout_core::QueryParams;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Raw query string of the current location.
///
/// Inside a router this follows client-side navigation; outside one it falls
/// back to `window.location.search`.
#[hook]
pub fn use_query_string() -> String {
    use_location().map_or_else(dom::current_search, |location| {
        location.query_str().to_string()
    })
}

/// Parsed query parameters, recomputed only when the query string changes.
#[hook]
pub fn use_query_params() -> Rc<QueryParams> {
    let query = use_query_string();
    use_memo(query, |query| QueryParams::parse(query))
}

/// Run `on_change` after mount and after every navigation that changes the
/// query string.
#[hook]
pub fn use_url_change<F>(on_change: F)
where
    F: Fn(&QueryParams) + 'static,
{
    let query = use_query_params();
    use_effect_with(query, move |query| {
        log::debug!("url changed: {} parameter(s)", query.iter().count());
        on_change(query.as_ref());
        || ()
    });
}
