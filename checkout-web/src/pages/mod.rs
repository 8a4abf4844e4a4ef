pub mod checkout;
pub mod not_found;
pub mod order_confirmation;
pub mod showcase;

use crate::api::ApiClient;
use crate::app::boundary::BoundaryHandle;
use checkout_core::Locale;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Data dependency of a view.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Empty,
}

/// Query issued by a view when its variables change.
pub(crate) struct ViewQuery {
    pub view: &'static str,
    pub document: &'static str,
    pub variables: Value,
    pub locale: Locale,
}

/// Run `query` in the background and hand the data to `on_data`; failures go
/// to the boundary. Outside the browser nothing is fetched.
pub(crate) fn spawn_query<T, F>(
    client: Option<ApiClient>,
    query: ViewQuery,
    boundary: BoundaryHandle,
    on_data: F,
) where
    T: DeserializeOwned + 'static,
    F: FnOnce(T) + 'static,
{
    #[cfg(target_arch = "wasm32")]
    {
        use crate::app::boundary::ViewError;

        let Some(client) = client else {
            boundary.report(ViewError::ClientUnavailable(format!(
                "{} mounted without an api provider",
                query.view
            )));
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match client
                .execute::<T>(query.document, query.variables, query.locale)
                .await
            {
                Ok(data) => on_data(data),
                Err(err) => boundary.report(ViewError::load(query.view, &err)),
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let ViewQuery {
            view,
            document,
            variables,
            locale,
        } = query;
        let _ = (client, boundary, on_data, document, variables, locale);
        log::debug!("{view}: fetch skipped outside the browser");
    }
}
