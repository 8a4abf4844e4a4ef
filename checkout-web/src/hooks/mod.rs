//! Hooks that derive storefront state from the current URL.

mod locale;
mod query_vars;
mod url_change;

pub use locale::use_locale;
pub use query_vars::use_query_vars_with_locale;
pub use url_change::{use_query_params, use_query_string, use_url_change};
