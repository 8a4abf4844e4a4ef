mod context;
mod format;

pub use context::{LocaleContext, use_i18n};
pub use format::{fmt_date_iso, fmt_money, fmt_number, intl_tag};
