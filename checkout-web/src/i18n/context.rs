use checkout_core::{Locale, LocaleData, LocaleState, MessageStore, Translator};
use std::collections::BTreeMap;
use yew::prelude::*;

/// Locale and messages shared with every mounted view.
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleContext {
    pub data: LocaleData,
    pub translator: Translator,
}

impl LocaleContext {
    #[must_use]
    pub fn from_state(state: &LocaleState) -> Self {
        Self {
            data: state.data,
            translator: state.translator(MessageStore::global()),
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.data.locale
    }

    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    #[must_use]
    pub fn tr(&self, key: &str, args: &[(&str, &str)]) -> String {
        let map: BTreeMap<&str, &str> = args.iter().copied().collect();
        self.translator.tr(key, Some(&map))
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        let data = LocaleData::default();
        Self {
            data,
            translator: Translator::for_locale(MessageStore::global(), data.locale),
        }
    }
}

/// Locale context from the nearest provider, or the default locale outside one.
#[hook]
pub fn use_i18n() -> LocaleContext {
    use_context::<LocaleContext>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::QueryParams;

    #[test]
    fn context_translates_with_arguments() {
        let state = LocaleState::resolve(MessageStore::global(), &QueryParams::default());
        let ctx = LocaleContext::from_state(&state);
        assert_eq!(ctx.locale(), Locale::EnUs);
        assert_eq!(ctx.tr("order_confirmation.number", &[("number", "42")]), "Order #42");
        assert_eq!(ctx.tr("summary.items", &[("count", "1")]), "1 item");
    }

    #[test]
    fn default_context_uses_default_locale() {
        let ctx = LocaleContext::default();
        assert_eq!(ctx.data, LocaleData::default());
        assert_eq!(ctx.t("checkout.title"), "Checkout");
    }
}
