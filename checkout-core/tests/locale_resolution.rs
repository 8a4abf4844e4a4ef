use checkout_core::{
    DEFAULT_COUNTRY, DEFAULT_LOCALE, LOCALES, Locale, LocaleState, LocaleWatcher, MessageBundle,
    MessageStore, QueryParams, RootView, language_code, parse_locale_data, select_view,
};

#[test]
fn unrecognised_locales_resolve_to_default_pair() {
    let inputs = [
        "", "en", "EN", "en-GB", "pl-PL", "minions", "en--US", "null", "undefined", "%20",
    ];
    for raw in inputs {
        let data = parse_locale_data(Some(raw));
        assert_eq!(data.locale, DEFAULT_LOCALE, "input {raw:?}");
        assert_eq!(data.country_code, DEFAULT_COUNTRY, "input {raw:?}");
    }
    assert_eq!(parse_locale_data(None).locale, DEFAULT_LOCALE);
}

#[test]
fn default_locale_always_has_messages() {
    let store = MessageStore::global();
    let state = LocaleState::resolve(store, &QueryParams::default());
    assert_eq!(state.data.locale, DEFAULT_LOCALE);
    assert!(state.fallback.is_none());
    assert!(state.messages.contains("checkout.title"));

    let sparse = MessageStore::new(MessageBundle::empty(DEFAULT_LOCALE));
    let state = LocaleState::resolve(&sparse, &QueryParams::parse("?locale=en-US"));
    assert!(state.fallback.is_none());
}

#[test]
fn missing_bundle_emits_one_diagnostic_per_lookup() {
    let store = MessageStore::new(MessageBundle::empty(DEFAULT_LOCALE));
    let query = QueryParams::parse("?locale=minion");
    for _ in 0..3 {
        let state = LocaleState::resolve(&store, &query);
        assert_eq!(state.messages.locale(), DEFAULT_LOCALE);
        let diagnostic = state.fallback.expect("fallback diagnostic");
        assert_eq!(diagnostic.locale, Locale::Minion);
        assert_eq!(diagnostic.to_string(), "missing messages for locale: minion");
    }
}

#[test]
fn adapter_is_total_and_maps_joke_locale_to_default() {
    let default_code = language_code(DEFAULT_LOCALE);
    for locale in LOCALES {
        let code = language_code(*locale);
        if locale.is_api_supported() {
            assert!(code.as_str().starts_with(&locale.tag()[..2].to_ascii_uppercase()));
        } else {
            assert_eq!(code, default_code);
        }
    }
}

#[test]
fn order_id_query_drives_view_selection() {
    let view = select_view(&QueryParams::parse("orderId=abc123"));
    assert_eq!(
        view,
        RootView::OrderConfirmation {
            order_id: "abc123".into()
        }
    );
    assert_eq!(view.name(), "order-confirmation");
    let view = select_view(&QueryParams::parse("locale=minion"));
    assert_eq!(view, RootView::Checkout);
}

#[test]
fn watcher_follows_url_changes_without_reload() {
    let store = MessageStore::global();
    let mut watcher = LocaleWatcher::new(store, &QueryParams::from_url("/?locale=minion"));
    assert_eq!(watcher.translator().t("checkout.title"), "Chekka-oot");
    watcher.notify_url("/?orderId=o-1");
    assert_eq!(watcher.state().data.locale, DEFAULT_LOCALE);
    assert_eq!(watcher.translator().t("checkout.title"), "Checkout");
}
