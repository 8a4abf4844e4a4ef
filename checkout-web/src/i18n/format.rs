use checkout_core::{Locale, Money, api_locale};
#[cfg(target_arch = "wasm32")]
use js_sys::{Date, Function, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// BCP 47 tag handed to `Intl`; locales without a real tag use the default.
#[must_use]
pub const fn intl_tag(locale: Locale) -> &'static str {
    api_locale(locale).tag()
}

#[cfg(target_arch = "wasm32")]
fn locales_array(locale: Locale) -> js_sys::Array {
    let arr = js_sys::Array::new();
    arr.push(&JsValue::from_str(intl_tag(locale)));
    arr
}

/// Format a number using the locale via Intl
#[must_use]
pub fn fmt_number(locale: Locale, num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let nf = Intl::NumberFormat::new(&locales_array(locale), &Object::new());
        let format_fn: Function = nf.format();
        format_fn
            .call1(&nf, &JsValue::from_f64(num))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| num.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locale;
        num.to_string()
    }
}

/// Format an ISO 8601 date string in the medium date style (browser-side)
#[must_use]
pub fn fmt_date_iso(locale: Locale, date_iso: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = Date::new(&JsValue::from_str(date_iso));
        if date.get_time().is_nan() {
            return date_iso.to_string();
        }
        let opts = Object::new();
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("dateStyle"),
            &JsValue::from_str("medium"),
        );
        date.to_locale_date_string(intl_tag(locale), &opts)
            .as_string()
            .unwrap_or_else(|| date_iso.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locale;
        date_iso.to_string()
    }
}

/// Format a money amount in its own currency using the locale via Intl
#[must_use]
pub fn fmt_money(locale: Locale, money: &Money) -> String {
    fn fallback(money: &Money) -> String {
        format!("{} {:.2}", money.currency, money.amount)
    }

    #[cfg(target_arch = "wasm32")]
    {
        let opts = Object::new();
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("style"),
            &JsValue::from_str("currency"),
        );
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("currency"),
            &JsValue::from_str(&money.currency),
        );
        let nf = Intl::NumberFormat::new(&locales_array(locale), &opts);
        nf.format()
            .call1(&nf, &JsValue::from_f64(money.amount))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| fallback(money))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = locale;
        fallback(money)
    }
}
