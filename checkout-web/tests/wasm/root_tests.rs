use wasm_bindgen_test::*;
use yew::Renderer;

use checkout_web::app::App;
use checkout_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    dom::sleep_ms(50).await.expect("sleep");
}

#[wasm_bindgen_test]
async fn app_mounts_checkout_without_order_id() {
    render_app().await;
    let doc = dom::document().expect("document");
    let main = doc
        .query_selector("main.checkout")
        .expect("query checkout")
        .expect("checkout view mounted");
    assert!(main.text_content().unwrap_or_default().to_lowercase().contains("checkout"));
    assert!(doc.query_selector(".order-confirmation").expect("query").is_none());
}

#[wasm_bindgen_test]
async fn locale_switcher_lists_supported_locales() {
    render_app().await;
    let doc = dom::document().expect("document");
    let options = doc
        .query_selector_all("#locale-switcher option")
        .expect("query options");
    assert_eq!(options.length(), 2);
}

#[wasm_bindgen_test]
fn stored_token_is_read_from_local_storage() {
    let storage = dom::local_storage().expect("storage");
    storage
        .set_item(checkout_web::pages::checkout::CHECKOUT_TOKEN_KEY, "tok-1")
        .expect("set token");
    assert_eq!(
        checkout_web::pages::checkout::stored_checkout_token().as_deref(),
        Some("tok-1")
    );
    storage
        .remove_item(checkout_web::pages::checkout::CHECKOUT_TOKEN_KEY)
        .expect("clear token");
    assert!(checkout_web::pages::checkout::stored_checkout_token().is_none());
}

#[wasm_bindgen_test]
fn current_search_reads_location() {
    let search = dom::current_search();
    assert!(search.is_empty() || search.starts_with('?'));
}
