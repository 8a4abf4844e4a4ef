use wasm_bindgen_test::*;
use yew::Renderer;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::Router;

use checkout_web::app::{ErrorBoundary, ViewError, use_boundary};
use checkout_web::dom;
use checkout_web::hooks::use_query_params;
use checkout_web::pages::not_found::NotFound;

/// Reports a missing order after mount when the URL carries `fail`.
#[function_component(FailingView)]
fn failing_view() -> Html {
    let boundary = use_boundary();
    let should_fail = use_query_params().get("fail").is_some();
    use_effect_with(should_fail, move |fail| {
        if *fail {
            boundary.report(ViewError::NotFound("order"));
        }
        || ()
    });
    html! { <main class="boundary-child">{ "ready" }</main> }
}

#[derive(Properties, PartialEq)]
struct HarnessProps {
    history: AnyHistory,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    html! {
        <Router history={props.history.clone()}>
            <ErrorBoundary fallback={html! { <NotFound /> }}>
                <FailingView />
            </ErrorBoundary>
        </Router>
    }
}

fn mount_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    let root = doc.create_element("div").expect("create root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

#[wasm_bindgen_test]
async fn reported_failure_renders_not_found_until_navigation() {
    let memory = MemoryHistory::with_entries(vec!["/?orderId=1&fail=1".to_string()]);
    let root = mount_root();
    Renderer::<Harness>::with_root_and_props(
        root.clone(),
        HarnessProps {
            history: AnyHistory::from(memory.clone()),
        },
    )
    .render();
    dom::sleep_ms(50).await.expect("sleep");

    assert!(root.query_selector("section.not-found").expect("query").is_some());
    assert!(root.query_selector(".boundary-child").expect("query").is_none());

    memory.push("/?orderId=2");
    dom::sleep_ms(50).await.expect("sleep");

    assert!(root.query_selector("section.not-found").expect("query").is_none());
    let child = root
        .query_selector(".boundary-child")
        .expect("query")
        .expect("view remounted after navigation");
    assert_eq!(child.text_content().as_deref(), Some("ready"));
}
