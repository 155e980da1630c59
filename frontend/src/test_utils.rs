use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Fresh container appended to the test page body
pub fn mount_root() -> Element {
    let root = gloo::utils::document().create_element("div").unwrap();
    gloo::utils::body().append_child(&root).unwrap();
    root
}

/// Origin of the page running the tests. Its server answers every API path
/// with a non-JSON body, which is enough to exercise status-blind flows.
pub fn test_origin() -> String {
    gloo::utils::window().location().origin().unwrap()
}

pub async fn tick() {
    gloo::timers::future::TimeoutFuture::new(10).await;
}

/// Polls `condition` every few milliseconds for up to two seconds
pub async fn wait_until(condition: impl Fn() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tick().await;
    }
    condition()
}

pub fn find(root: &Element, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

pub fn text_of(root: &Element, selector: &str) -> String {
    find(root, selector).text_content().unwrap_or_default()
}

pub fn click(root: &Element, selector: &str) {
    find(root, selector).dyn_into::<HtmlElement>().unwrap().click();
}
