use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Document, Element, HtmlElement};

pub fn document() -> Document {
    window().unwrap().document().unwrap()
}

/// Yields to the event loop so Yew's scheduler can flush pending renders.
pub async fn next_tick() {
    let promise = Promise::new(&mut |resolve, _reject| {
        window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

pub fn has_text(root: &Element, text: &str) -> bool {
    root.text_content().map_or(false, |content| content.contains(text))
}

/// Finds the first button under `root` whose label matches, ignoring case.
pub fn button_labeled(root: &Element, label: &str) -> HtmlElement {
    let buttons = root.get_elements_by_tag_name("button");
    (0..buttons.length())
        .filter_map(|i| buttons.item(i))
        .find(|button| {
            button
                .text_content()
                .map_or(false, |text| text.trim().eq_ignore_ascii_case(label))
        })
        .and_then(|button| button.dyn_into::<HtmlElement>().ok())
        .unwrap_or_else(|| panic!("no button labeled {:?}", label))
}
