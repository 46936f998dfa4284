pub mod components;

use web_sys::Element;
use yew::prelude::*;

use crate::components::counter::Counter;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main>
            <Counter />
        </main>
    }
}

/// Mounts the application onto the document body, replacing its contents.
pub fn run() {
    match web_sys::window().and_then(|window| window.document()).and_then(|document| document.body()) {
        Some(body) => run_with_root(body.into()),
        None => web_sys::console::error_1(&"no document body to mount onto".into()),
    }
}

/// Mounts the application under `root`. Yew clears `root` first, so the rest
/// of the page is untouched only when `root` is a dedicated element.
pub fn run_with_root(root: Element) {
    // Readable panic messages in the browser console; skipped in release builds.
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    yew::Renderer::<App>::with_root(root).render();
}
