use wasm_bindgen::JsValue;
use web_sys::console;
use yew::prelude::*;

pub const GREETING: &str = "Hello, Santhosh!";
pub const INTRO: &str = "This is your first React project.";
pub const CONTROL_LABEL: &str = "Click me";

/// Click count owned by a single view instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    value: u64,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn increment(&mut self) {
        // Unreachable by clicking; pinned at the ceiling instead of panicking.
        self.value = self.value.saturating_add(1);
    }

    /// Visible output for the current value. Never mutates state.
    pub fn render(&self) -> DisplayOutput {
        DisplayOutput {
            heading: GREETING,
            intro: INTRO,
            clicks: format!("You clicked {} times", self.value),
            control_label: CONTROL_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOutput {
    pub heading: &'static str,
    pub intro: &'static str,
    pub clicks: String,
    pub control_label: &'static str,
}

impl DisplayOutput {
    /// Visible text in document order.
    pub fn lines(&self) -> [&str; 4] {
        [self.heading, self.intro, &self.clicks, self.control_label]
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.lines().iter().any(|line| line.contains(text))
    }
}

pub struct Counter {
    state: CounterState,
}

pub enum Msg {
    Increment,
}

impl Component for Counter {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Counter { state: CounterState::new() }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Increment => {
                self.state.increment();
                console::log_1(&JsValue::from(format!("count is now {}", self.state.value())));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let output = self.state.render();
        let onclick = ctx.link().callback(|_| Msg::Increment);

        html! {
            <div>
                <h1>{ output.heading }</h1>
                <p>{ output.intro }</p>
                <p>{ output.clicks }</p>
                <button {onclick}>{ output.control_label }</button>
            </div>
        }
    }
}
