use wasm_bindgen::prelude::*;

mod app;
pub mod components;

#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();

    yew::Renderer::<app::App>::new().render();
}
