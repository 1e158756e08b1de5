use yew::prelude::*;

pub const PRODUCT_NAME: &str = "Relay CRM";
pub const TAGLINE: &str = "Every relationship, one place.";
pub const COPYRIGHT_YEAR: u16 = 2024;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">
            <div class="app-footer__brand">
                <span class="app-footer__logo" aria-hidden="true">{ "R" }</span>
                <div>
                    <div class="app-footer__product">{ PRODUCT_NAME }</div>
                    <div class="app-footer__tagline">{ TAGLINE }</div>
                </div>
            </div>
            <div class="app-footer__legal">
                <p class="app-footer__copyright">
                    { format!("© {} {}. All rights reserved.", COPYRIGHT_YEAR, PRODUCT_NAME) }
                </p>
                <p class="app-footer__attribution">
                    { "Built with " }
                    <a href="https://yew.rs" target="_blank" rel="noopener noreferrer">{ "Yew" }</a>
                    { " and Rust." }
                </p>
            </div>
        </footer>
    }
}
