use dioxus::prelude::*;

const PORTFOLIO_CSS: Asset = asset!("/assets/styling/portfolio.css");

#[component]
pub fn PortfolioTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: PORTFOLIO_CSS } }
}
