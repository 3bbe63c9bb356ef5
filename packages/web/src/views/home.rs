use dioxus::prelude::*;
use ui::{About, BackToTop, Contact, Footer, Hero, Navbar, Projects, Skills};

/// The single-page portfolio. A click anywhere outside the menu closes it.
#[component]
pub fn Home() -> Element {
    let site = ui::use_site();

    rsx! {
        div { class: "page", onclick: move |_| site.close_menu(),
            Navbar {}
            main {
                Hero {}
                About {}
                Skills {}
                Projects {}
                Contact {}
            }
            Footer {}
            BackToTop {}
        }
    }
}
