use dioxus::prelude::*;

use crate::site::use_site;

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let page = site.page.read();

    rsx! {
        footer { class: "footer",
            p { "© Burak Akbulut" }
            p { {page.text("footer-rights")} }
        }
    }
}

/// Fixed button that appears once the page is scrolled past the threshold.
#[component]
pub fn BackToTop() -> Element {
    let site = use_site();
    let page = site.page.read();

    rsx! {
        button {
            id: "back-to-top",
            class: page.classes("back-to-top"),
            "aria-label": "top",
            onclick: move |_| site.scroll_to_top(),
            "↑"
        }
    }
}
