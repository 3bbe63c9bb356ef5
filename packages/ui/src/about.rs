use dioxus::prelude::*;

use crate::site::use_site;

#[component]
pub fn About() -> Element {
    let site = use_site();
    let page = site.page.read();

    rsx! {
        section { id: "about", class: "section",
            h2 { class: "section-title", {page.text("about-title")} }
            p { class: "about-body", {page.text("about-body")} }
        }
    }
}
