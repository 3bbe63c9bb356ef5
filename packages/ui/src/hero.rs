use dioxus::prelude::*;

use crate::site::use_site;

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let page = site.page.read();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-content",
                p { class: "hero-greeting", {page.text("hero-greeting")} }
                h1 { class: "hero-name", "Burak Akbulut" }
                h2 { class: "hero-role", {page.text("hero-role")} }
                p { class: "hero-tagline", {page.text("hero-tagline")} }
                div { class: "cta_row",
                    a {
                        id: "cv-link",
                        class: "btn primary",
                        href: page.attr_of("cv-link", "href"),
                        download: "",
                        {page.text("cv-link")}
                    }
                    a {
                        class: "btn",
                        href: "#contact",
                        onclick: move |evt| {
                            evt.prevent_default();
                            site.navigate("#contact");
                        },
                        {page.text("nav-contact")}
                    }
                }
            }
        }
    }
}
