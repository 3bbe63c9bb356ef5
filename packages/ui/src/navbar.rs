use dioxus::prelude::*;

use crate::content::{lang_key, nav_key, SECTIONS};
use crate::i18n::Lang;
use crate::site::use_site;

#[component]
pub fn Navbar() -> Element {
    let site = use_site();
    let page = site.page.read();

    rsx! {
        nav { class: "navbar",
            div { class: "nav-container",
                a { class: "nav-logo", href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        site.navigate("#home");
                    },
                    "Burak Akbulut"
                }
                ul {
                    id: "nav-menu",
                    class: page.classes("nav-menu"),
                    onclick: move |evt| evt.stop_propagation(),
                    for section in SECTIONS.iter() {
                        li { key: "{section.id}",
                            NavLink { key_name: nav_key(section.id) }
                        }
                    }
                }
                div { class: "lang-switch",
                    for lang in Lang::ALL {
                        LangButton { key: "{lang.code()}", lang }
                    }
                }
                button {
                    id: "mobile-menu-btn",
                    class: "mobile-menu-btn",
                    "aria-label": "menu",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        site.toggle_menu();
                    },
                    span {}
                    span {}
                    span {}
                }
            }
        }
    }
}

#[component]
fn NavLink(key_name: String) -> Element {
    let site = use_site();
    let page = site.page.read();
    let href = page.attr_of(&key_name, "href");
    let target = href.clone();

    rsx! {
        a {
            class: page.classes(&key_name),
            href,
            onclick: move |evt| {
                evt.prevent_default();
                site.navigate(&target);
            },
            {page.text(&key_name)}
        }
    }
}

#[component]
fn LangButton(lang: Lang) -> Element {
    let site = use_site();
    let page = site.page.read();
    let key = lang_key(lang);
    let code = page.attr_of(&key, "data-lang");
    let target = code.clone();

    rsx! {
        button {
            class: page.classes(&key),
            "data-lang": code,
            onclick: move |_| site.select_language(&target),
            {page.text(&key)}
        }
    }
}
