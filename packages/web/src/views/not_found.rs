use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let lang = ui::use_lang();
    let path = segments.join("/");

    rsx! {
        section { class: "section",
            h2 { {ui::t(lang, "notfound.title")} }
            p { class: "hint", "/{path}" }
            Link { class: "btn primary", to: Route::Home {}, {ui::t(lang, "notfound.back")} }
        }
    }
}
