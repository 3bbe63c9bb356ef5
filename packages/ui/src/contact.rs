use dioxus::prelude::*;

use crate::content::CONTACT_FIELDS;
use crate::site::use_site;

#[component]
pub fn Contact() -> Element {
    let site = use_site();
    let page = site.page.read();
    let access_key = page
        .element("field-access_key")
        .map(|_| page.attr_of("field-access_key", "value"));

    rsx! {
        section { id: "contact", class: "section",
            h2 { class: "section-title", {page.text("contact-title")} }
            p { class: "hint", {page.text("contact-intro")} }
            form {
                id: "contact-form",
                class: "contact-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    site.submit_contact();
                },
                if let Some(key) = access_key {
                    input { r#type: "hidden", name: "access_key", value: key }
                }
                for (key, name, tag) in CONTACT_FIELDS {
                    ContactField { key: "{key}", field: key, name, multiline: tag == "textarea" }
                }
                button { r#type: "submit", class: "btn primary", {page.text("contact-submit")} }
            }
            div {
                id: "result",
                class: page.classes("result"),
                style: page.styles("result"),
                {page.text("result")}
            }
        }
    }
}

#[component]
fn ContactField(field: &'static str, name: &'static str, multiline: bool) -> Element {
    let site = use_site();
    let page = site.page.read();
    let label = format!("label-{name}");
    let value = page.attr_of(field, "value");
    let input_type = if name == "email" { "email" } else { "text" };

    rsx! {
        label { class: "field",
            span { {page.text(&label)} }
            if multiline {
                textarea {
                    name,
                    required: true,
                    rows: 5,
                    value,
                    oninput: move |evt| site.set_field(field, evt.value()),
                }
            } else {
                input {
                    r#type: input_type,
                    name,
                    required: true,
                    value,
                    oninput: move |evt| site.set_field(field, evt.value()),
                }
            }
        }
    }
}
