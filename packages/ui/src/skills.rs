use dioxus::prelude::*;

use crate::content::{skill_key, SKILLS};
use crate::site::use_site;

/// Skill bars start empty and grow to their `data-width` once the section is seen.
#[component]
pub fn Skills() -> Element {
    let site = use_site();
    let page = site.page.read();

    rsx! {
        section { id: "skills", class: "section",
            h2 { class: "section-title", {page.text("skills-title")} }
            div { class: "skills-list",
                for skill in SKILLS.iter() {
                    div { key: "{skill.slug}", class: "skill",
                        div { class: "skill-head",
                            span { class: "skill-name", "{skill.name}" }
                            span { class: "skill-value", "{skill.width}" }
                        }
                        div { class: "skill-bar",
                            div {
                                class: page.classes(&skill_key(skill.slug)),
                                "data-width": skill.width,
                                style: page.styles(&skill_key(skill.slug)),
                            }
                        }
                    }
                }
            }
        }
    }
}
