use dioxus::prelude::*;

use crate::content::{project_desc_key, project_key, PROJECTS};
use crate::site::use_site;

#[component]
pub fn Projects() -> Element {
    let site = use_site();
    let page = site.page.read();

    rsx! {
        section { id: "projects", class: "section",
            h2 { class: "section-title", {page.text("projects-title")} }
            p { class: "hint", {page.text("projects-hint")} }
            div { class: "project-grid",
                for (index, _) in PROJECTS.iter().enumerate() {
                    ProjectCard { key: "{index}", index }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(index: usize) -> Element {
    let site = use_site();
    let page = site.page.read();
    let Some(project) = PROJECTS.get(index) else {
        return rsx! {};
    };
    let card = project_key(project.slug);
    let url = page.attr_of(&card, "data-url");
    let class = if url.is_empty() {
        page.classes(&card)
    } else {
        format!("{} linked", page.classes(&card))
    };
    let target = card.clone();

    rsx! {
        div {
            class,
            "data-url": url,
            onclick: move |_| site.open_project(&target),
            h3 { class: "project-title", "{project.title}" }
            p { class: "project-desc", {page.text(&project_desc_key(project.slug))} }
            div { class: "project-tags",
                for tag in project.tags.iter() {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
            }
        }
    }
}
