//! Static content of the portfolio and the page model built from it.

use api::SiteConfig;

use crate::i18n::Lang;
use crate::model::{Element, PageModel};

pub struct SectionLink {
    pub id: &'static str,
    pub tr: &'static str,
    pub en: &'static str,
}

pub const SECTIONS: [SectionLink; 5] = [
    SectionLink { id: "home", tr: "Ana Sayfa", en: "Home" },
    SectionLink { id: "about", tr: "Hakkımda", en: "About" },
    SectionLink { id: "skills", tr: "Yetenekler", en: "Skills" },
    SectionLink { id: "projects", tr: "Projeler", en: "Projects" },
    SectionLink { id: "contact", tr: "İletişim", en: "Contact" },
];

pub struct Skill {
    pub slug: &'static str,
    pub name: &'static str,
    /// CSS width the bar grows to.
    pub width: &'static str,
}

pub const SKILLS: [Skill; 5] = [
    Skill { slug: "unity", name: "Unity", width: "90%" },
    Skill { slug: "csharp", name: "C#", width: "85%" },
    Skill { slug: "git", name: "Git", width: "75%" },
    Skill { slug: "cpp", name: "C++", width: "60%" },
    Skill { slug: "blender", name: "Blender", width: "55%" },
];

pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub tr: &'static str,
    pub en: &'static str,
    pub url: Option<&'static str>,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        slug: "dungeon-runner",
        title: "Dungeon Runner",
        tr: "Prosedürel olarak üretilen zindanlarda geçen hızlı tempolu bir aksiyon oyunu.",
        en: "A fast-paced action game set in procedurally generated dungeons.",
        url: Some("https://itch.io"),
        tags: &["Unity", "C#"],
    },
    Project {
        slug: "pixel-farm",
        title: "Pixel Farm",
        tr: "Mevsim döngüsü ve envanter sistemine sahip piksel sanatlı bir çiftlik simülasyonu.",
        en: "A pixel-art farming sim with a season cycle and an inventory system.",
        url: Some("https://github.com"),
        tags: &["Unity", "C#", "Aseprite"],
    },
    Project {
        slug: "orbit",
        title: "Orbit",
        tr: "Yerçekimi tabanlı bulmacalar üzerine küçük bir C++ prototipi.",
        en: "A small C++ prototype built around gravity puzzles.",
        url: None,
        tags: &["C++", "SFML"],
    },
];

/// The contact form's visible fields: element key, field name, tag.
pub const CONTACT_FIELDS: [(&str, &str, &'static str); 3] = [
    ("field-name", "name", "input"),
    ("field-email", "email", "input"),
    ("field-message", "message", "textarea"),
];

// key, tag, Turkish, English
const TEXTS: &[(&str, &'static str, &str, &str)] = &[
    ("hero-greeting", "p", "Merhaba, ben", "Hi, I'm"),
    ("hero-role", "h2", "Oyun Geliştirici", "Game Developer"),
    (
        "hero-tagline",
        "p",
        "Unity ve C# ile oynaması keyifli oyunlar geliştiriyorum.",
        "I build games that are fun to play with Unity and C#.",
    ),
    ("about-title", "h2", "Hakkımda", "About Me"),
    (
        "about-body",
        "p",
        "Oyun mekaniklerini tasarlamayı, prototip çıkarmayı ve küçük fikirleri bitmiş oyunlara dönüştürmeyi seviyorum.",
        "I enjoy designing game mechanics, prototyping quickly and turning small ideas into finished games.",
    ),
    ("skills-title", "h2", "Yetenekler", "Skills"),
    ("projects-title", "h2", "Projeler", "Projects"),
    ("projects-hint", "p", "Detaylar için bir karta tıklayın.", "Click a card for details."),
    ("contact-title", "h2", "İletişim", "Contact"),
    (
        "contact-intro",
        "p",
        "Bir proje ya da iş birliği için bana yazın.",
        "Write to me about a project or a collaboration.",
    ),
    ("label-name", "label", "Adınız", "Your Name"),
    ("label-email", "label", "E-posta", "Email"),
    ("label-message", "label", "Mesajınız", "Your Message"),
    ("contact-submit", "button", "Gönder", "Send"),
    ("footer-rights", "p", "Tüm hakları saklıdır.", "All rights reserved."),
];

pub fn nav_key(section: &str) -> String {
    format!("nav-{section}")
}

pub fn lang_key(lang: Lang) -> String {
    format!("lang-{}", lang.code())
}

pub fn skill_key(slug: &str) -> String {
    format!("skill-{slug}")
}

pub fn project_key(slug: &str) -> String {
    format!("project-{slug}")
}

pub fn project_desc_key(slug: &str) -> String {
    format!("project-{slug}-desc")
}

/// Build the page model for the portfolio. Text is filled in by the first language switch.
pub fn portfolio(config: &SiteConfig) -> PageModel {
    let mut page = PageModel::new();

    page.push(Element::new("ul", "nav-menu").with_attr("id", "nav-menu").with_class("nav-menu"));
    for section in &SECTIONS {
        page.push(
            Element::new("a", nav_key(section.id))
                .with_class("nav-link")
                .with_attr("href", format!("#{}", section.id))
                .translatable(section.tr, section.en),
        );
    }
    for lang in Lang::ALL {
        page.push(
            Element::new("button", lang_key(lang))
                .with_class("lang-btn")
                .with_attr("data-lang", lang.code())
                .with_text(lang.code().to_uppercase()),
        );
    }
    page.push(Element::new("button", "mobile-menu-btn").with_attr("id", "mobile-menu-btn"));

    for (key, tag, tr, en) in TEXTS {
        page.push(Element::new(*tag, *key).translatable(tr, en));
    }
    page.push(
        Element::new("a", "cv-link")
            .with_attr("id", "cv-link")
            .with_attr("href", Lang::default().cv_path())
            .translatable("CV İndir", "Download CV"),
    );

    for skill in &SKILLS {
        page.push(
            Element::new("div", skill_key(skill.slug))
                .with_class("skill-progress")
                .with_attr("data-width", skill.width),
        );
    }

    for project in &PROJECTS {
        let mut card = Element::new("div", project_key(project.slug)).with_class("project-card");
        if let Some(url) = project.url {
            card = card.with_attr("data-url", url);
        }
        page.push(card);
        page.push(Element::new("p", project_desc_key(project.slug)).translatable(project.tr, project.en));
    }

    if let Some(key) = &config.relay_access_key {
        page.push(field("field-access_key", "input", "access_key", key));
    }
    for (key, name, tag) in CONTACT_FIELDS {
        page.push(field(key, tag, name, ""));
    }
    page.push(Element::new("div", "result").with_attr("id", "result"));

    page.push(
        Element::new("button", "back-to-top")
            .with_attr("id", "back-to-top")
            .with_class("back-to-top"),
    );

    page
}

fn field(key: &str, tag: &'static str, name: &str, default: &str) -> Element {
    Element::new(tag, key)
        .with_attr("name", name)
        .with_attr("value", default)
        .with_attr("data-default", default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Localization;
    use crate::view::{Selector, View};

    fn config(key: Option<&str>) -> SiteConfig {
        SiteConfig {
            relay_access_key: key.map(str::to_string),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn every_nav_link_points_at_a_section() {
        let page = portfolio(&config(None));
        let links = page.query_all(Selector::Class("nav-link"));
        assert_eq!(links.len(), SECTIONS.len());
        for (link, section) in links.into_iter().zip(SECTIONS.iter()) {
            assert_eq!(page.attr(link, "href"), Some(format!("#{}", section.id).as_str()));
        }
    }

    #[test]
    fn keys_are_unique() {
        let page = portfolio(&config(Some("k")));
        let mut keys: Vec<_> = page.elements().iter().map(|e| e.key().to_string()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn access_key_is_a_hidden_default_field() {
        let page = portfolio(&config(Some("secret")));
        assert_eq!(page.attr_of("field-access_key", "value"), "secret");
        assert_eq!(page.attr_of("field-access_key", "data-default"), "secret");
        assert!(portfolio(&config(None)).element("field-access_key").is_none());
    }

    #[test]
    fn first_switch_fills_every_translatable() {
        let mut page = portfolio(&config(None));
        Localization::default().switch_language(&mut page, Lang::En);
        assert_eq!(page.text("nav-about"), "About");
        assert_eq!(page.text("cv-link"), "Download CV");
        assert_eq!(page.attr_of("cv-link", "href"), "assets/files/cv_en.pdf");
        assert_eq!(page.text(&project_desc_key("orbit")), PROJECTS[2].en);
        assert_eq!(page.classes(&lang_key(Lang::En)), "lang-btn active");
    }

    #[test]
    fn only_some_projects_open() {
        let page = portfolio(&config(None));
        assert_eq!(page.attr_of(&project_key("orbit"), "data-url"), "");
        assert_eq!(page.attr_of(&project_key("pixel-farm"), "data-url"), "https://github.com");
    }
}
