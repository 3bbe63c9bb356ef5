use dioxus::prelude::*;

use crate::site::Site;
use crate::viewport::{Intersection, ScrollSample};

// Reports the scroll offset and every section's top on scroll, resize and load.
const JS_SCROLL_CHANNEL: &str = r#"
    const sample = () => dioxus.send({
        y: window.pageYOffset,
        sections: Array.from(document.querySelectorAll("section[id]")).map((s) => ({
            id: s.id,
            top: s.offsetTop,
        })),
    });
    window.addEventListener("scroll", sample, { passive: true });
    window.addEventListener("resize", sample);
    window.addEventListener("load", sample);
    sample();
"#;

// Forwards intersection entries for the skills section. The observer is never disconnected.
const JS_SKILLS_CHANNEL: &str = r##"
    const skills = document.querySelector("#skills");
    if (skills) {
        const observer = new IntersectionObserver((entries) => {
            entries.forEach((entry) => dioxus.send({
                intersecting: entry.isIntersecting,
                ratio: entry.intersectionRatio,
            }));
        }, { threshold: 0.5 });
        observer.observe(skills);
    }
"##;

/// Subscribe the site to window scroll and skills visibility once mounted.
pub fn use_viewport_listeners(site: Site) {
    // Effects only run in the client, after hydration.
    use_effect(move || {
        spawn(async move {
            let mut channel = document::eval(JS_SCROLL_CHANNEL);
            while let Ok(sample) = channel.recv::<ScrollSample>().await {
                site.on_scroll(sample);
            }
            tracing::debug!("listeners.scroll: channel closed");
        });

        spawn(async move {
            let mut channel = document::eval(JS_SKILLS_CHANNEL);
            while let Ok(entry) = channel.recv::<Intersection>().await {
                site.on_skills_intersection(entry);
            }
            tracing::debug!("listeners.skills: channel closed");
        });
    });
}
