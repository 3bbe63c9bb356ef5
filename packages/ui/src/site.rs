use std::sync::Arc;

use api::{FormRelay, SiteConfig};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::i18n::Lang;
use crate::localization::Localization;
use crate::model::PageModel;
use crate::submission::{ContactForm, Step};
use crate::view::View;
use crate::viewport::{Intersection, ScrollSample, SkillReveal, Viewport};
use crate::{browser, content, navigation, submission, viewport};

/// All page state, created once at start-up and shared through context.
///
/// Each handler borrows the page model and the one controller it drives; the
/// components re-render from the page model.
#[derive(Clone, Copy)]
pub struct Site {
    pub page: Signal<PageModel>,
    localization: Signal<Localization>,
    viewport: Signal<Viewport>,
    skills: Signal<SkillReveal>,
    contact: Signal<ContactForm>,
    relay: Signal<Arc<dyn FormRelay>>,
}

impl Site {
    fn new(config: &SiteConfig) -> Self {
        let mut page = content::portfolio(config);
        let mut localization = Localization::default();
        localization.restore(&mut page);

        Self {
            page: Signal::new(page),
            localization: Signal::new(localization),
            viewport: Signal::new(Viewport::default()),
            skills: Signal::new(SkillReveal::default()),
            contact: Signal::new(ContactForm::default()),
            relay: Signal::new(api::relay_from_config(config)),
        }
    }

    pub fn lang(self) -> Lang {
        self.localization.read().current()
    }

    /// Switch to the language a button's `data-lang` names. Unknown codes change nothing.
    pub fn select_language(self, code: &str) {
        let mut page = self.page;
        let mut localization = self.localization;
        let picked = localization.with_mut(|l| page.with_mut(|p| l.select_code(p, code)));
        if picked.is_none() {
            tracing::warn!("site.select_language: unknown code {code}");
        }
    }

    pub fn toggle_menu(self) {
        let mut page = self.page;
        page.with_mut(navigation::toggle_menu);
    }

    pub fn close_menu(self) {
        let mut page = self.page;
        if navigation::menu_open(&*page.peek()) {
            page.with_mut(navigation::close_menu);
        }
    }

    /// A nav link was clicked: close the mobile menu and glide to the section.
    pub fn navigate(self, href: &str) {
        self.close_menu();
        let Some(id) = navigation::section_id(href).map(str::to_string) else {
            return;
        };
        spawn(async move {
            let measured = browser::section_top(&id).await;
            match navigation::scroll_target(measured, &self.viewport.peek(), &id) {
                Some(top) => browser::scroll_to(top),
                None => tracing::debug!("site.navigate: no section for #{id}"),
            }
        });
    }

    pub fn scroll_to_top(self) {
        browser::scroll_to(0.0);
    }

    pub fn open_project(self, key: &str) {
        let page = self.page.peek();
        let url = page
            .node(key)
            .and_then(|card| navigation::project_url(&*page, card));
        if let Some(url) = url {
            browser::open_in_new_tab(&url);
        }
    }

    pub fn on_scroll(self, sample: ScrollSample) {
        let mut page = self.page;
        let mut viewport = self.viewport;
        viewport.with_mut(|v| page.with_mut(|p| v.on_scroll(p, sample)));
    }

    pub fn on_skills_intersection(self, entry: Intersection) {
        let mut skills = self.skills;
        if !skills.with_mut(|s| s.observe(entry)) {
            return;
        }
        spawn(async move {
            viewport::reveal_after(TimeoutFuture::new, move || {
                let mut page = self.page;
                let skills = self.skills.peek().clone();
                page.with_mut(|p| skills.reveal(p));
            })
            .await;
        });
    }

    pub fn set_field(self, key: &str, value: String) {
        let mut page = self.page;
        page.with_mut(|p| {
            if let Some(field) = p.node(key) {
                p.set_attr(field, "value", &value);
            }
        });
    }

    /// Run one submission: "please wait", relay call, outcome, reset, hide after the window.
    pub fn submit_contact(self) {
        let mut page = self.page;
        let mut contact = self.contact;
        let lang = self.localization.peek().current();
        let fields = contact.with_mut(|c| page.with_mut(|p| c.begin(p, lang)));
        let relay = self.relay.peek().clone();

        spawn(async move {
            submission::finish(&*relay, &fields, TimeoutFuture::new, move |step| {
                // Status text follows the language current when it is written.
                let lang = self.localization.peek().current();
                contact.with_mut(|c| {
                    page.with_mut(|p| match step {
                        Step::Resolved(delivery) => c.resolve(p, lang, &delivery),
                        Step::Expired => c.expire(p),
                    })
                });
            })
            .await;
        });
    }
}

/// Create the site state for `config` and provide it to the tree.
#[component]
pub fn SiteProvider(config: SiteConfig, children: Element) -> Element {
    let site = use_hook(|| Site::new(&config));
    use_context_provider(|| site);
    crate::listeners::use_viewport_listeners(site);

    let title = use_memo(move || site.page.read().title().to_string());
    let lang_code = use_memo(move || site.page.read().document_lang().to_string());
    use_effect(move || browser::set_document_lang(&lang_code.read()));

    rsx! {
        document::Title { "{title}" }
        {children}
    }
}

pub fn use_site() -> Site {
    use_context::<Site>()
}

pub fn use_lang() -> Lang {
    use_site().lang()
}
