use crate::i18n::{t, Lang};
use crate::view::{Selector, View};

/// Where the chosen language is remembered between switches.
pub trait LanguagePreference {
    fn load(&self) -> Option<Lang>;
    fn save(&mut self, lang: Lang);
}

/// Keeps the preference for the lifetime of the page only; a reload starts over.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreference {
    saved: Lang,
}

impl LanguagePreference for MemoryPreference {
    fn load(&self) -> Option<Lang> {
        Some(self.saved)
    }

    fn save(&mut self, lang: Lang) {
        self.saved = lang;
    }
}

/// Owns the current language and re-renders every translatable element on a switch.
pub struct Localization {
    current: Lang,
    preference: Box<dyn LanguagePreference>,
}

impl std::fmt::Debug for Localization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localization")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl Default for Localization {
    fn default() -> Self {
        Self::new(Box::new(MemoryPreference::default()))
    }
}

impl Localization {
    pub fn new(preference: Box<dyn LanguagePreference>) -> Self {
        Self {
            current: Lang::default(),
            preference,
        }
    }

    pub fn current(&self) -> Lang {
        self.current
    }

    /// Apply the saved preference, if any. Runs once when the page starts.
    pub fn restore(&mut self, view: &mut impl View) {
        if let Some(lang) = self.preference.load() {
            tracing::debug!("localization.restore: lang={}", lang.code());
            self.switch_language(view, lang);
        }
    }

    /// A language button was clicked: switch and remember the choice.
    pub fn select(&mut self, view: &mut impl View, lang: Lang) {
        self.switch_language(view, lang);
        self.preference.save(lang);
    }

    /// Like [`Localization::select`] for a raw `data-lang` value. Unknown codes change nothing.
    pub fn select_code(&mut self, view: &mut impl View, code: &str) -> Option<Lang> {
        let Some(lang) = Lang::from_code(code) else {
            tracing::debug!("localization.select_code: unknown code {code:?}");
            return None;
        };
        self.select(view, lang);
        Some(lang)
    }

    pub fn switch_language(&mut self, view: &mut impl View, lang: Lang) {
        self.current = lang;

        let attr = lang.text_attr();
        for node in view.query_all(Selector::Attrs(&["data-tr", "data-en"])) {
            let text = view.attr(node, attr).unwrap_or_default().to_string();
            view.set_text(node, &text);
        }

        if let Some(cv_link) = view.query(Selector::Id("cv-link")) {
            view.set_attr(cv_link, "href", lang.cv_path());
        }

        for button in view.query_all(Selector::Class("lang-btn")) {
            let matches = view.attr(button, "data-lang") == Some(lang.code());
            view.set_class(button, "active", matches);
        }

        view.set_title(&t(lang, "site.title"));
        view.set_document_lang(lang.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, PageModel};

    fn page() -> PageModel {
        PageModel::new()
            .with(Element::new("button", "lang-tr").with_class("lang-btn").with_attr("data-lang", "tr"))
            .with(Element::new("button", "lang-en").with_class("lang-btn").with_attr("data-lang", "en"))
            .with(Element::new("h1", "title").translatable("Merhaba", "Hello"))
            .with(Element::new("p", "body").translatable("Oyun geliştiriyorum", "I build games"))
            .with(Element::new("a", "cv").with_attr("id", "cv-link"))
            .with(Element::new("span", "plain").with_text("Unity"))
    }

    fn assert_language(page: &PageModel, lang: Lang) {
        for node in page.query_all(Selector::Attrs(&["data-tr", "data-en"])) {
            assert_eq!(page.text_content(node), page.attr(node, lang.text_attr()));
        }
        let active: Vec<_> = page
            .query_all(Selector::Class("lang-btn"))
            .into_iter()
            .filter(|b| page.has_class(*b, "active"))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(page.attr(active[0], "data-lang"), Some(lang.code()));
        assert_eq!(page.attr_of("cv", "href"), lang.cv_path());
        assert_eq!(page.document_lang(), lang.code());
    }

    #[test]
    fn switching_renders_every_translatable() {
        for lang in Lang::ALL {
            let mut page = page();
            let mut localization = Localization::default();
            localization.switch_language(&mut page, lang);
            assert_eq!(localization.current(), lang);
            assert_language(&page, lang);
        }
    }

    #[test]
    fn switching_back_and_forth_is_idempotent() {
        let mut page = page();
        let mut localization = Localization::default();
        localization.switch_language(&mut page, Lang::En);
        let once = page.clone();
        localization.switch_language(&mut page, Lang::En);
        assert_eq!(page, once);
        localization.switch_language(&mut page, Lang::Tr);
        assert_language(&page, Lang::Tr);
        assert_eq!(page.text("plain"), "Unity");
    }

    #[test]
    fn title_does_not_change_with_language() {
        let mut page = page();
        let mut localization = Localization::default();
        localization.switch_language(&mut page, Lang::Tr);
        let tr_title = page.title().to_string();
        localization.switch_language(&mut page, Lang::En);
        assert_eq!(page.title(), tr_title);
        assert_eq!(tr_title, "Burak Akbulut - Game Developer");
    }

    #[test]
    fn restore_applies_saved_preference() {
        let mut page = page();
        let mut localization = Localization::default();
        localization.restore(&mut page);
        assert_language(&page, Lang::Tr);

        localization.select(&mut page, Lang::En);
        let mut fresh = self::page();
        localization.restore(&mut fresh);
        assert_language(&fresh, Lang::En);
    }

    #[test]
    fn unknown_code_changes_nothing() {
        let mut page = page();
        let mut localization = Localization::default();
        localization.switch_language(&mut page, Lang::En);
        let before = page.clone();
        assert_eq!(localization.select_code(&mut page, "de"), None);
        assert_eq!(page, before);
        assert_eq!(localization.current(), Lang::En);
        assert_eq!(localization.select_code(&mut page, "TR"), Some(Lang::Tr));
    }
}
