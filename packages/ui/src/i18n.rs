/// Supported languages. Turkish is the page's primary language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Tr,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Tr, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Tr => "tr",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "tr" | "tr-tr" => Some(Lang::Tr),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }

    /// Name of the `data-*` attribute holding this language's text.
    pub fn text_attr(self) -> &'static str {
        match self {
            Lang::Tr => "data-tr",
            Lang::En => "data-en",
        }
    }

    /// Downloadable CV for this language.
    pub fn cv_path(self) -> &'static str {
        match self {
            Lang::Tr => "assets/files/cv.pdf",
            Lang::En => "assets/files/cv_en.pdf",
        }
    }
}

/// Translate a key for a given language. Falls back to Turkish if missing.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // The page title is the same in both languages.
        (Lang::Tr, "site.title") => "Burak Akbulut - Game Developer".to_string(),
        (Lang::En, "site.title") => "Burak Akbulut - Game Developer".to_string(),

        // Contact form status
        (Lang::Tr, "contact.status.wait") => "Lütfen Bekle".to_string(),
        (Lang::En, "contact.status.wait") => "Please Wait".to_string(),
        (Lang::Tr, "contact.status.sent") => "Mesajınız Gönderildi".to_string(),
        (Lang::En, "contact.status.sent") => "Your Message Has Been Sent".to_string(),
        (Lang::Tr, "contact.status.error") => "Bir Hata Oluştu".to_string(),
        (Lang::En, "contact.status.error") => "An Error Occurred".to_string(),
        (Lang::Tr, "contact.status.broken") => "Bir Şeyler Ters Gitti".to_string(),
        (Lang::En, "contact.status.broken") => "Something Went Wrong".to_string(),

        (Lang::Tr, "notfound.title") => "Sayfa bulunamadı".to_string(),
        (Lang::En, "notfound.title") => "Page not found".to_string(),
        (Lang::Tr, "notfound.back") => "Ana sayfaya dön".to_string(),
        (Lang::En, "notfound.back") => "Back to home".to_string(),

        // Fallback: use Turkish string if present, else show key.
        (Lang::En, k) => t(Lang::Tr, k),
        (Lang::Tr, _) => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_phrases_per_language() {
        assert_eq!(t(Lang::Tr, "contact.status.wait"), "Lütfen Bekle");
        assert_eq!(t(Lang::En, "contact.status.wait"), "Please Wait");
        assert_eq!(t(Lang::En, "contact.status.broken"), "Something Went Wrong");
    }

    #[test]
    fn title_is_identical_in_both_languages() {
        assert_eq!(t(Lang::Tr, "site.title"), t(Lang::En, "site.title"));
    }

    #[test]
    fn fallback_to_turkish_then_key() {
        assert_eq!(t(Lang::En, "missing.key"), "missing.key");
    }

    #[test]
    fn codes_round_trip_and_accept_regions() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Lang::from_code("EN-us"), Some(Lang::En));
        assert_eq!(Lang::from_code("de"), None);
    }

    #[test]
    fn cv_paths_differ() {
        assert_eq!(Lang::Tr.cv_path(), "assets/files/cv.pdf");
        assert_eq!(Lang::En.cv_path(), "assets/files/cv_en.pdf");
    }
}
