//! The locales the site ships. Static data only; translation happens in the
//! site content, never here.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Locale {
    pub code: &'static str,
    pub english_name: &'static str,
}

/// English first; it doubles as the fallback.
pub const SUPPORTED: &[Locale] = &[
    Locale {
        code: "en",
        english_name: "English",
    },
    Locale {
        code: "de",
        english_name: "German",
    },
    Locale {
        code: "es",
        english_name: "Spanish",
    },
    Locale {
        code: "fr",
        english_name: "French",
    },
    Locale {
        code: "it",
        english_name: "Italian",
    },
    Locale {
        code: "ja",
        english_name: "Japanese",
    },
    Locale {
        code: "ko",
        english_name: "Korean",
    },
    Locale {
        code: "pt-BR",
        english_name: "Brazilian Portuguese",
    },
    Locale {
        code: "ru",
        english_name: "Russian",
    },
    Locale {
        code: "zh-CN",
        english_name: "Simplified Chinese",
    },
];

impl Locale {
    /// Case-insensitive lookup, tolerant of `_` in place of `-` so both
    /// `pt-BR` and `pt_br` resolve.
    pub fn find(code: &str) -> Option<&'static Locale> {
        let code = code.trim().replace('_', "-");
        SUPPORTED
            .iter()
            .find(|locale| locale.code.eq_ignore_ascii_case(&code))
    }
}

impl Default for Locale {
    fn default() -> Self {
        SUPPORTED[0]
    }
}
