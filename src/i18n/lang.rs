// SPDX-License-Identifier: MPL-2.0
//! Supported UI languages and their identifier mappings.
//!
//! A [`Language`] is the short code the rest of the crate works with
//! (`pt-BR`, `en`, `es`, `fr`). The fuller region-aware locale tag is only
//! needed for number/date formatting and is derived via [`Language::locale`].

use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// The fixed set of languages the page can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    PtBr,
    En,
    Es,
    Fr,
}

impl Language {
    /// Every supported language, in selector display order.
    pub const ALL: [Language; 4] = [Language::PtBr, Language::En, Language::Es, Language::Fr];

    /// The ultimate fallback. Its translation table is assumed complete.
    pub const DEFAULT: Language = Language::PtBr;

    /// The short language code used in markers, the store, and `.ftl` file names.
    pub fn code(&self) -> &'static str {
        match self {
            Language::PtBr => "pt-BR",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// The full region-aware locale tag, used only for formatting.
    pub fn locale(&self) -> LanguageIdentifier {
        let tag = match self {
            Language::PtBr => "pt-BR",
            Language::En => "en-US",
            Language::Es => "es-ES",
            Language::Fr => "fr-FR",
        };
        tag.parse().unwrap()
    }

    /// Maps a system-reported language tag to the nearest supported language
    /// by two-letter prefix. Regional variants beyond the prefix are not
    /// disambiguated: `pt-PT` and `pt-BR` both resolve to [`Language::PtBr`].
    pub fn from_tag_prefix(tag: &str) -> Option<Language> {
        if tag.starts_with("pt") {
            Some(Language::PtBr)
        } else if tag.starts_with("en") {
            Some(Language::En)
        } else if tag.starts_with("es") {
            Some(Language::Es)
        } else if tag.starts_with("fr") {
            Some(Language::Fr)
        } else {
            None
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ();

    /// Accepts exactly the supported codes. Anything else, including regional
    /// tags like `pt-PT`, is rejected; prefix mapping is a separate, explicit
    /// step reserved for system-reported tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt-BR" => Ok(Language::PtBr),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            _ => Err(()),
        }
    }
}
