// SPDX-License-Identifier: MPL-2.0
//! The resolver: current-language state plus the translation lookup surface.
//!
//! The resolver is an explicit context object, created once per page session
//! from the persisted language choice and the system-reported locale. It
//! owns the catalog and the current language; everything downstream
//! (synchronizer, notifications, formatting) asks it rather than consulting
//! any ambient state.

use super::catalog::{Catalog, Resolution};
use super::format::{self, DateStyle};
use super::lang::Language;
use chrono::NaiveDate;
use tracing::debug;

pub struct Resolver {
    catalog: Catalog,
    current: Language,
}

impl Resolver {
    pub fn new(catalog: Catalog, initial: Language) -> Self {
        Self {
            catalog,
            current: initial,
        }
    }

    /// Determines the startup language. Priority: a valid persisted code,
    /// then the system tag mapped by prefix, then the default. Unsupported
    /// or malformed inputs fall through silently.
    pub fn resolve_initial(stored: Option<&str>, system_tag: Option<&str>) -> Language {
        if let Some(lang) = stored.and_then(|code| code.parse::<Language>().ok()) {
            debug!(lang = lang.code(), "language restored from store");
            return lang;
        }
        if let Some(lang) = system_tag.and_then(Language::from_tag_prefix) {
            debug!(lang = lang.code(), "language detected from system tag");
            return lang;
        }
        Language::DEFAULT
    }

    /// The system-reported locale tag, the browser-language analog.
    pub fn system_tag() -> Option<String> {
        sys_locale::get_locale()
    }

    pub fn current(&self) -> Language {
        self.current
    }

    pub(crate) fn set_current(&mut self, lang: Language) {
        self.current = lang;
    }

    /// Translates a key via the four-level chain, always yielding displayable
    /// text.
    pub fn translate(&self, key: &str) -> String {
        self.catalog.resolve(self.current, key, None).into_text()
    }

    /// Like [`translate`](Self::translate) with a caller-supplied fallback,
    /// which wins over the default-language table.
    pub fn translate_or(&self, key: &str, fallback: &str) -> String {
        self.catalog
            .resolve(self.current, key, Some(fallback))
            .into_text()
    }

    /// The tagged resolution, for callers that need to know which chain
    /// level answered.
    pub fn resolve(&self, key: &str, fallback: Option<&str>) -> Resolution {
        self.catalog.resolve(self.current, key, fallback)
    }

    pub fn format_number(&self, value: f64) -> String {
        format::format_number(value, self.current)
    }

    pub fn format_date(&self, date: NaiveDate, style: DateStyle) -> String {
        format::format_date(date, self.current, style)
    }
}
