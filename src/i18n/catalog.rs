// SPDX-License-Identifier: MPL-2.0
//! The translation table: one Fluent bundle per supported language.
//!
//! Translation data ships as `.ftl` files embedded from `assets/i18n/`,
//! named after the language code (`pt-BR.ftl`, `en.ftl`, ...). The default
//! language's file is treated as complete and serves as the last lookup
//! stop before the key literal.
//!
//! Lookup never fails outright: [`Catalog::resolve`] walks an ordered chain
//! and reports which level satisfied the request as a tagged [`Resolution`],
//! so callers (and tests) can distinguish a designed fallback from a direct
//! hit.

use super::lang::Language;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use tracing::warn;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Outcome of a key lookup, tagged with the chain level that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exact match in the current language's table.
    Found(String),
    /// The caller-supplied fallback string was used.
    Fallback(String),
    /// Exact match in the default language's table.
    Default(String),
    /// No table has the key; the key literal itself is displayed.
    Missing(String),
}

impl Resolution {
    /// The displayable text, whichever level produced it. Never empty for a
    /// non-empty key.
    pub fn into_text(self) -> String {
        match self {
            Resolution::Found(text)
            | Resolution::Fallback(text)
            | Resolution::Default(text)
            | Resolution::Missing(text) => text,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Per-language message bundles.
pub struct Catalog {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl Catalog {
    /// Builds the catalog from the embedded `assets/i18n/` files.
    ///
    /// Every supported language must have a parseable `.ftl` file; a missing
    /// or malformed file is a packaging defect and surfaces as
    /// [`Error::Catalog`].
    pub fn embedded() -> Result<Self> {
        let mut bundles = HashMap::new();
        for lang in Language::ALL {
            let filename = format!("{}.ftl", lang.code());
            let content = Asset::get(&filename)
                .ok_or_else(|| Error::Catalog(format!("missing translation file {filename}")))?;
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            bundles.insert(lang, build_bundle(lang, source)?);
        }
        Ok(Self { bundles })
    }

    /// Builds a catalog from in-memory FTL sources. Languages not listed have
    /// no table, which is how tests model incomplete translations.
    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self> {
        let mut bundles = HashMap::new();
        for (lang, source) in sources {
            bundles.insert(*lang, build_bundle(*lang, (*source).to_string())?);
        }
        Ok(Self { bundles })
    }

    /// Exact-match lookup in a single language's table.
    pub fn lookup(&self, lang: Language, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&lang)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let text = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(text.into_owned())
        } else {
            warn!(key, lang = lang.code(), ?errors, "translation formatting errors");
            None
        }
    }

    /// Four-level resolution chain: current table, supplied fallback,
    /// default table, key literal. An empty fallback string counts as
    /// absent. Never fails; a fully missing key logs a warning and yields
    /// the key itself.
    pub fn resolve(&self, current: Language, key: &str, fallback: Option<&str>) -> Resolution {
        if let Some(text) = self.lookup(current, key) {
            return Resolution::Found(text);
        }
        if let Some(fallback) = fallback.filter(|f| !f.is_empty()) {
            return Resolution::Fallback(fallback.to_string());
        }
        if let Some(text) = self.lookup(Language::DEFAULT, key) {
            return Resolution::Default(text);
        }
        warn!(key, lang = current.code(), "translation not found for key");
        Resolution::Missing(key.to_string())
    }
}

fn build_bundle(lang: Language, source: String) -> Result<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
        Error::Catalog(format!("failed to parse FTL for {}: {errors:?}", lang.code()))
    })?;
    let mut bundle = FluentBundle::new(vec![lang.locale()]);
    bundle
        .add_resource(resource)
        .map_err(|errors| Error::Catalog(format!("duplicate messages for {}: {errors:?}", lang.code())))?;
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_sources(&[
            (Language::PtBr, "welcome_title = Bem-vindo\nnav_home = Início\n"),
            (Language::En, "welcome_title = Welcome\n"),
        ])
        .expect("catalog should build")
    }

    #[test]
    fn exact_match_in_current_language_is_found() {
        let catalog = sample_catalog();
        let res = catalog.resolve(Language::En, "welcome_title", None);
        assert_eq!(res, Resolution::Found("Welcome".to_string()));
    }

    #[test]
    fn missing_key_falls_back_to_default_table() {
        let catalog = sample_catalog();
        let res = catalog.resolve(Language::En, "nav_home", None);
        assert_eq!(res, Resolution::Default("Início".to_string()));
    }

    #[test]
    fn supplied_fallback_takes_precedence_over_default_table() {
        let catalog = sample_catalog();
        let res = catalog.resolve(Language::En, "nav_home", Some("Home"));
        assert_eq!(res, Resolution::Fallback("Home".to_string()));
    }

    #[test]
    fn empty_fallback_counts_as_absent() {
        let catalog = sample_catalog();
        let res = catalog.resolve(Language::En, "nav_home", Some(""));
        assert_eq!(res, Resolution::Default("Início".to_string()));
    }

    #[test]
    fn key_absent_everywhere_yields_key_literal() {
        let catalog = sample_catalog();
        let res = catalog.resolve(Language::En, "no_such_key", None);
        assert_eq!(res, Resolution::Missing("no_such_key".to_string()));
        assert_eq!(res.into_text(), "no_such_key");
    }

    #[test]
    fn embedded_catalog_has_every_supported_language() {
        let catalog = Catalog::embedded().expect("embedded assets should parse");
        for lang in Language::ALL {
            assert!(
                catalog.lookup(lang, "welcome_title").is_some(),
                "missing welcome_title for {lang}"
            );
        }
    }

    #[test]
    fn malformed_ftl_reports_catalog_error() {
        let result = Catalog::from_sources(&[(Language::En, "== not fluent ==")]);
        assert!(result.is_err());
    }
}
