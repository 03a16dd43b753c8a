// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) core.
//!
//! This module provides localization using the Fluent localization system.
//! It handles language detection, translation lookup with an ordered
//! fallback chain, and locale-aware number/date formatting.
//!
//! # Features
//!
//! - Startup language resolution from store, system locale, or default
//! - Embedded `.ftl` translation files, one per supported language
//! - Runtime language switching
//! - Fallback to the default language when translations are missing

pub mod catalog;
pub mod format;
pub mod lang;
pub mod resolver;

pub use catalog::{Catalog, Resolution};
pub use format::DateStyle;
pub use lang::Language;
pub use resolver::Resolver;
