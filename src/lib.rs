// SPDX-License-Identifier: MPL-2.0
//! `lingua_weave` localizes rendered pages: it resolves the active UI
//! language (persisted choice, system locale, or default), looks up
//! translation keys through an ordered fallback chain backed by Fluent,
//! and synchronizes every marker-bearing element of an in-memory page
//! model whenever the language changes.
//!
//! The entry point is [`session::Session`], built once per page from the
//! page model, the embedded [`i18n::Catalog`], a [`store::LanguageStore`],
//! and an explicit locale hint.

#![doc(html_root_url = "https://docs.rs/lingua_weave/0.1.0")]

pub mod error;
pub mod i18n;
pub mod notify;
pub mod page;
pub mod session;
pub mod store;
pub mod sync;
pub mod util;

pub use error::{Error, Result};
pub use i18n::{Catalog, DateStyle, Language, Resolution, Resolver};
pub use page::{Element, ElementId, ElementKind, Page};
pub use session::Session;
pub use store::{FileStore, LanguageStore, MemoryStore};
pub use sync::Synchronizer;
