// SPDX-License-Identifier: MPL-2.0
//! The page synchronizer.
//!
//! At construction it scans the page once and records which elements carry
//! localization markers; on every refresh it walks that registry instead of
//! re-querying the whole document. The synchronizer owns the registry, the
//! page owns the elements.
//!
//! A refresh is idempotent and never aborts mid-scan: the resolver's
//! fallback chain guarantees every key yields displayable text, so one
//! missing translation cannot leave later elements stale.

use crate::i18n::{Language, Resolver};
use crate::page::{ElementId, ElementKind, Page};
use tracing::debug;

pub struct Synchronizer {
    text_targets: Vec<ElementId>,
    aria_targets: Vec<ElementId>,
    selector_targets: Vec<ElementId>,
}

impl Synchronizer {
    /// Scans the page and records every marker-bearing element.
    pub fn new(page: &Page) -> Self {
        let mut text_targets = Vec::new();
        let mut aria_targets = Vec::new();
        let mut selector_targets = Vec::new();
        for (id, element) in page.elements().iter().enumerate() {
            if element.text_key().is_some() {
                text_targets.push(id);
            }
            if element.aria_key().is_some() {
                aria_targets.push(id);
            }
            if element.selector_code().is_some() {
                selector_targets.push(id);
            }
        }
        debug!(
            text = text_targets.len(),
            aria = aria_targets.len(),
            selectors = selector_targets.len(),
            "localization registry built"
        );
        Self {
            text_targets,
            aria_targets,
            selector_targets,
        }
    }

    /// Rewrites every registered surface from the resolver's current
    /// language. Text keys land in the element's kind-appropriate surface;
    /// accessibility labels are updated independently.
    pub fn refresh_page(&self, page: &mut Page, resolver: &Resolver) {
        for &id in &self.text_targets {
            let Some(element) = page.element_mut(id) else {
                continue;
            };
            let Some(key) = element.text_key().map(str::to_string) else {
                continue;
            };
            let translated = resolver.translate(&key);
            match element.kind() {
                ElementKind::ActionInput => element.set_value(translated),
                ElementKind::FieldInput => element.set_placeholder(translated),
                ElementKind::Title => element.set_text(translated),
                ElementKind::Node => {
                    if element.html_allowed() {
                        element.set_html(translated);
                    } else {
                        element.set_text(translated);
                    }
                }
            }
        }

        for &id in &self.aria_targets {
            let Some(element) = page.element_mut(id) else {
                continue;
            };
            let Some(key) = element.aria_key().map(str::to_string) else {
                continue;
            };
            let translated = resolver.translate(&key);
            element.set_aria_label(translated);
        }
    }

    /// Marks the selector control matching the current language as active
    /// and clears the mark from every other one.
    pub fn update_selectors(&self, page: &mut Page, current: Language) {
        for &id in &self.selector_targets {
            let Some(element) = page.element_mut(id) else {
                continue;
            };
            if element.selector_code() == Some(current.code()) {
                element.add_class("active");
            } else {
                element.remove_class("active");
            }
        }
    }

    /// Registered language-selector controls, in page order.
    pub fn selector_targets(&self) -> &[ElementId] {
        &self.selector_targets
    }
}
