// SPDX-License-Identifier: MPL-2.0
//! The page session: wiring between store, resolver, synchronizer, and the
//! notification surface.
//!
//! A session is created once per rendered page with the persisted language
//! choice and the locale hint passed in explicitly; there is no ambient
//! global. It performs the ordered side effects of a language change and
//! routes selector clicks back into [`set_language`](Session::set_language).

use crate::i18n::{Catalog, Language, Resolver};
use crate::notify::{Notifier, Severity, LANGUAGE_CHANGED_DURATION};
use crate::page::{ElementId, Page};
use crate::store::LanguageStore;
use crate::sync::Synchronizer;
use tracing::warn;

/// Translation key of the confirmation toast shown after a language change.
const LANGUAGE_CHANGED_KEY: &str = "notification_language_changed";

pub struct Session {
    page: Page,
    resolver: Resolver,
    sync: Synchronizer,
    store: Box<dyn LanguageStore>,
    notifier: Option<Box<dyn Notifier>>,
}

impl Session {
    /// Builds a session over a rendered page.
    ///
    /// The startup language comes from the store if it holds a supported
    /// code, else from the locale hint (the system- or browser-reported
    /// tag) by prefix match, else the default. The resolved language is
    /// applied to the page immediately, without a notification.
    pub fn new(
        page: Page,
        catalog: Catalog,
        store: Box<dyn LanguageStore>,
        locale_hint: Option<String>,
    ) -> Self {
        let stored = store.load_language();
        let initial = Resolver::resolve_initial(stored.as_deref(), locale_hint.as_deref());
        let sync = Synchronizer::new(&page);
        let mut session = Self {
            page,
            resolver: Resolver::new(catalog, initial),
            sync,
            store,
            notifier: None,
        };
        session.apply_language(initial, false);
        session
    }

    /// Installs the notification surface. Without one, notifications are
    /// silently dropped.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn language(&self) -> Language {
        self.resolver.current()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Switches the page to `code`. An unsupported code is logged and
    /// replaced with the default language rather than rejected.
    ///
    /// Side effects, in order: update the in-memory language, best-effort
    /// persist, set the page-level lang attribute, full page refresh,
    /// selector highlighting, and, when `notify` is set, one confirmation
    /// toast in the newly selected language.
    pub fn set_language(&mut self, code: &str, notify: bool) {
        let lang = match code.parse::<Language>() {
            Ok(lang) => lang,
            Err(()) => {
                warn!(code, "unsupported language code, using default");
                Language::DEFAULT
            }
        };
        self.apply_language(lang, notify);
    }

    /// Handles a click on a language-selector control. Elements without a
    /// selector marker are ignored.
    pub fn click_selector(&mut self, id: ElementId) {
        let code = self
            .page
            .element(id)
            .and_then(|element| element.selector_code())
            .map(str::to_string);
        if let Some(code) = code {
            self.set_language(&code, true);
        }
    }

    fn apply_language(&mut self, lang: Language, notify: bool) {
        self.resolver.set_current(lang);

        // In-memory state stays authoritative when the store misbehaves.
        if let Err(error) = self.store.save_language(lang.code()) {
            warn!(%error, lang = lang.code(), "failed to persist language choice");
        }

        self.page.set_lang_attr(lang.code());
        self.sync.refresh_page(&mut self.page, &self.resolver);
        self.sync.update_selectors(&mut self.page, lang);

        if notify {
            if let Some(notifier) = &self.notifier {
                let message = self.resolver.translate(LANGUAGE_CHANGED_KEY);
                notifier.notify(&message, Severity::Success, LANGUAGE_CHANGED_DURATION);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::notify::Severity;
    use crate::page::Element;
    use crate::store::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    const PT: &str = "welcome_title = Bem-vindo\n\
                      notification_language_changed = Idioma alterado com sucesso!\n";
    const EN: &str = "welcome_title = Welcome\n\
                      notification_language_changed = Language changed successfully!\n";
    const FR: &str = "welcome_title = Bienvenue\n\
                      notification_language_changed = Langue modifiée avec succès !\n";

    fn catalog() -> Catalog {
        Catalog::from_sources(&[
            (Language::PtBr, PT),
            (Language::En, EN),
            (Language::Fr, FR),
        ])
        .expect("catalog should build")
    }

    fn sample_page() -> Page {
        let mut page = Page::new();
        page.push(Element::title("welcome_title"));
        page.push(Element::selector("pt-BR"));
        page.push(Element::selector("en"));
        page
    }

    /// Store handle that stays inspectable after the session takes it.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl LanguageStore for SharedStore {
        fn load_language(&self) -> Option<String> {
            self.0.borrow().load_language()
        }

        fn save_language(&mut self, code: &str) -> Result<()> {
            self.0.borrow_mut().save_language(code)
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier(Rc<RefCell<Vec<(String, Severity, Duration)>>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, severity: Severity, duration: Duration) {
            self.0
                .borrow_mut()
                .push((message.to_string(), severity, duration));
        }
    }

    #[test]
    fn startup_restores_the_stored_language() {
        let store = MemoryStore::with_language("fr");
        let session = Session::new(sample_page(), catalog(), Box::new(store), None);
        assert_eq!(session.language(), Language::Fr);
        assert_eq!(session.page().lang_attr(), Some("fr"));
        assert_eq!(session.page().element(0).unwrap().text(), "Bienvenue");
    }

    #[test]
    fn startup_with_garbage_store_uses_the_locale_hint() {
        let store = MemoryStore::with_language("xx-YY");
        let session = Session::new(
            sample_page(),
            catalog(),
            Box::new(store),
            Some("pt-PT".to_string()),
        );
        assert_eq!(session.language(), Language::PtBr);
    }

    #[test]
    fn startup_persists_the_resolved_language() {
        let store = SharedStore::default();
        let _session = Session::new(
            sample_page(),
            catalog(),
            Box::new(store.clone()),
            Some("en-GB".to_string()),
        );
        assert_eq!(store.load_language().as_deref(), Some("en"));
    }

    #[test]
    fn set_language_updates_page_store_and_selectors() {
        let store = SharedStore::default();
        let mut session = Session::new(sample_page(), catalog(), Box::new(store.clone()), None);
        session.set_language("en", false);

        assert_eq!(session.language(), Language::En);
        assert_eq!(store.load_language().as_deref(), Some("en"));
        assert_eq!(session.page().lang_attr(), Some("en"));
        assert_eq!(session.page().element(0).unwrap().text(), "Welcome");
        assert!(!session.page().element(1).unwrap().has_class("active"));
        assert!(session.page().element(2).unwrap().has_class("active"));
    }

    #[test]
    fn unsupported_code_substitutes_the_default() {
        let mut session =
            Session::new(sample_page(), catalog(), Box::new(MemoryStore::new()), None);
        session.set_language("en", false);
        session.set_language("xx-YY", false);
        assert_eq!(session.language(), Language::DEFAULT);
        assert_eq!(session.page().element(0).unwrap().text(), "Bem-vindo");
    }

    #[test]
    fn store_failure_leaves_in_memory_state_authoritative() {
        let mut session = Session::new(
            sample_page(),
            catalog(),
            Box::new(MemoryStore::failing()),
            None,
        );
        session.set_language("fr", false);
        assert_eq!(session.language(), Language::Fr);
        assert_eq!(session.page().element(0).unwrap().text(), "Bienvenue");
    }

    #[test]
    fn notification_is_emitted_in_the_newly_selected_language() {
        let notifier = RecordingNotifier::default();
        let mut session =
            Session::new(sample_page(), catalog(), Box::new(MemoryStore::new()), None)
                .with_notifier(Box::new(notifier.clone()));
        session.set_language("en", true);

        let events = notifier.0.borrow();
        assert_eq!(events.len(), 1);
        let (message, severity, duration) = &events[0];
        assert_eq!(message, "Language changed successfully!");
        assert_eq!(*severity, Severity::Success);
        assert_eq!(*duration, LANGUAGE_CHANGED_DURATION);
    }

    #[test]
    fn silent_change_emits_no_notification() {
        let notifier = RecordingNotifier::default();
        let mut session =
            Session::new(sample_page(), catalog(), Box::new(MemoryStore::new()), None)
                .with_notifier(Box::new(notifier.clone()));
        session.set_language("en", false);
        assert!(notifier.0.borrow().is_empty());
    }

    #[test]
    fn missing_notifier_is_a_no_op() {
        let mut session =
            Session::new(sample_page(), catalog(), Box::new(MemoryStore::new()), None);
        session.set_language("en", true);
        assert_eq!(session.language(), Language::En);
    }

    #[test]
    fn selector_click_switches_and_notifies() {
        let notifier = RecordingNotifier::default();
        let mut session =
            Session::new(sample_page(), catalog(), Box::new(MemoryStore::new()), None)
                .with_notifier(Box::new(notifier.clone()));
        session.click_selector(2);

        assert_eq!(session.language(), Language::En);
        assert!(session.page().element(2).unwrap().has_class("active"));
        assert_eq!(notifier.0.borrow().len(), 1);
    }

    #[test]
    fn clicking_a_non_selector_element_is_ignored() {
        let mut session =
            Session::new(sample_page(), catalog(), Box::new(MemoryStore::new()), None);
        let before = session.language();
        session.click_selector(0);
        session.click_selector(99);
        assert_eq!(session.language(), before);
    }
}
