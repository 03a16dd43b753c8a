// SPDX-License-Identifier: MPL-2.0
use lingua_weave::notify::{Notifier, Severity};
use lingua_weave::{Catalog, DateStyle, Element, FileStore, Language, Page, Resolver, Session};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Prints notifications to the terminal in place of a toast surface.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity, _duration: Duration) {
        println!("[{severity:?}] {message}");
    }
}

fn sample_page() -> Page {
    let mut page = Page::new();
    page.push(Element::title("welcome_title"));
    page.push(Element::node("welcome_title"));
    page.push(Element::node("welcome_subtitle"));
    page.push(Element::node("nav_home"));
    page.push(Element::node("nav_reports"));
    page.push(Element::node("nav_settings"));
    page.push(Element::field_input("form_search").with_aria_key("language_selector_aria"));
    page.push(Element::action_input("form_submit"));
    page.push(Element::html_node("footer_note"));
    for lang in Language::ALL {
        page.push(Element::selector(lang.code()));
    }
    page
}

fn render(session: &Session) {
    let page = session.page();
    println!("lang attribute: {}", page.lang_attr().unwrap_or("-"));
    for element in page.elements() {
        if let Some(code) = element.selector_code() {
            let marker = if element.has_class("active") { "*" } else { " " };
            println!("  [{marker}] selector {code}");
        } else if !element.text().is_empty() {
            println!("  text:        {}", element.text());
        } else if !element.html().is_empty() {
            println!("  html:        {}", element.html());
        } else if !element.value().is_empty() {
            println!("  value:       {}", element.value());
        } else if !element.placeholder().is_empty() {
            println!("  placeholder: {}", element.placeholder());
        }
    }
    let resolver = session.resolver();
    let today = chrono::Local::now().date_naive();
    println!("  date:        {}", resolver.format_date(today, DateStyle::Long));
    println!("  number:      {}", resolver.format_number(1234567.89));
}

fn main() -> lingua_weave::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let lang_override: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);

    let catalog = Catalog::embedded()?;
    let mut session = Session::new(
        sample_page(),
        catalog,
        Box::new(FileStore::new()),
        Resolver::system_tag(),
    )
    .with_notifier(Box::new(ConsoleNotifier));

    if let Some(code) = lang_override {
        session.set_language(&code, true);
    }

    render(&session);
    Ok(())
}
