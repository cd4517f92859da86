//! Interactive language preview.
//!
//! Builds a sample of the dashboard's screens as an in-memory page, wires a
//! language manager to the real preference file, and takes commands on
//! stdin. Lets you watch the full language switch (metadata, facets,
//! toggle label) without a browser in front of the dashboard.
//!
//! Commands: `toggle` (`t`), `show` (`s`), `metrics` (`m`), `quit` (`q`).

use std::io::BufRead;

use anyhow::Result;
use tracing::{error, info, warn};

use dashboard_i18n::{
    config::Config, Dictionary, DictionaryValidator, Element, FilePreferenceStore,
    LanguageManager, LanguageMetrics, Page,
};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dashboard_i18n=info".parse()?),
        )
        .init();

    info!("Starting dashboard language preview");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Audit the dictionary before putting it on screen
    if config.audit_on_start {
        let report = DictionaryValidator::validate(Dictionary::global());
        for warning in &report.warnings {
            warn!("Dictionary audit: {}", warning);
        }
        for problem in &report.errors {
            error!("Dictionary audit: {}", problem);
        }
        if report.is_clean() {
            info!("Dictionary audit clean");
        }
    }

    // Build the demo page and initialize the manager against it
    let mut page = demo_page();
    let store = FilePreferenceStore::new(config.preference_path.clone());
    info!("Preference file: {}", store.path().display());
    let mut manager = LanguageManager::initialize(Box::new(store), config.default_language, &mut page);

    print_page(&page);
    print_help();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "toggle" | "t" => {
                manager.toggle(&mut page);
                print_page(&page);
            }
            "show" | "s" => print_page(&page),
            "metrics" | "m" => {
                let report = LanguageMetrics::global().report();
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            "quit" | "q" => break,
            "" => {}
            other => {
                println!("Unknown command: '{}'", other);
                print_help();
            }
        }
    }

    info!("Exiting, language preference persisted");
    Ok(())
}

/// A cross-section of the dashboard's screens: login form, dashboard
/// headers, a tooltip-carrying button.
fn demo_page() -> Page {
    let mut page = Page::new();

    page.add_element(
        "login-title",
        Element {
            text_key: Some("login_title".to_string()),
            ..Element::default()
        },
    );
    page.add_element(
        "login-subtitle",
        Element {
            text_key: Some("login_subtitle".to_string()),
            ..Element::default()
        },
    );
    page.add_element(
        "username-input",
        Element {
            is_text_input: true,
            placeholder_key: Some("username".to_string()),
            ..Element::default()
        },
    );
    page.add_element(
        "password-input",
        Element {
            is_text_input: true,
            placeholder_key: Some("password".to_string()),
            ..Element::default()
        },
    );
    page.add_element(
        "login-btn",
        Element {
            text_key: Some("login_button".to_string()),
            ..Element::default()
        },
    );
    page.add_element(
        "back-link",
        Element {
            text_key: Some("back_to_home".to_string()),
            ..Element::default()
        },
    );
    page.add_element(
        "dashboard-title",
        Element {
            text_key: Some("dashboard_title".to_string()),
            ..Element::default()
        },
    );
    page.add_element(
        "system-status",
        Element {
            text_key: Some("system_status".to_string()),
            ..Element::default()
        },
    );
    page.add_element(
        "refresh-btn",
        Element {
            text_key: Some("refresh".to_string()),
            title_key: Some("refresh".to_string()),
            ..Element::default()
        },
    );

    page
}

fn print_page(page: &Page) {
    let lang = page
        .document_language()
        .map(|l| l.code())
        .unwrap_or("unset");
    let dir = page
        .document_direction()
        .map(|d| d.as_str())
        .unwrap_or("unset");

    println!();
    println!("document: lang={} dir={}", lang, dir);
    println!("toggle:   [{}]", page.toggle_label().unwrap_or("-"));
    for (id, element) in page.elements() {
        if id == dashboard_i18n::TOGGLE_CONTROL_ID {
            continue;
        }
        let mut facets = Vec::new();
        if let Some(text) = &element.text {
            facets.push(format!("text=\"{}\"", text));
        }
        if let Some(placeholder) = &element.placeholder {
            facets.push(format!("placeholder=\"{}\"", placeholder));
        }
        if let Some(title) = &element.title {
            facets.push(format!("title=\"{}\"", title));
        }
        if facets.is_empty() {
            continue;
        }
        println!("  {:<16} {}", id, facets.join(" "));
    }
    println!();
}

fn print_help() {
    println!("commands: toggle (t) | show (s) | metrics (m) | quit (q)");
}
