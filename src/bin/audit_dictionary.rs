//! Dictionary audit binary - checks the bilingual tables and prints a report
//!
//! Usage:
//!   cargo run --bin audit        # Print statistics and the validation report
//!
//! Exits nonzero when the report contains errors, so it can gate CI.

use dashboard_i18n::{Dictionary, DictionaryValidator, Language};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dictionary = Dictionary::global();

    println!("Dictionary audit");
    println!("================");
    for language in Language::ALL {
        println!(
            "{:<8} {:>4} keys ({}, {})",
            language.name(),
            dictionary.key_count(language),
            language.code(),
            language.direction().as_str()
        );
    }
    println!();

    let report = DictionaryValidator::validate(dictionary);

    if report.is_clean() {
        println!("✅ No problems found");
        return;
    }

    for warning in &report.warnings {
        println!("⚠️  {}", warning);
    }
    for error in &report.errors {
        println!("❌ {}", error);
    }
    println!();
    println!(
        "{} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );

    if report.has_errors() {
        std::process::exit(1);
    }
}
