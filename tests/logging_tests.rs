//! Tests for the debug trace: diagnostics are purely observational and the
//! generator works with or without a subscriber installed.

use daylink::{generate_daily_links, LinkOptions, MemoryVault};
use tracing::Level;

fn fixture() -> MemoryVault {
    MemoryVault::new(
        vec![
            "Journal/2025-07-24.md",
            "Journal/2025-07-25.md",
            "Journal/2025-07-25 ideas.md",
        ],
        Some("Journal/2025-07-25.md"),
    )
}

#[test]
fn test_debug_flag_never_changes_output() {
    let vault = fixture();
    let quiet = generate_daily_links(&vault, &LinkOptions::default());
    let traced = generate_daily_links(
        &vault,
        &LinkOptions {
            debug: true,
            header_level: None,
        },
    );
    assert_eq!(quiet, traced);
}

#[test]
fn test_debug_trace_emits_under_a_subscriber() {
    // The subscriber is the injectable sink; generation must behave the
    // same with one installed and receiving debug-level events.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::sink)
        .finish();

    let vault = fixture();
    let options = LinkOptions {
        debug: true,
        header_level: None,
    };
    let traced = tracing::subscriber::with_default(subscriber, || {
        generate_daily_links(&vault, &options)
    });
    assert_eq!(traced, generate_daily_links(&vault, &options));
}

#[test]
fn test_fallback_paths_also_trace_without_panicking() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::sink)
        .finish();

    let vault = MemoryVault::new(vec!["Journal/2025-07-24.md"], Some("Journal/2025-07-25.md"));
    let options = LinkOptions {
        debug: true,
        header_level: None,
    };
    let text = tracing::subscriber::with_default(subscriber, || {
        generate_daily_links(&vault, &options)
    });
    assert_eq!(text, "Could not find current note in the vault's daily notes.");
}
