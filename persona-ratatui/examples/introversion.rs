//! Take the sample introvert/extrovert survey in the terminal frontend.
//!
//! Run with: cargo run -p persona-ratatui --example introversion

use example_surveys::introversion_session;
use persona_ratatui::{RatatuiFrontend, Theme};
use ratatui::style::Color;

fn main() -> anyhow::Result<()> {
    let theme = Theme {
        primary: Color::Cyan,
        ..Theme::default()
    };
    let frontend = RatatuiFrontend::new()
        .with_title("Introvert vs Extrovert")
        .with_theme(theme);

    let session = introversion_session().run_with(&frontend)?;

    match session.outcome() {
        Some(outcome) => {
            println!("\n=== {} ===", outcome.label());
            println!("{}", outcome.description());
            println!("Your Score: {}", outcome.scorecard);
        }
        None => println!("\nNo result this time."),
    }

    Ok(())
}
