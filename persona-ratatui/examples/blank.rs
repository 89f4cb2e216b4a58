//! Start from an empty survey in the terminal frontend.
//!
//! Run with: cargo run -p persona-ratatui --example blank

use persona_ratatui::RatatuiFrontend;
use persona_survey::Session;

fn main() -> anyhow::Result<()> {
    let frontend = RatatuiFrontend::new();
    let session = Session::new().run_with(&frontend)?;

    println!("\n=== Session Closed ===");
    println!("Title: {}", session.survey().title);
    println!("Questions: {}", session.survey().len());
    if let Some(outcome) = session.outcome() {
        println!("Last result: {} ({})", outcome.label(), outcome.scorecard);
    }

    Ok(())
}
