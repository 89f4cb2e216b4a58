//! Walk through a small pre-authored survey with dialoguer prompts.
//!
//! Run with: cargo run -p persona-dialoguer --example weekend

use example_surveys::weekend_script;
use persona_dialoguer::DialoguerFrontend;
use persona_survey::Session;

fn main() -> anyhow::Result<()> {
    let session = weekend_script()
        .into_iter()
        .fold(Session::new(), Session::reduce);

    let session = session.run_with(&DialoguerFrontend::new())?;

    println!("\n=== Done ===");
    println!("{} questions authored", session.survey().len());

    Ok(())
}
