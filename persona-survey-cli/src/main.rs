use clap::{Parser, ValueEnum};
use log::{info, warn};
use persona_dialoguer::DialoguerFrontend;
use persona_ratatui::RatatuiFrontend;
use persona_survey::{Session, SessionError};

/// Personality Survey - create a short survey, take it, discover your type
#[derive(Parser, Debug)]
#[command(name = "persona-survey")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which interface to run
    #[arg(long, value_enum, env = "PERSONA_SURVEY_FRONTEND", default_value_t = Frontend::Tui)]
    frontend: Frontend,

    /// Title shown at the top of the terminal interface
    #[arg(long, default_value = "Personality Survey")]
    title: String,

    /// Disable colours in the prompt interface
    #[arg(long)]
    plain: bool,

    /// Start from the sample introvert/extrovert survey instead of a blank one
    #[arg(long)]
    sample: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Frontend {
    /// Full-screen terminal UI
    Tui,
    /// Line-by-line prompts
    Prompt,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let session = if cli.sample {
        info!("Loading sample survey '{}'", example_surveys::TITLE);
        example_surveys::introversion_session()
    } else {
        Session::new()
    };

    let result = match cli.frontend {
        Frontend::Tui => session.run_with(&RatatuiFrontend::new().with_title(cli.title)),
        Frontend::Prompt => {
            let frontend = if cli.plain {
                DialoguerFrontend::plain()
            } else {
                DialoguerFrontend::new()
            };
            session.run_with(&frontend)
        }
    };

    match result {
        Ok(session) => {
            info!(
                "Session closed with {} questions authored",
                session.survey().len()
            );
            if let Some(outcome) = session.outcome() {
                println!("{} ({})", outcome.label(), outcome.scorecard);
            }
            Ok(())
        }
        Err(SessionError::Cancelled) => {
            warn!("Session cancelled");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        // The frontend default can come from the environment, so only the other flags are checked.
        let cli = Cli::try_parse_from(["persona-survey"]).unwrap();
        assert_eq!(cli.title, "Personality Survey");
        assert!(!cli.plain);
        assert!(!cli.sample);
    }

    #[test]
    fn frontend_default_is_tui() {
        let frontend = Cli::command()
            .get_arguments()
            .find(|arg| arg.get_id() == "frontend")
            .and_then(|arg| arg.get_default_values().first().cloned());
        assert_eq!(frontend.as_deref().and_then(|v| v.to_str()), Some("tui"));
    }

    #[test]
    fn explicit_frontend_wins() {
        let cli = Cli::try_parse_from(["persona-survey", "--frontend", "tui"]).unwrap();
        assert_eq!(cli.frontend, Frontend::Tui);
    }

    #[test]
    fn prompt_frontend_with_sample() {
        let cli =
            Cli::try_parse_from(["persona-survey", "--frontend", "prompt", "--sample", "--plain"])
                .unwrap();
        assert_eq!(cli.frontend, Frontend::Prompt);
        assert!(cli.sample);
        assert!(cli.plain);
    }

    #[test]
    fn unknown_frontend_is_an_error() {
        assert!(Cli::try_parse_from(["persona-survey", "--frontend", "web"]).is_err());
    }
}
