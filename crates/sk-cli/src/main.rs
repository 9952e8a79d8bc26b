use anyhow::Context;
use clap::Parser;
use sk_core::errors::PurgeError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod reporter;
mod ui;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("sk error: {error:#}");
        for hint in hint_lines(&error) {
            eprintln!("{hint}");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    let config = bootstrap::load_config(&flags).context("failed to bootstrap shopkeep")?;
    commands::dispatch::dispatch(cli.command, &config, &flags).await
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("SK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_level(flags)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Filter used when `SK_LOG` is unset.
const fn default_log_level(flags: &cli::GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Follow-up lines printed under an error, e.g. a usage example.
fn hint_lines(error: &anyhow::Error) -> &'static [&'static str] {
    error
        .downcast_ref::<PurgeError>()
        .map(PurgeError::hint_lines)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse_flags(args: &[&str]) -> cli::GlobalFlags {
        cli::Cli::try_parse_from(args)
            .expect("cli should parse")
            .global_flags()
    }

    #[test]
    fn log_level_follows_quiet_and_verbose() {
        assert_eq!(default_log_level(&parse_flags(&["sk", "logs", "count"])), "warn");
        assert_eq!(
            default_log_level(&parse_flags(&["sk", "--verbose", "logs", "count"])),
            "debug"
        );
        assert_eq!(
            default_log_level(&parse_flags(&["sk", "logs", "count", "--quiet"])),
            "error"
        );
    }

    #[test]
    fn missing_type_error_carries_usage_hint() {
        let error = anyhow::Error::from(PurgeError::MissingLogType);
        assert_eq!(format!("{error:#}"), "Please specify a type");
        assert_eq!(
            hint_lines(&error),
            &[
                "Example: To remove api request logs",
                "sk logs prune --type=api_request",
            ]
        );
    }

    #[test]
    fn other_errors_have_no_hints() {
        let error = anyhow::anyhow!("failed to open content store");
        assert!(hint_lines(&error).is_empty());

        let error = anyhow::Error::from(PurgeError::UnknownLogType {
            slug: "bogus".into(),
        });
        assert_eq!(error.to_string(), "Invalid log type provided: bogus");
        assert!(hint_lines(&error).is_empty());
    }
}
