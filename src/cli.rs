use crate::config::Settings;
use crate::error::ConfigError;
use crate::logging;
use clap::Args;
use std::path::PathBuf;

/// Flags shared by every demo binary.
#[derive(Args, Debug, Clone, Default)]
pub struct DemoArgs {
    /// Path to a TOML settings file
    #[arg(short, long, global = true, env = "COFFEE_PATTERNS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Loads settings and installs logging; every binary calls this first.
pub fn bootstrap(args: &DemoArgs) -> Result<Settings, ConfigError> {
    let settings = Settings::load(args.config.as_deref())?;
    logging::init(args.verbose, &settings.logging.level);
    tracing::debug!(config = ?args.config, "settings loaded");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: DemoArgs,
    }

    #[test]
    fn test_parse_shared_flags() {
        let cli = TestCli::parse_from(["demo", "--verbose", "--config", "patterns.toml"]);
        assert!(cli.common.verbose);
        assert_eq!(cli.common.config, Some(PathBuf::from("patterns.toml")));
    }

    #[test]
    fn test_bootstrap_with_defaults() {
        let settings = bootstrap(&DemoArgs::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }
}
