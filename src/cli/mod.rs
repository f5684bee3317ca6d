//! CLI definition

use std::path::PathBuf;

use clap::Parser;

/// Move findings marked "False Positive" into their reviewed disposition
/// statuses on a Code Dx server
#[derive(Parser, Debug)]
#[command(name = "fpsync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, short, env = "FPSYNC_CONFIG", hide_env = true)]
    pub config: PathBuf,

    /// Display name of the project to modify
    #[arg(long, short, value_name = "NAME")]
    pub proj: String,

    /// Enable debug logging
    #[arg(long, env = "FPSYNC_DEBUG", hide_env = true)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from(["fpsync", "--config", "fp.yaml", "--proj", "Demo"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("fp.yaml"));
        assert_eq!(cli.proj, "Demo");
        assert!(!cli.debug);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["fpsync", "-c", "fp.yaml", "-p", "Demo", "--debug"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("fp.yaml"));
        assert_eq!(cli.proj, "Demo");
        assert!(cli.debug);
    }

    #[test]
    fn test_project_is_required() {
        assert!(Cli::try_parse_from(["fpsync", "--config", "fp.yaml"]).is_err());
    }

    #[test]
    fn test_config_is_required() {
        assert!(Cli::try_parse_from(["fpsync", "--proj", "Demo"]).is_err());
    }
}
