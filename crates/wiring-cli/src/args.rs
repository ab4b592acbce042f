//! Command-line argument definitions for the wiring CLI.
//!
//! Every argument is optional: with none, the gateway diagram is written to
//! `gateway_diagram.png` in the current directory.

use clap::Parser;

use wiring::gateway::DEFAULT_OUTPUT;

/// Command-line arguments for the wiring diagram renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file; the extension (`.png` or `.svg`) selects the format
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["wiring"]).unwrap();
        assert_eq!(args.output, "gateway_diagram.png");
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::try_parse_from([
            "wiring",
            "-o",
            "out.svg",
            "--config",
            "wiring.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.config.as_deref(), Some("wiring.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_args_reject_positional() {
        assert!(Args::try_parse_from(["wiring", "input.fil"]).is_err());
    }
}
