// File: ./src/cli.rs
//! Shared command-line interface logic: argument parsing and help text.
use crate::config::{Config, OutputFormat};
use anyhow::Result;
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Help,
    Version,
    Convert(CliArgs),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// `None` reads standard input.
    pub input: Option<PathBuf>,
    pub output: Option<OutputFormat>,
    pub timezone: Option<String>,
    pub include_metadata: bool,
    pub config_path: Option<PathBuf>,
    pub verbose: bool,
}

impl CliArgs {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// Command-line flags win over the config file.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(tz) = &self.timezone {
            config.timezone = Some(tz.clone());
        }
        if self.include_metadata {
            config.include_metadata = true;
        }
    }
}

fn take_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| anyhow::anyhow!("Missing value for '{}'", flag))
}

/// Parse the arguments that follow the binary name.
pub fn parse_args<I>(args: I) -> Result<CliAction>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => return Ok(CliAction::Help),
            "-V" | "--version" => return Ok(CliAction::Version),
            "--json" => parsed.output = Some(OutputFormat::Json),
            "--format" => {
                let value = take_value(&mut args, "--format")?;
                let format = OutputFormat::from_str(&value).map_err(|_| {
                    anyhow::anyhow!("Unknown output format '{}' (expected text or json)", value)
                })?;
                parsed.output = Some(format);
            }
            "--timezone" | "--tz" => parsed.timezone = Some(take_value(&mut args, "--timezone")?),
            "--metadata" => parsed.include_metadata = true,
            "-c" | "--config" => {
                parsed.config_path = Some(PathBuf::from(take_value(&mut args, "--config")?))
            }
            "-v" | "--verbose" => parsed.verbose = true,
            "-" => parsed.input = None,
            flag if flag.starts_with('-') => {
                return Err(anyhow::anyhow!("Unknown option '{}'. See --help.", flag));
            }
            path => {
                if parsed.input.is_some() {
                    return Err(anyhow::anyhow!("Only one input file can be given"));
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(CliAction::Convert(parsed))
}

pub fn print_version(binary_name: &str) {
    println!("{} {}", binary_name, env!("CARGO_PKG_VERSION"));
}

pub fn print_help(binary_name: &str) {
    println!(
        "Icsprose v{} - Turn iCalendar files into prose for language models",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] [FILE]", binary_name);
    println!("    {} < calendar.ics", binary_name);
    println!();
    println!("ARGS:");
    println!("    <FILE>                  ICS file to read. Omit or use '-' for stdin.");
    println!();
    println!("OPTIONS:");
    println!("    --json                  Print the event list as JSON.");
    println!("    --format <text|json>    Choose the output format explicitly.");
    println!("    --timezone <TZ>         IANA zone for times without a trailing Z (default UTC).");
    println!("    --metadata              Also show created, last-modified and other properties.");
    println!("    -c, --config <path>     Use a specific config file.");
    println!("    -v, --verbose           Debug logging on stderr.");
    println!("    -V, --version           Show the version.");
    println!("    -h, --help              Show this help message.");
    println!();
    println!("CONFIG FILE (config.toml):");
    println!("    timezone = \"Europe/Paris\"");
    println!("    include_metadata = false");
    println!("    output = \"text\"");
    println!();
    println!("EXAMPLES:");
    println!("    {} meeting.ics", binary_name);
    println!("    {} --timezone America/New_York invite.ics", binary_name);
    println!("    curl -s https://example.com/team.ics | {} --json", binary_name);
    println!();
    println!("ENVIRONMENT:");
    println!("    ICSPROSE_CONFIG_DIR     Directory holding config.toml.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flags_after_file() {
        let action = parse_args(args(&["cal.ics", "--json", "-v"])).unwrap();
        let CliAction::Convert(parsed) = action else {
            panic!("expected a conversion");
        };
        assert_eq!(parsed.input, Some(PathBuf::from("cal.ics")));
        assert_eq!(parsed.output, Some(OutputFormat::Json));
        assert_eq!(parsed.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_missing_value_is_error() {
        assert!(parse_args(args(&["--timezone"])).is_err());
        assert!(parse_args(args(&["--format", "yaml"])).is_err());
    }
}
