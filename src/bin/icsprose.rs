use anyhow::{Context, Result};
use icsprose::cli::{self, CliAction, CliArgs};
use icsprose::config::{Config, OutputFormat};
use icsprose::paths::AppPaths;
use icsprose::{convert_ics_bytes, convert_ics_bytes_to_json};
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;
use std::fs;
use std::io::{self, Read};

const BINARY_NAME: &str = "icsprose";

fn main() -> Result<()> {
    let args = match cli::parse_args(env::args().skip(1))? {
        CliAction::Help => {
            cli::print_help(BINARY_NAME);
            return Ok(());
        }
        CliAction::Version => {
            cli::print_version(BINARY_NAME);
            return Ok(());
        }
        CliAction::Convert(args) => args,
    };

    // Logs go to stderr so stdout stays clean for piping into prompts.
    let _ = TermLogger::init(
        args.log_level(),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let config = load_config(&args)?;
    let options = config.format_options()?;
    let input = read_input(&args)?;

    let output = match config.output {
        OutputFormat::Text => convert_ics_bytes(&input, &options),
        OutputFormat::Json => convert_ics_bytes_to_json(&input, &options),
    };
    println!("{}", output);
    Ok(())
}

fn load_config(args: &CliArgs) -> Result<Config> {
    let mut config = match &args.config_path {
        // An explicitly named file has to exist.
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&AppPaths::get_config_file_path()?)?,
    };
    args.apply_to(&mut config);
    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

fn read_input(args: &CliArgs) -> Result<Vec<u8>> {
    match &args.input {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read standard input")?;
            Ok(buf)
        }
    }
}
