use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::OutputFormat;
use recase::{cli, CaseStyle, Config, Conversion, Formatter, Policy, RunResult};
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Normalize identifiers into canonical case styles", long_about = None)]
struct Cli {
    /// Identifier strings to convert (reads lines from stdin when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case style (camel, kebab, snake, dot)
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Fail on malformed input instead of emitting an empty string
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// Emit an empty string for malformed input instead of failing
    #[arg(long)]
    lenient: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if conversions fail
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let cli_policy = if cli.strict {
        Some(Policy::Strict)
    } else if cli.lenient {
        Some(Policy::Lenient)
    } else {
        None
    };
    let config = Config::load(cli.style, cli_policy)?;

    // Collect inputs: positional args, or stdin lines when none were given
    let inputs = if cli.inputs.is_empty() || cli.inputs == ["-"] {
        read_stdin_lines()?
    } else {
        cli.inputs.clone()
    };

    if inputs.is_empty() {
        anyhow::bail!("No inputs provided. Use --help for usage information.");
    }

    let formatter = match config.policy {
        Some(policy) => Formatter::with_policy(config.style, policy),
        None => Formatter::new(config.style),
    };

    // Convert inputs
    let mut result = RunResult::default();
    for input in inputs {
        match formatter.format(&input) {
            Ok(output) => {
                result.converted_count += 1;
                result.conversions.push(Conversion {
                    input,
                    output: Some(output),
                    error: None,
                });
            }
            Err(e) => {
                result.failed_count += 1;
                result.conversions.push(Conversion {
                    input,
                    output: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    cli::output::print_results(&result, config.style, !cli.no_color, &cli.format);
    if matches!(cli.format, OutputFormat::Text) {
        cli::output::print_summary(&result, !cli.no_color);
    }

    // Exit with appropriate code
    if result.failed_count > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
