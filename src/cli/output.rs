use crate::case::CaseStyle;
use crate::RunResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonConversion {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    style: String,
    converted: usize,
    failed: usize,
    conversions: Vec<JsonConversion>,
}

pub fn print_results(
    result: &RunResult,
    style: CaseStyle,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_results(result, colored_output),
        OutputFormat::Json => print_json_results(result, style),
    }
}

/// One line per input: the converted value on success, a diagnostic on
/// stderr on failure so piped output stays clean.
fn print_text_results(result: &RunResult, colored_output: bool) {
    for conversion in &result.conversions {
        match (&conversion.output, &conversion.error) {
            (Some(output), _) => println!("{}", output),
            (None, Some(error)) => {
                if colored_output {
                    eprintln!(
                        "{} {}: {}",
                        "✗".red().bold(),
                        conversion.input.red().bold(),
                        error
                    );
                } else {
                    eprintln!("✗ {}: {}", conversion.input, error);
                }
            }
            (None, None) => {}
        }
    }
}

fn print_json_results(result: &RunResult, style: CaseStyle) {
    let conversions: Vec<JsonConversion> = result
        .conversions
        .iter()
        .map(|c| JsonConversion {
            input: c.input.clone(),
            output: c.output.clone(),
            error: c.error.clone(),
        })
        .collect();

    let output = JsonOutput {
        style: style.to_string(),
        converted: result.converted_count,
        failed: result.failed_count,
        conversions,
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize output: {}", e),
    }
}

pub fn print_summary(result: &RunResult, colored: bool) {
    if result.failed_count == 0 {
        return;
    }

    let error_word = if result.failed_count == 1 {
        "input"
    } else {
        "inputs"
    };
    if colored {
        eprintln!(
            "{} {} {} could not be converted",
            "✗".red().bold(),
            result.failed_count.to_string().red().bold(),
            error_word
        );
    } else {
        eprintln!("✗ {} {} could not be converted", result.failed_count, error_word);
    }
}
