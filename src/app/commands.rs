use crate::config::OutputFormat;
use crate::core::rfc3339::rfc3339_to_system_time_in_milliseconds;
use crate::domain::ports::Clock;
use crate::utils::error::{ParseFailure, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct NowOutput {
    seconds: i64,
    nanoseconds: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    rfc3339: Option<String>,
}

#[derive(Debug, Serialize)]
struct ParseOutput<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    milliseconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub output: String,
    pub parsed: usize,
    pub failures: usize,
}

pub fn render_now(clock: &dyn Clock, format: OutputFormat) -> Result<String> {
    let pair = clock.system_time();
    tracing::debug!("Clock read: {:?}", pair);

    match format {
        OutputFormat::Text => Ok(format!("{} {}", pair.seconds, pair.nanoseconds)),
        OutputFormat::Json => Ok(serde_json::to_string(&NowOutput {
            seconds: pair.seconds,
            nanoseconds: pair.nanoseconds,
            rfc3339: pair.to_rfc3339(),
        })?),
    }
}

/// One output line per input, in input order.
pub fn render_parse(inputs: &[String], format: OutputFormat) -> Result<ParseReport> {
    let mut lines = Vec::with_capacity(inputs.len());
    let mut failures = 0;

    for input in inputs {
        let result = rfc3339_to_system_time_in_milliseconds(input);
        if result.is_err() {
            failures += 1;
        }
        lines.push(render_parse_line(input, result, format)?);
    }

    tracing::debug!(
        "Parsed {} timestamps ({} failed)",
        inputs.len() - failures,
        failures
    );

    Ok(ParseReport {
        output: lines.join("\n"),
        parsed: inputs.len() - failures,
        failures,
    })
}

fn render_parse_line(
    input: &str,
    result: std::result::Result<i64, ParseFailure>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match result {
            Ok(millis) => format!("{}\t{}", input, millis),
            Err(_) => format!("{}\terror", input),
        }),
        OutputFormat::Json => {
            let output = match result {
                Ok(millis) => ParseOutput {
                    input,
                    milliseconds: Some(millis),
                    error: None,
                },
                Err(e) => ParseOutput {
                    input,
                    milliseconds: None,
                    error: Some(e.to_string()),
                },
            };
            Ok(serde_json::to_string(&output)?)
        }
    }
}
