use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use ring_codec::{Decoded, ExchangeDeserializer, LIMITS_STANDARD, LIMITS_UNBOUNDED};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct RingReport<'a> {
    source: String,
    decoded: &'a Decoded,
    unresolved_orders: Vec<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut input: Option<PathBuf> = None;
    let mut standard = env::var("RING_REPORT_STANDARD")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--standard" => standard = true,
            "-" => input = None,
            _ => input = Some(PathBuf::from(arg)),
        }
    }

    let (source, hex) = match read_input(input.as_ref()) {
        Ok(read) => read,
        Err(err) => {
            eprintln!("failed to read submission: {err}");
            return ExitCode::FAILURE;
        }
    };

    let limits = if standard {
        LIMITS_STANDARD
    } else {
        LIMITS_UNBOUNDED
    };
    let decoded = match ExchangeDeserializer::new(limits).deserialize_hex(&hex) {
        Ok(decoded) => decoded,
        Err(err) => {
            eprintln!("{source}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let report = RingReport {
        source,
        unresolved_orders: decoded
            .orders
            .iter()
            .enumerate()
            .filter(|(_, order)| order.buy_token().is_none())
            .map(|(index, _)| index)
            .collect(),
        decoded: &decoded,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to render report: {err}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(path: Option<&PathBuf>) -> io::Result<(String, String)> {
    match path {
        Some(path) => Ok((path.display().to_string(), fs::read_to_string(path)?)),
        None => {
            let mut hex = String::new();
            io::stdin().read_to_string(&mut hex)?;
            Ok(("<stdin>".to_string(), hex))
        }
    }
}
