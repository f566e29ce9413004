//! # Terminal Host
//!
//! Replays a key script (or stdin lines) through one session and prints the
//! resulting transcript.

use std::env;
use std::fs;
use std::io::{self, BufRead};
use std::process;

use termhost::{HostConfig, HostError, InputScript, Session, SessionStatus};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parsed command-line options
#[derive(Debug, Default)]
struct Options {
    config_path: Option<String>,
    script_path: Option<String>,
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(&args[0]);
        process::exit(1);
    });

    if let Err(e) = run(options) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --config".to_string());
                }
                options.config_path = Some(args[i].clone());
            }
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                options.script_path = Some(args[i].clone());
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn run(options: Options) -> Result<(), HostError> {
    let config = match &options.config_path {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };

    let script = match &options.script_path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| HostError::Io {
                path: path.clone(),
                source,
            })?;
            let script = InputScript::from_text(&text)?;
            info!(target: "script", path = %path, events = script.remaining(), "script loaded");
            script
        }
        None => {
            let lines = io::stdin()
                .lock()
                .lines()
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| HostError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            InputScript::from_typed_lines(lines)
        }
    };

    let mut session = Session::with_transcript(config);
    let status = session.replay(script);

    print!("{}", session.display());
    match status {
        SessionStatus::Exited { location } => {
            info!(target: "session", %location, "navigating away");
        }
        _ => println!("{}", session.prompt_line()),
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>      JSON host configuration");
    eprintln!("  -s, --script <FILE>      Key script to replay (default: type stdin lines)");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --script termhost/scripts/tour.keys", program);
    eprintln!("  echo 'ls -lF' | {}", program);
}
