mod ui;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use clap::Parser;
use log::{error, info, warn};
use r_sha256::files::{hash_directory, hash_file};
use r_sha256::logger::{self, HashLogger};
use r_sha256::{digest, digests_match, Digest, HashError, DIGEST_LEN};
use crate::ui::*;

const PROMPT: &str = "Enter some text to be hashed:  ";

#[derive(Parser, Debug)]
#[command(version, about = "Compute SHA-256 digests")]
struct Cli {
    /// Text to hash (UTF-8 bytes); prompts on stdin when nothing else is given
    text: Vec<String>,

    /// Hash the contents of a file
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Hash every file below a directory
    #[arg(short, long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Compare the digest of a single input against this hex value
    #[arg(short, long, value_name = "HEX")]
    check: Option<String>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logged = match &cli.log_file {
        Some(path) => HashLogger::init(cli.verbose, path),
        None => logger::init_stderr(cli.verbose),
    };
    if let Err(e) = logged {
        eprintln!("Logger setup failed: {}", e);
    }

    info!("Starting application (verbose: {})", cli.verbose);

    let code = match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("Application error: {}", e);
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    };

    info!("Application shutdown");
    code
}

/// A digest together with how it is shown on stdout and how it is named in
/// the log. Message text only ever appears in `shown`.
struct Hashed {
    shown: String,
    logged: String,
    digest: Digest,
}

fn hash_text(index: usize, text: &str) -> Result<Hashed, HashError> {
    Ok(Hashed {
        shown: format!("\"{}\"", text),
        logged: format!("text argument #{} ({} bytes)", index + 1, text.len()),
        digest: digest(text.as_bytes())?,
    })
}

fn hash_path(path: &Path) -> Result<Hashed, HashError> {
    let label = path.display().to_string();
    Ok(Hashed {
        shown: label.clone(),
        logged: label,
        digest: hash_file(path)?,
    })
}

/// Returns `Ok(false)` only when a `--check` comparison fails.
fn run(cli: &Cli) -> Result<bool, HashError> {
    let expected = cli.check.as_deref().map(parse_expected).transpose()?;

    if let Some(root) = &cli.dir {
        if expected.is_some() {
            return Err(HashError::InvalidInput("--check cannot be combined with --dir".to_string()));
        }
        for (path, d) in hash_directory(root)? {
            print_digest(&d, &path.display().to_string());
        }
        if cli.text.is_empty() && cli.files.is_empty() {
            return Ok(true);
        }
    }

    let mut results = Vec::new();
    for (i, text) in cli.text.iter().enumerate() {
        results.push(hash_text(i, text)?);
    }
    for path in &cli.files {
        results.push(hash_path(path)?);
    }

    if results.is_empty() && cli.dir.is_none() {
        let message = read_input(PROMPT)?;
        let hashed = Hashed {
            shown: "input".to_string(),
            logged: format!("interactive input ({} bytes)", message.len()),
            digest: digest(message.as_bytes())?,
        };
        info!("Hashed {}", hashed.logged);
        match &expected {
            Some(exp) => return Ok(report_check(&hashed, exp)),
            None => print_interactive(&message, &hashed.digest),
        }
        return Ok(true);
    }

    match expected {
        Some(exp) => {
            if results.len() != 1 {
                return Err(HashError::InvalidInput(format!(
                    "--check needs exactly one input, got {}", results.len()
                )));
            }
            Ok(report_check(&results[0], &exp))
        }
        None => {
            for hashed in &results {
                print_digest(&hashed.digest, &hashed.shown);
            }
            Ok(true)
        }
    }
}

fn parse_expected(hex_digest: &str) -> Result<Digest, HashError> {
    let bytes = hex::decode(hex_digest.trim())?;
    Digest::try_from(bytes.as_slice()).map_err(|_| {
        HashError::InvalidDigest(format!(
            "expected {} bytes, got {}", DIGEST_LEN, bytes.len()
        ))
    })
}

fn report_check(hashed: &Hashed, expected: &Digest) -> bool {
    if digests_match(&hashed.digest, expected) {
        info!("Digest check passed for {}", hashed.logged);
        print_success(&format!("{}: OK", hashed.shown));
        true
    } else {
        warn!("Digest check failed for {}", hashed.logged);
        print_error(&format!("{}: FAILED", hashed.shown));
        false
    }
}
