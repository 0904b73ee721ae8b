use std::io::{self, Write};
use std::process::ExitCode;

use args::Args;
use clap::Parser;
use dictionary::{Dictionary, DictionaryError};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
mod format;

// sysexits.h
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_IOERR: u8 = 74;

#[derive(Debug, thiserror::Error)]
enum DefineError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl DefineError {
    fn exit_code(&self) -> u8 {
        match self {
            DefineError::Dictionary(DictionaryError::Fetch(_)) => EX_IOERR,
            DefineError::Dictionary(
                DictionaryError::Deserialize(_) | DictionaryError::EmptyResponse,
            ) => EX_DATAERR,
            DefineError::Dictionary(
                DictionaryError::InvalidBaseUrl(_) | DictionaryError::UnaddressableWord(_),
            ) => EX_USAGE,
            DefineError::Output(_) => EX_IOERR,
        }
    }

    fn diagnostic(&self) -> String {
        match self {
            DefineError::Dictionary(DictionaryError::Fetch(error)) => {
                format!("API request failed: {error}")
            }
            DefineError::Dictionary(
                error @ (DictionaryError::Deserialize(_) | DictionaryError::EmptyResponse),
            ) => format!("JSON parse error: {error}"),
            other => other.to_string(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            return ExitCode::from(parse_exit_code(&error));
        }
    };
    init_tracing(args.verbose);

    match run(&args, &mut io::stdout().lock()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error.diagnostic());
            ExitCode::from(error.exit_code())
        }
    }
}

/// `--help` and `--version` arrive as clap errors too, printed on stdout.
fn parse_exit_code(error: &clap::Error) -> u8 {
    if error.use_stderr() {
        EX_USAGE
    } else {
        0
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Defines each word in turn. The first failure ends the run, later words are never looked up.
async fn run(args: &Args, out: &mut impl Write) -> Result<(), DefineError> {
    let dict = Dictionary::with_base_url(args.api_url.clone())?.accept_not_found(!args.strict);
    let style = args.style.into();
    for word in &args.words {
        debug!(%word, "defining");
        let lookup = dict.lookup(word).await?;
        writeln!(out, "{}", format::render(word, &lookup, style))?;
        out.flush()?;
    }
    Ok(())
}
