use std::{
    fs,
    io::{stdout, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use simpcalc::{check_source, display_error, logging::init_logging, parse_stream, scan_to_stream};
use tracing::info;

/// Exit status when the recognizer rejects the program.
const EXIT_INVALID: u8 = 65;
/// Exit status when an input can't be read or an output can't be written.
const EXIT_IO: u8 = 74;

/// Scanner and syntax recognizer for the SimpCalc language.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    Scan(Scan),
    Parse(ParseTokens),
    Check(Check),
}

impl Command {
    fn run(self) -> Result<ExitCode> {
        match self {
            Command::Scan(scan) => scan.run(),
            Command::Parse(parse) => parse.run(),
            Command::Check(check) => check.run(),
        }
    }
}

/// Tokenize a SimpCalc source file into the intermediate token stream.
#[derive(Args, Clone, Debug)]
struct Scan {
    /// Source file name.
    input: PathBuf,

    /// Token stream file name (if omitted, the stream is written to stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Scan {
    fn run(self) -> Result<ExitCode> {
        let source = read_input(&self.input)?;
        let stream = scan_to_stream(&source);
        info!(input = %self.input.display(), "scanned");

        write_output(self.output.as_deref(), &stream)?;
        Ok(ExitCode::SUCCESS)
    }
}

/// Recognize a token stream written by `scan`.
#[derive(Args, Clone, Debug)]
struct ParseTokens {
    /// Token stream file name.
    tokens: PathBuf,

    /// Program name used in the success line (defaults to the token stream
    /// file name).
    #[arg(long)]
    name: Option<String>,

    /// Report file name (if omitted, the report is written to stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ParseTokens {
    fn run(self) -> Result<ExitCode> {
        let text = read_input(&self.tokens)?;
        let name = match self.name {
            Some(name) => name,
            None => file_name(&self.tokens),
        };

        let outcome = parse_stream(&text);
        info!(tokens = %self.tokens.display(), valid = outcome.is_valid(), "parsed");

        let mut report = outcome.report(&name).join("\n");
        report.push('\n');
        write_output(self.output.as_deref(), &report)?;

        Ok(exit_code(outcome.is_valid()))
    }
}

/// Scan and recognize a source file in one pass, showing lexical
/// diagnostics against the source.
#[derive(Args, Clone, Debug)]
struct Check {
    /// Source file name.
    input: PathBuf,

    /// Also print the completed nonterminals with their token ranges.
    #[arg(long)]
    derivation: bool,
}

impl Check {
    fn run(self) -> Result<ExitCode> {
        let source = read_input(&self.input)?;
        let name = file_name(&self.input);

        let (diagnostics, outcome) = check_source(&source);
        info!(
            input = %self.input.display(),
            diagnostics = diagnostics.len(),
            valid = outcome.is_valid(),
            "checked"
        );

        for diagnostic in &diagnostics {
            eprintln!("{}\n", display_error(diagnostic, &name, &source));
        }
        if self.derivation {
            for derivation in &outcome.derivations {
                eprintln!(
                    "{:?} [{}, {})",
                    derivation.nonterminal, derivation.start, derivation.end
                );
            }
        }

        let mut report = outcome.report(&name).join("\n");
        report.push('\n');
        write_output(None, &report)?;

        Ok(exit_code(diagnostics.is_empty() && outcome.is_valid()))
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_output(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
        }
        None => stdout()
            .write_all(text.as_bytes())
            .context("failed to write to stdout"),
    }
}

fn file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

fn exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    }
}

fn main() -> ExitCode {
    if let Err(error) = init_logging() {
        eprintln!("{:#}", error);
    }

    match Cli::parse().command.run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{:#}", error);
            ExitCode::from(EXIT_IO)
        }
    }
}
