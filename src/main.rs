use std::fs::{self, File};
use std::io::{self, stdout, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{info, span, Level};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use nwalign::aligner::matrix::DpMatrix;
use nwalign::aligner::scoring::{BasicScoring, ParagraphSentenceScoring, ScoringStrategy, TextElement};
use nwalign::aligner::traceback::Direction;
use nwalign::aligner::{Alignment, MatrixKind, NeedlemanWunschAligner};
use nwalign::errors::NwError;
use nwalign::io::{load_outline, load_tokens, Tokenization};

/// The output formats supported by nwalign
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputType {
    /// Two column rendering of the alignment
    Text,

    /// Alignment as JSON, including the matrices if requested
    Json,
}

/// How to split input files into sequence elements
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TokenMode {
    /// Every character is an element
    Chars,

    /// Whitespace separated words
    Words,

    /// Every line is an element
    Lines,
}

impl From<TokenMode> for Tokenization {
    fn from(value: TokenMode) -> Self {
        match value {
            TokenMode::Chars => Tokenization::Chars,
            TokenMode::Words => Tokenization::Words,
            TokenMode::Lines => Tokenization::Lines,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum MatrixOutput {
    /// The score matrix
    Score,

    /// The traceback matrix
    Traceback,
}

impl From<MatrixOutput> for MatrixKind {
    fn from(value: MatrixOutput) -> Self {
        match value {
            MatrixOutput::Score => MatrixKind::Score,
            MatrixOutput::Traceback => MatrixKind::Traceback,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct CliArgs {
    /// Set verbosity level. Use multiple times to increase the verbosity level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<NwSubcommand>,
}

#[derive(Subcommand, Debug)]
enum NwSubcommand {
    /// Globally align the contents of two text files
    Align(AlignArgs),

    /// Align two outlines of paragraphs and sentences
    Outline(OutlineArgs),
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output filename. If not given, defaults to stdout
    #[arg(short, long)]
    #[clap(help_heading = "Outputs")]
    output: Option<PathBuf>,

    /// Output file type.
    #[arg(value_enum, short = 'O', long, default_value = "text")]
    #[clap(help_heading = "Outputs")]
    output_type: OutputType,

    /// Maximum width of each column when printing the alignment
    #[arg(short = 'w', long, default_value_t = 20)]
    #[clap(help_heading = "Outputs")]
    col_width: usize,

    /// Also output the score or traceback matrix
    #[arg(value_enum, long)]
    #[clap(help_heading = "Outputs")]
    show_matrix: Option<MatrixOutput>,

    /// Width of each matrix cell
    #[arg(long, default_value_t = 3)]
    #[clap(help_heading = "Outputs")]
    matrix_width: usize,
}

#[derive(Args, Debug)]
struct AlignArgs {
    /// Text file drawn along the rows of the alignment matrix. Files ending in .gz are decompressed.
    #[clap(help_heading = "Inputs")]
    left: PathBuf,

    /// Text file drawn along the columns of the alignment matrix
    #[clap(help_heading = "Inputs")]
    top: PathBuf,

    /// How to split the input files into sequence elements
    #[arg(value_enum, short = 't', long, default_value = "chars")]
    #[clap(help_heading = "Inputs")]
    tokens: TokenMode,

    /// Score for two equal elements
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    match_score: i32,

    /// Score for two different elements
    #[arg(long, default_value_t = -3, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    mismatch_score: i32,

    /// Score added for every element aligned to a gap
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    #[clap(help_heading = "Alignment configuration")]
    gap_penalty: i32,

    #[command(flatten)]
    output_args: OutputArgs,
}

#[derive(Args, Debug)]
struct OutlineArgs {
    /// Outline file drawn along the rows of the alignment matrix
    #[clap(help_heading = "Inputs")]
    left: PathBuf,

    /// Outline file drawn along the columns of the alignment matrix
    #[clap(help_heading = "Inputs")]
    top: PathBuf,

    #[command(flatten)]
    output_args: OutputArgs,
}

#[derive(Serialize)]
struct JsonOutput<'a, E, S> {
    #[serde(flatten)]
    alignment: &'a Alignment<E, S>,

    #[serde(skip_serializing_if = "Option::is_none")]
    score_matrix: Option<&'a DpMatrix<S>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    traceback_matrix: Option<&'a DpMatrix<Direction>>,
}

/// Build the tracing subscriber with stderr logging. `RUST_LOG` takes precedence over the
/// verbosity flag.
fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(filter_layer);

    tracing_subscriber::registry().with(stderr_log).init();

    Ok(())
}

fn create_writer(output: &Option<PathBuf>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if let Some(path) = output {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?
        }

        let file = File::create(path)
            .with_context(|| format!("Could not create output file {path:?}"))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(stdout())
    };

    Ok(writer)
}

fn write_alignment<E, C, F>(
    aligner: &mut NeedlemanWunschAligner<E, C>,
    args: &OutputArgs,
    display: F,
) -> Result<()>
where
    E: Clone + PartialEq + Serialize,
    C: ScoringStrategy<E>,
    C::Score: Serialize,
    F: Fn(&E) -> String,
{
    let mut writer = create_writer(&args.output)?;

    match args.output_type {
        OutputType::Text => {
            if let Some(matrix) = args.show_matrix {
                let rendered = aligner.inspect_matrix(matrix.into(), args.matrix_width, &display)?;
                writeln!(writer, "{rendered}")?;
            }

            let rendered = aligner.inspect_alignment(args.col_width, &display)?;
            writeln!(writer, "{rendered}")?;
        },
        OutputType::Json => {
            aligner.optimal_alignment()?;

            let output = JsonOutput {
                alignment: aligner.alignment().context("Alignment was not computed")?,
                score_matrix: aligner.score_matrix()
                    .filter(|_| args.show_matrix == Some(MatrixOutput::Score)),
                traceback_matrix: aligner.traceback_matrix()
                    .filter(|_| args.show_matrix == Some(MatrixOutput::Traceback)),
            };

            serde_json::to_writer_pretty(&mut writer, &output)?;
            writeln!(writer)?;
        }
    }

    if let Some(aln) = aligner.alignment() {
        info!("Done. Alignment score: {}, length: {}, indels: {}", aln.score(), aln.len(), aln.num_indels());
    }

    writer.flush()?;

    Ok(())
}

fn align_subcommand(args: &AlignArgs) -> Result<()> {
    let span = span!(Level::INFO, "align_subcommand");
    let _enter = span.enter();

    let mode = Tokenization::from(args.tokens);
    let left = load_tokens(&args.left, mode)
        .with_context(|| format!("Could not read sequence from {:?}", args.left))?;
    let top = load_tokens(&args.top, mode)
        .with_context(|| format!("Could not read sequence from {:?}", args.top))?;

    info!("Aligning {} elements against {} elements...", left.len(), top.len());

    let scoring = BasicScoring::new(args.match_score, args.mismatch_score, args.gap_penalty);
    let mut aligner = NeedlemanWunschAligner::new(
        left.into_iter().map(Some),
        top.into_iter().map(Some),
        scoring,
    );

    write_alignment(&mut aligner, &args.output_args, display_token)
}

/// Tokens are shown quoted, so a gap (`-`) can't be confused with a token that reads the same.
fn display_token(token: &Option<String>) -> String {
    match token {
        Some(text) => format!("{text:?}"),
        None => "-".to_string(),
    }
}

fn outline_subcommand(args: &OutlineArgs) -> Result<()> {
    let span = span!(Level::INFO, "outline_subcommand");
    let _enter = span.enter();

    let left = load_outline(&args.left)
        .with_context(|| format!("Could not read outline from {:?}", args.left))?;
    let top = load_outline(&args.top)
        .with_context(|| format!("Could not read outline from {:?}", args.top))?;

    info!("Aligning outlines with {} and {} elements...", left.len(), top.len());

    let mut aligner = NeedlemanWunschAligner::new(left, top, ParagraphSentenceScoring);

    write_alignment(&mut aligner, &args.output_args, |e: &TextElement<String>| e.to_string())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose)?;

    match &args.command {
        Some(NwSubcommand::Align(v)) => align_subcommand(v)?,
        Some(NwSubcommand::Outline(v)) => outline_subcommand(v)?,
        None => {
            return Err(NwError::Other).with_context(|| "No subcommand given.".to_string())
        }
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::display_token;

    #[test]
    fn test_display_token() {
        assert_eq!(display_token(&Some("a".to_string())), r#""a""#);
        assert_eq!(display_token(&Some("-".to_string())), r#""-""#);
        assert_eq!(display_token(&None), "-");
        assert_ne!(display_token(&Some("-".to_string())), display_token(&None));
    }
}
