use anyhow::{Context as AnyhowContext, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::ownership::{OwnershipOptions, DEFAULT_CODEOWNERS_PATH, DEFAULT_IGNORE_PATTERNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "xcresult-owners")]
#[command(about = "Locate failing test cases and the owners of the files that define them", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Join the failures of a test results summary with their locations and owners
    Summarize(SummarizeArgs),

    /// Print the location of a single test case
    Locate(LocateArgs),

    /// Print the owners of repository files
    FileOwners(FileOwnersArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct OwnershipArgs {
    /// Repository that contains the CODEOWNERS file and the source files
    #[arg(short, long, value_name = "DIR")]
    pub repository: PathBuf,

    /// CODEOWNERS location relative to the repository
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CODEOWNERS_PATH)]
    pub codeowners: PathBuf,

    /// fnmatch patterns of files to skip. Can be specified multiple times.
    #[arg(long = "ignore", value_name = "GLOB", default_values_t = DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()))]
    pub ignored_patterns: Vec<String>,
}

#[derive(ClapArgs, Debug)]
pub struct SummarizeArgs {
    /// Test results summary from `xcresulttool get test-results summary`
    #[arg(value_name = "SUMMARY")]
    pub summary: PathBuf,

    /// Symbol index snapshot (json or yaml)
    #[arg(short, long, value_name = "FILE")]
    pub index: PathBuf,

    #[command(flatten)]
    pub ownership: OwnershipArgs,

    /// Output format (json, markdown)
    #[arg(short = 'f', long, default_value = "markdown")]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct LocateArgs {
    /// Symbol index snapshot (json or yaml)
    #[arg(short, long, value_name = "FILE")]
    pub index: PathBuf,

    /// Test identifier as it appears in the test results
    #[arg(short, long, value_name = "IDENTIFIER")]
    pub test_identifier: String,

    /// Module that defines the test
    #[arg(short, long, value_name = "MODULE")]
    pub module: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct FileOwnersArgs {
    #[command(flatten)]
    pub ownership: OwnershipArgs,

    /// Only report these files. Can be specified multiple times.
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Summarize(args) => {
                validate_file(&args.summary)?;
                validate_file(&args.index)?;
                args.ownership.validate()
            }
            Command::Locate(args) => validate_file(&args.index),
            Command::FileOwners(args) => args.ownership.validate(),
        }
    }
}

impl OwnershipArgs {
    pub fn validate(&self) -> Result<()> {
        validate_directory(&self.repository)
    }

    pub fn options(&self) -> OwnershipOptions {
        OwnershipOptions {
            codeowners_path: self.codeowners.clone(),
            ignored_patterns: self.ignored_patterns.clone(),
            ..OwnershipOptions::default()
        }
    }
}

pub fn validate_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }
    std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    Ok(())
}

pub fn validate_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    std::fs::metadata(path)
        .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}
