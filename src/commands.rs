//! Drivers behind each subcommand. Each returns the text to print so the
//! binary only decides where it goes.

use std::fs;
use std::path::Path;
use std::thread;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::cli::{Args, Command, FileOwnersArgs, LocateArgs, SummarizeArgs};
use crate::index::IndexSnapshot;
use crate::joiner::resolve_failure_owners;
use crate::locator::Locator;
use crate::output::{OutputFormatter, Summary};
use crate::ownership::{load_repository_rules, resolve_file_owners, OwnedFile};
use crate::results::TestSummary;
use crate::utils::path::absolutize_from_cwd;

pub fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::Summarize(summarize_args) => {
            let report = summarize(summarize_args)?;
            emit(&report, summarize_args.output_file.as_deref())
        }
        Command::Locate(locate_args) => emit(&locate(locate_args)?, None),
        Command::FileOwners(file_owners_args) => emit(&file_owners(file_owners_args)?, None),
    }
}

fn emit(output: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        None => {
            println!("{output}");
            Ok(())
        }
    }
}

pub fn summarize(args: &SummarizeArgs) -> Result<String> {
    let repository = absolutize_from_cwd(&args.ownership.repository)
        .context("Failed to resolve repository path")?;
    let options = args.ownership.options();

    info!("loading symbol index and ownership rules");
    let (rules, index) = thread::scope(|scope| {
        let rules = scope.spawn(|| load_repository_rules(&repository, &options));
        let index = scope.spawn(|| IndexSnapshot::load(&args.index));
        (rules.join(), index.join())
    });
    let rules = rules
        .map_err(|_| anyhow!("ownership rule loading panicked"))?
        .context("Failed to compile ownership rules")?;
    let index = index
        .map_err(|_| anyhow!("symbol index loading panicked"))?
        .context("Failed to load symbol index")?;
    info!(rules = rules.len(), occurrences = index.len(), "initialised");

    let test_summary = TestSummary::load(&args.summary)?;
    let failures = resolve_failure_owners(&test_summary.test_failures, &rules, &index);

    let summary = Summary::new(test_summary, failures);
    info!(
        unresolved = summary.unresolved_failures().len(),
        format = args.format.as_str(),
        "rendering report"
    );

    OutputFormatter::format(&summary, args.format)
}

pub fn locate(args: &LocateArgs) -> Result<String> {
    let index = IndexSnapshot::load(&args.index).context("Failed to load symbol index")?;

    let location = Locator::new(&index)
        .locate(&args.test_identifier, args.module.as_deref())
        .ok_or_else(|| anyhow!("Location not found: {}", args.test_identifier))?;

    let result = serde_json::json!({
        "testIdentifierString": args.test_identifier,
        "path": location.path,
        "line": location.line,
        "column": location.column,
        "module": location.module,
    });
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Owners of every source file in the repository, or of the requested files
/// only when `--file` is given.
pub fn file_owners(args: &FileOwnersArgs) -> Result<String> {
    let repository = absolutize_from_cwd(&args.ownership.repository)
        .context("Failed to resolve repository path")?;
    let options = args.ownership.options();

    let owned: Vec<OwnedFile> = if args.files.is_empty() {
        resolve_file_owners(&repository, &options)?
    } else {
        let rules = load_repository_rules(&repository, &options)
            .context("Failed to compile ownership rules")?;
        args.files
            .iter()
            .map(|file| {
                let path = absolutize_from_cwd(file)
                    .with_context(|| format!("Failed to resolve path: {}", file.display()))?;
                Ok(rules.owned_file(&path))
            })
            .collect::<Result<_>>()?
    };

    Ok(serde_json::to_string_pretty(&owned)?)
}
