// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap and hands each subcommand
// to its use case in Layer 2. Printing results happens here;
// computing them does not.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BuildArgs, Commands, InspectArgs, SplitArgs};

#[derive(Parser, Debug)]
#[command(
    name = "corpus-vocab",
    version,
    about = "Build a per-class word-frequency dictionary from a labelled text corpus."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Build(args)   => run_build(args),
            Commands::Split(args)   => run_split(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

fn run_build(args: BuildArgs) -> Result<()> {
    use crate::application::build_use_case::BuildUseCase;

    tracing::info!("Building dictionary from '{}'", args.corpus_dir);
    let report = BuildUseCase::new(args.into()).execute()?;

    println!(
        "{} classes, {} documents ({} used for training), {} tokens",
        report.classes, report.documents, report.train_documents, report.tokens
    );
    println!(
        "Dictionary of {} tokens saved to {}",
        report.vocab_size,
        report.dictionary_path.display()
    );
    Ok(())
}

fn run_split(args: SplitArgs) -> Result<()> {
    use crate::application::split_use_case::SplitUseCase;

    let rows = SplitUseCase::new(args.ratio, &args.output_dir).execute(&args.corpus_dir)?;
    for row in rows {
        println!("Number of files in {} are {}", row.class, row.total);
        println!(
            "{} files to training & {} files to testing in {}",
            row.train, row.test, row.class
        );
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let report = InspectUseCase::new(&args.dictionary).execute(&args.tokens)?;

    println!("{} entries ({} malformed rows skipped)", report.entries, report.skipped);
    for (class, total) in &report.class_totals {
        println!("  {class}: {total}");
    }
    for (token, entry) in &report.lookups {
        match entry {
            Some(e) => {
                let mut counts: Vec<_> = e.counts.iter().collect();
                counts.sort();
                let counts: Vec<String> = counts.iter().map(|(c, n)| format!("{c}:{n}")).collect();
                println!("{token} → index {} [{}]", e.index, counts.join(", "));
            }
            None => println!("{token} → not in dictionary"),
        }
    }
    Ok(())
}
