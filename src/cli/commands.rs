// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `build`, `split` and `inspect`
// and all their configurable flags.

use clap::{Args, Subcommand};

use crate::application::build_use_case::BuildConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a corpus and build its word-frequency dictionary
    Build(BuildArgs),

    /// Split a corpus into training and testing documents only
    Split(SplitArgs),

    /// Summarise a saved dictionary and look up tokens
    Inspect(InspectArgs),
}

/// Arguments for the `build` command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory holding one sub-directory of documents per class
    #[arg(long, default_value = "data/corpus")]
    pub corpus_dir: String,

    /// Directory for the dictionary, split.json and build_config.json
    #[arg(long, default_value = "out")]
    pub output_dir: String,

    /// Share of each class used for training, in [0, 1]
    #[arg(long, default_value_t = 0.8)]
    pub ratio: f64,

    /// Tokens must be strictly longer than this
    #[arg(long, default_value_t = 0)]
    pub min_len: usize,

    /// Keep purely numeric tokens
    #[arg(long)]
    pub keep_numerics: bool,

    /// File name of the dictionary inside the output directory
    #[arg(long, default_value = "dictionary.csv")]
    pub dictionary_file: String,
}

/// The application layer never sees clap types.
impl From<BuildArgs> for BuildConfig {
    fn from(a: BuildArgs) -> Self {
        BuildConfig {
            corpus_dir:      a.corpus_dir,
            output_dir:      a.output_dir,
            ratio:           a.ratio,
            min_len:         a.min_len,
            remove_numerics: !a.keep_numerics,
            dictionary_file: a.dictionary_file,
        }
    }
}

/// Arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    #[arg(long, default_value = "data/corpus")]
    pub corpus_dir: String,

    #[arg(long, default_value = "out")]
    pub output_dir: String,

    #[arg(long, default_value_t = 0.8)]
    pub ratio: f64,
}

/// Arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to a dictionary CSV written by `build`
    #[arg(long, default_value = "out/dictionary.csv")]
    pub dictionary: String,

    /// Token to look up; may be repeated
    #[arg(long = "token")]
    pub tokens: Vec<String>,
}
