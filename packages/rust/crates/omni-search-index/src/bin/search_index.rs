#![allow(missing_docs)]

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::PathBuf;
use omni_search_index::{
    Catalog, IndexConfig, OutputFormat, SearchIndexBuilder, derive_ngrams, load_records,
    write_index,
};

#[derive(Parser, Debug)]
#[command(
    name = "search-index",
    about = "Generate the client-side symbol search index for a documentation site",
    arg_required_else_help = true
)]
struct Cli {
    /// Index settings file (for example: `.config/omni-dev-fusion/search-index.yaml`).
    #[arg(long = "conf", short = 'c', value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the index artifact.
    Build {
        /// Symbol catalog (namespaces with members) as JSON.
        #[arg(long, value_name = "FILE", conflicts_with = "records")]
        catalog: Option<PathBuf>,
        /// Flat JSON array of candidate records.
        #[arg(long, value_name = "FILE")]
        records: Option<PathBuf>,
        /// Artifact path.
        #[arg(long, short = 'o', value_name = "FILE")]
        output: PathBuf,
        /// Artifact flavor; overrides the settings file.
        #[arg(long, value_enum)]
        format: Option<OutputFormatArg>,
        /// Visible-character budget for descriptions; overrides the settings file.
        #[arg(long = "description-budget")]
        description_budget: Option<usize>,
        /// Run every stage on the calling thread.
        #[arg(long, default_value_t = false)]
        sequential: bool,
    },
    /// Print the ngrams derived from qualified names.
    Ngrams {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    Js,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Js => Self::Js,
            OutputFormatArg::Json => Self::Json,
        }
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<IndexConfig> {
    match &cli.config_file {
        Some(path) => IndexConfig::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Ok(IndexConfig::default()),
    }
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    match &cli.command {
        Command::Build {
            catalog,
            records,
            output,
            format,
            description_budget,
            sequential,
        } => {
            let mut config = load_config(&cli)?;
            if let Some(format) = format {
                config.output_format = (*format).into();
            }
            if let Some(budget) = description_budget {
                config.description_budget = *budget;
            }
            if *sequential {
                config.parallel = false;
            }

            let candidates = match (catalog, records) {
                (Some(path), _) => Catalog::load(path)
                    .with_context(|| format!("failed to load catalog {}", path.display()))?
                    .candidate_records(),
                (None, Some(path)) => load_records(path)
                    .with_context(|| format!("failed to load records {}", path.display()))?,
                (None, None) => bail!("either --catalog or --records is required"),
            };

            let format = config.output_format;
            let index = SearchIndexBuilder::new(config).build(&candidates);
            write_index(&index, format, output)
                .with_context(|| format!("failed to write index {}", output.display()))?;
        }
        Command::Ngrams { names } => {
            let payload: serde_json::Map<String, serde_json::Value> = names
                .iter()
                .map(|name| (name.clone(), json!(derive_ngrams(name))))
                .collect();
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
