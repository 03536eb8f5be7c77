use crate::{codec::CodecAction, collection::CollectionAction};
use clap::Parser;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod codec;
mod collection;

#[derive(Clone, Parser)]
pub enum Cli {
    /// Operations on a named range document
    #[clap(subcommand)]
    Collection(CollectionAction),
    /// Conversions between integer lists and range expressions
    #[clap(subcommand)]
    Codec(CodecAction),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let result = match args {
        Cli::Collection(CollectionAction::Complement { path, start, end }) => {
            collection::collection_complement(path, start, end)
        }
        Cli::Collection(CollectionAction::AddGaps { path, gaps }) => {
            collection::collection_add_gaps(path, gaps)
        }
        Cli::Collection(CollectionAction::Reindex { path, packed }) => {
            collection::collection_reindex(path, packed)
        }
        Cli::Collection(CollectionAction::Sorted { path }) => collection::collection_sorted(path),
        Cli::Codec(CodecAction::ListToRanges { values }) => codec::codec_list_to_ranges(values),
        Cli::Codec(CodecAction::RangesToList {
            expressions,
            flatten,
        }) => codec::codec_ranges_to_list(expressions, flatten),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{}", error);
            ExitCode::FAILURE
        }
    }
}
