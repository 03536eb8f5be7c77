use clap::Subcommand;
use namedranges::{Interval, NamedRanges, RangeDocument};
use std::{error::Error, fs::File, io::stdout, path::PathBuf};

#[derive(Clone, Debug, Subcommand)]
pub enum CollectionAction {
    /// Prints the gaps left between the ranges of a document
    Complement {
        path: PathBuf,
        #[clap(short, long, allow_hyphen_values = true)]
        start: Option<i64>,
        #[clap(short, long, allow_hyphen_values = true)]
        end: Option<i64>,
    },
    /// Cuts gaps such as `10-12` out of every range and prints the resulting document
    AddGaps {
        path: PathBuf,
        #[clap(short, long = "gap", required = true, num_args = 1..)]
        gaps: Vec<Interval>,
    },
    /// Renumbers the ranges from the indexing base and prints the resulting document
    Reindex {
        path: PathBuf,
        /// Drop the space between ranges instead of keeping it
        #[clap(short, long)]
        packed: bool,
    },
    /// Prints the ranges in sort order
    Sorted { path: PathBuf },
}

fn load(path: PathBuf) -> Result<NamedRanges, Box<dyn Error + Send + Sync>> {
    tracing::debug!("Loading range document {}", path.display());

    let document = RangeDocument::load(File::open(&path)?)?;
    let ranges = NamedRanges::try_from(document)?;

    tracing::info!("Loaded {} named ranges from {}", ranges.len(), path.display());

    Ok(ranges)
}

fn print(ranges: &NamedRanges) -> Result<(), Box<dyn Error + Send + Sync>> {
    RangeDocument::from(ranges).save(stdout().lock())?;
    println!();

    Ok(())
}

pub fn collection_complement(
    path: PathBuf,
    start: Option<i64>,
    end: Option<i64>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let ranges = load(path)?;

    for gap in ranges.complement(start, end) {
        println!("{}", gap.to_expression(ranges.config().separator()));
    }

    Ok(())
}

pub fn collection_add_gaps(
    path: PathBuf,
    gaps: Vec<Interval>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut ranges = load(path)?;
    ranges.add_gaps(&gaps);

    print(&ranges)
}

pub fn collection_reindex(path: PathBuf, packed: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut ranges = load(path)?;
    ranges.reindex(!packed);

    print(&ranges)
}

pub fn collection_sorted(path: PathBuf) -> Result<(), Box<dyn Error + Send + Sync>> {
    let ranges = load(path)?;

    for (name, interval) in ranges.sorted() {
        println!(
            "{}\t{}",
            name,
            interval.to_expression(ranges.config().separator())
        );
    }

    Ok(())
}
