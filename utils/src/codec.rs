use clap::Subcommand;
use itertools::Itertools;
use namedranges::{list_to_ranges, ranges_to_flat_list, ranges_to_list};
use std::error::Error;

#[derive(Clone, Debug, Subcommand)]
pub enum CodecAction {
    /// Compresses ascending integers into `start-end` runs
    ListToRanges {
        #[clap(required = true, num_args = 1..)]
        values: Vec<i64>,
    },
    /// Expands `start-end` runs back into integers
    RangesToList {
        #[clap(required = true, num_args = 1..)]
        expressions: Vec<String>,
        /// Print one list instead of one line per range
        #[clap(short, long)]
        flatten: bool,
    },
}

pub fn codec_list_to_ranges(values: Vec<i64>) -> Result<(), Box<dyn Error + Send + Sync>> {
    if !values.is_sorted() {
        tracing::warn!("Values are not ascending, they will be sorted and deduplicated");
    }

    println!("{}", list_to_ranges(values).join(" "));

    Ok(())
}

pub fn codec_ranges_to_list(
    expressions: Vec<String>,
    flatten: bool,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if flatten {
        println!("{}", ranges_to_flat_list::<i64>(&expressions)?.iter().join(" "));
    } else {
        for values in ranges_to_list::<i64>(&expressions)? {
            println!("{}", values.iter().join(" "));
        }
    }

    Ok(())
}
