use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "beans-analytics")]
#[command(about = "Beans & Pods sales dataset analytics")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one page of the filtered dataset
    Show {
        #[arg(short, long, help = "Input sales CSV file")]
        input: PathBuf,

        #[arg(
            short,
            long,
            value_delimiter = ',',
            default_value = "Store,Online",
            help = "Channels to include"
        )]
        channels: Vec<String>,

        #[arg(
            short,
            long,
            value_delimiter = ',',
            default_value = "Central,North,South",
            help = "Regions to include"
        )]
        regions: Vec<String>,

        #[arg(short, long, default_value = "1", help = "1-indexed page number")]
        page: usize,

        #[arg(long, default_value = "10")]
        page_size: usize,
    },

    /// Descriptive statistics, rankings and missing-value report
    Stats {
        #[arg(short, long, help = "Input sales CSV file")]
        input: PathBuf,

        #[arg(short, long, value_delimiter = ',', default_value = "Store,Online")]
        channels: Vec<String>,

        #[arg(short, long, value_delimiter = ',', default_value = "Central,North,South")]
        regions: Vec<String>,

        #[arg(long, help = "Emit the report as JSON")]
        json: bool,
    },

    /// Export the filtered dataset to a CSV file
    Export {
        #[arg(short, long, help = "Input sales CSV file")]
        input: PathBuf,

        #[arg(short, long, value_delimiter = ',', default_value = "Store,Online")]
        channels: Vec<String>,

        #[arg(short, long, value_delimiter = ',', default_value = "Central,North,South")]
        regions: Vec<String>,

        #[arg(
            short,
            long,
            help = "Output CSV path [default: beans-filtered-{YYMMDD}.csv]"
        )]
        output: Option<PathBuf>,
    },

    /// Check data quality without producing output
    Validate {
        #[arg(short, long, help = "Input sales CSV file")]
        input: PathBuf,
    },
}
