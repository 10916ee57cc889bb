use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::error;
use serde_json::Value;

use gradeutils::algorithm::{calc_weighted_grade, calc_weighted_grade_json, percentile};
use gradeutils::schemas::ScoreWeightPair;

#[derive(Parser, Debug)]
#[command(name = "gradeutils", about = "Weighted grades and nearest-rank percentiles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Weighted final grade, e.g. `grade --item 80:0.4 --item 90:0.6`
    Grade {
        /// JSON array of {"score": .., "weight": ..} objects
        #[arg(long = "items", conflicts_with = "item", required_unless_present = "item")]
        items: Option<String>,

        /// One component in score:weight form, repeatable
        #[arg(long = "item")]
        item: Vec<ScoreWeightPair>,
    },

    /// Nearest-rank percentile, e.g. `percentile -p 50 1 2 3 4`
    Percentile {
        #[arg(short, long, allow_negative_numbers = true)]
        p: f64,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn run(command: Commands) -> Result<f64> {
    match command {
        Commands::Grade {
            items: Some(raw), ..
        } => {
            let items = serde_json::from_str::<Value>(&raw)
                .map_err(|error| anyhow!("--items is not valid JSON: {}", error))?;

            Ok(calc_weighted_grade_json(&items)?)
        }

        Commands::Grade { items: None, item } => Ok(calc_weighted_grade(&item)?),

        Commands::Percentile { p, values } => Ok(percentile(p, &values)?),
    }
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(value) => println!("{:.2}", value),
        Err(error) => {
            error!("{}", error);
            std::process::exit(1);
        }
    }
}
