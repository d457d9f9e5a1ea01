use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use marquee_ingest::write_table_csv;
use marquee_rank::{analyze_loaded, report_digest, to_canonical_json_bytes, AnalysisReport};
use tracing::info;

use super::InputArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Output directory for the result sets.
    #[arg(long)]
    pub out: PathBuf,
    /// Length of each actor ranking.
    #[arg(long)]
    pub top_n: Option<usize>,
    /// Director whose movies are totalled.
    #[arg(long)]
    pub director: Option<String>,
    /// Inclusive minimum duration for the patience view, in minutes.
    #[arg(long)]
    pub patience_min: Option<f64>,
}

pub fn run(args: &AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let mut config = args.input.config()?;
    if let Some(top_n) = args.top_n {
        config.analysis.top_n = top_n;
    }
    if let Some(director) = &args.director {
        config.analysis.director = director.clone();
    }
    if let Some(minutes) = args.patience_min {
        config.analysis.patience_min_duration = minutes;
    }

    let loaded = args.input.load(&config)?;
    let report = analyze_loaded(&loaded, &config.analysis)?;

    fs::create_dir_all(&args.out)?;
    write_table_csv(&report.table, &args.out.join("table.csv"))?;
    output::write_patience(&args.out.join("patience.csv"), &report.patience)?;
    output::write_director(&args.out.join("director.csv"), &report.director)?;
    output::write_screentime(&args.out.join("screentime.csv"), &report.actors.screentime)?;
    output::write_activity(&args.out.join("activity.csv"), &report.actors.activity)?;
    output::write_gross(&args.out.join("gross.csv"), &report.actors.gross)?;
    fs::write(args.out.join("report.json"), to_canonical_json_bytes(&report)?)?;
    info!(out = %args.out.display(), "wrote result sets");

    print_summary(&report);
    println!("digest: {}", report_digest(&report)?);
    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    let opts = &report.options;
    println!("movies: {}", report.table.len());

    if report.patience.is_empty() {
        println!(
            "patience: no movies with duration >= {} minutes found",
            opts.patience_min_duration
        );
    } else {
        println!(
            "patience: {} movies with duration >= {} minutes",
            report.patience.len(),
            opts.patience_min_duration
        );
    }

    let director = &report.director;
    if director.is_empty() {
        println!("director: no movies directed by {} found", director.director);
    } else {
        match (director.total_minutes(), director.total_hours_minutes()) {
            (Some(total), Some((hours, minutes))) => println!(
                "director: {} movies by {}, total {total} minutes (~{hours}h {minutes}m)",
                director.rows.len(),
                director.director
            ),
            _ => println!(
                "director: {} movies by {}, total duration unknown",
                director.rows.len(),
                director.director
            ),
        }
    }

    let actors = &report.actors;
    if actors.screentime.is_empty() {
        println!("screentime: no cast information available");
    } else {
        println!("screentime: top {} actors ranked", actors.screentime.len());
    }
    if actors.activity.is_empty() {
        println!("activity: no cast information available");
    } else {
        println!("activity: top {} actors ranked", actors.activity.len());
    }
    if actors.gross.iter().all(|entry| entry.total_gross.is_none()) {
        println!("gross: no cast or gross information available");
    } else {
        println!("gross: top {} actors ranked", actors.gross.len());
    }
}
