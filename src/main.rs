mod error;
mod fetch;
mod merge;
mod parser;
mod settings;
mod store;

use std::time::Instant;

use clap::{Parser, Subcommand};

use settings::Settings;

#[derive(Parser)]
#[command(name = "intern_scraper", about = "Internship postings table scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the source README and save the filtered table snapshot
    Fetch,
    /// Normalize the snapshot into a batch CSV
    Normalize,
    /// Drop records already in the accumulated dataset from the batch
    Merge,
    /// Fetch + normalize + merge in one pipeline
    Run,
    /// Show line/record counts for snapshot, batch, and dataset
    Stats,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;

    let result = match cli.command {
        Commands::Fetch => cmd_fetch(&settings),
        Commands::Normalize => cmd_normalize(&settings),
        Commands::Merge => cmd_merge(&settings),
        Commands::Run => {
            cmd_fetch(&settings)?;
            cmd_normalize(&settings)?;
            cmd_merge(&settings)
        }
        Commands::Stats => cmd_stats(&settings),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn cmd_fetch(settings: &Settings) -> anyhow::Result<()> {
    let table = fetch::fetch_table(&settings.source_url)?;
    store::write_raw(&settings.raw_path, &table)?;
    println!(
        "Saved {} table lines to {}",
        table.lines().count(),
        settings.raw_path.display()
    );
    Ok(())
}

fn cmd_normalize(settings: &Settings) -> anyhow::Result<()> {
    let raw = store::read_raw(&settings.raw_path)?;
    let batch = parser::normalize_table(&raw)?;
    store::write_batch(&settings.batch_path, &batch.header, &batch.records)?;
    println!(
        "Normalized {} records to {}",
        batch.records.len(),
        settings.batch_path.display()
    );
    Ok(())
}

fn cmd_merge(settings: &Settings) -> anyhow::Result<()> {
    let Some(batch) = store::read_batch(&settings.batch_path)? else {
        println!(
            "No batch at {}. Run 'normalize' first.",
            settings.batch_path.display()
        );
        return Ok(());
    };

    match merge::merge_batch(&batch, &settings.dataset_path, &settings.batch_path)? {
        Some(stats) => println!(
            "Kept {} new records ({} duplicates dropped, {} accumulated).",
            stats.new, stats.duplicates, stats.existing
        ),
        None => println!("Batch is empty. Nothing to merge."),
    }
    Ok(())
}

fn cmd_stats(settings: &Settings) -> anyhow::Result<()> {
    let snapshot = if settings.raw_path.exists() {
        store::read_raw(&settings.raw_path)?.lines().count()
    } else {
        0
    };
    let batch = store::read_batch(&settings.batch_path)?
        .map(|b| b.records.len())
        .unwrap_or(0);
    let dataset = store::read_dataset(&settings.dataset_path)?.len();

    println!("Snapshot lines:  {}", snapshot);
    println!("Batch records:   {}", batch);
    println!("Dataset records: {}", dataset);
    Ok(())
}
