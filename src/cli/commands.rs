use crate::analyzers::ListingAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{
    mean_price_by_room_type, neighbourhood_group_counts, neighbourhood_summaries, CleaningReport,
    DataCleaner, ListingFilter,
};
use crate::readers::ListingReader;
use crate::utils::constants::{BROOKLYN, FOCUS_GROUPS, MANHATTAN, MAX_MINIMUM_NIGHTS};
use crate::utils::progress::ProgressReporter;
use crate::writers::ChartWriter;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;

/// What a completed analysis run produced
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub cleaning: CleaningReport,
    pub figures: Vec<PathBuf>,
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command.unwrap_or_default() {
        Commands::Analyze { input, output_dir } => {
            let progress = ProgressReporter::new_spinner("Loading listings...", cli.verbose);
            let outcome = run_analysis(&input, &output_dir, &progress)?;
            progress.finish_and_clear();

            tracing::info!(
                figures = outcome.figures.len(),
                retained = outcome.cleaning.retained_records,
                "Analysis finished"
            );

            if output_dir == Path::new(".") {
                println!("Analysis complete. Figures saved to current directory.");
            } else {
                println!(
                    "Analysis complete. Figures saved to {}.",
                    output_dir.display()
                );
            }
        }

        Commands::Info { input } => {
            println!("Analyzing listings file: {}", input.display());

            let listings = ListingReader::new().read_listings(&input)?;
            let (listings, cleaning) = DataCleaner::new().clean(listings);

            let stats = ListingAnalyzer::new().calculate_statistics(&listings)?;

            println!("\n{}", stats.summary());
            println!("\n{}", cleaning.summary());
        }
    }

    Ok(())
}

/// Load, clean, subset, aggregate and render all five figures in order.
///
/// The first failing stage aborts the run; figures written before it stay
/// on disk.
pub fn run_analysis(
    input: &Path,
    output_dir: &Path,
    progress: &ProgressReporter,
) -> Result<AnalysisOutcome> {
    progress.set_message("Loading listings...");
    let listings = ListingReader::new().read_listings(input)?;

    progress.set_message("Cleaning listings...");
    let (listings, cleaning) = DataCleaner::new().clean(listings);

    std::fs::create_dir_all(output_dir)?;
    let writer = ChartWriter::new(output_dir);
    let mut figures = Vec::with_capacity(5);

    progress.set_message("Plotting listings by neighbourhood group...");
    figures.push(writer.write_group_distribution(&neighbourhood_group_counts(&listings))?);

    let focus = ListingFilter::neighbourhood_groups(&FOCUS_GROUPS).select(&listings);
    let brooklyn = ListingFilter::neighbourhood_group(BROOKLYN).select(&focus);
    let manhattan = ListingFilter::neighbourhood_group(MANHATTAN).select(&focus);

    progress.set_message("Plotting log price against reviews...");
    figures.push(writer.write_log_price_vs_reviews(&brooklyn, &manhattan)?);

    progress.set_message("Plotting mean price by room type...");
    figures.push(writer.write_mean_price_by_room_type(&mean_price_by_room_type(&manhattan))?);

    progress.set_message("Plotting neighbourhood prices...");
    figures.push(writer.write_neighbourhood_prices(&neighbourhood_summaries(&manhattan))?);

    progress.set_message("Plotting minimum nights against price...");
    let short_stays = ListingFilter::MaxMinimumNights(MAX_MINIMUM_NIGHTS).select(&manhattan);
    figures.push(writer.write_minimum_nights_vs_price(&short_stays)?);

    Ok(AnalysisOutcome { cleaning, figures })
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    // Only the first subscriber wins; later ones keep logging to the old sink
    if let Err(e) = installed {
        tracing::debug!("Logging subscriber already installed: {}", e);
    }

    Ok(())
}
