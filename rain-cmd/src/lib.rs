//! Command implementations for the rainfall chart CLI.
//!
//! Every subcommand loads a chart dataset from a file or URL, optionally
//! switches the current year's forecast on, and prints what the interactive
//! chart would show.

use clap::Subcommand;
use rain_core::{ChartConfig, ChartInteraction};

pub mod load;
pub mod probe;
pub mod stats;
pub mod tooltip;

#[derive(Subcommand)]
pub enum Command {
    /// Print the title, headline percentiles and every year's total
    Stats {
        /// Dataset JSON (optionally gzip) as a file path or http(s) URL
        #[arg(short, long)]
        data: String,

        /// Append the current year's forecast before computing
        #[arg(long)]
        forecast: bool,
    },

    /// Print the tooltip for a year (legend form, or chart form with --day)
    Tooltip {
        /// Dataset JSON (optionally gzip) as a file path or http(s) URL
        #[arg(short, long)]
        data: String,

        /// Year label as it appears in the legend
        #[arg(short, long)]
        year: String,

        /// Day of year to describe
        #[arg(long)]
        day: Option<u32>,

        /// Append the current year's forecast before computing
        #[arg(long)]
        forecast: bool,
    },

    /// Resolve a pointer position in data space to the nearest year
    Probe {
        /// Dataset JSON (optionally gzip) as a file path or http(s) URL
        #[arg(short, long)]
        data: String,

        /// Fractional day under the pointer
        #[arg(long)]
        day: f64,

        /// Cumulative inches under the pointer
        #[arg(long)]
        value: f64,

        /// Append the current year's forecast before computing
        #[arg(long)]
        forecast: bool,

        /// Chart width in pixels (sets the hover radius scale)
        #[arg(long)]
        width: Option<f64>,

        /// Chart height in pixels (sets the hover radius scale)
        #[arg(long)]
        height: Option<f64>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Stats { data, forecast } => {
            let chart = open_chart(&data, forecast, ChartConfig::default()).await?;
            println!("{}", stats::render_stats(&chart));
        }
        Command::Tooltip {
            data,
            year,
            day,
            forecast,
        } => {
            let chart = open_chart(&data, forecast, ChartConfig::default()).await?;
            println!("{}", tooltip::render_tooltip(&chart, &year, day)?);
        }
        Command::Probe {
            data,
            day,
            value,
            forecast,
            width,
            height,
        } => {
            let mut config = ChartConfig::default();
            if let Some(width) = width {
                config.width = width;
            }
            if let Some(height) = height {
                config.height = height;
            }
            let mut chart = open_chart(&data, forecast, config).await?;
            println!("{}", probe::render_probe(&mut chart, day, value));
        }
    }
    Ok(())
}

async fn open_chart(
    source: &str,
    forecast: bool,
    config: ChartConfig,
) -> anyhow::Result<ChartInteraction> {
    let dataset = load::load_dataset(source).await?;
    if forecast && !dataset.current().has_forecast() {
        log::warn!(
            "Current year {} has no forecast; showing observed data only",
            dataset.current().id
        );
    }
    let mut chart = ChartInteraction::new(dataset, config);
    chart.set_forecast(forecast);
    Ok(chart)
}
