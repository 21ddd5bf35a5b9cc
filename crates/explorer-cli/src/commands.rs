use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::Serialize;
use tracing::info;

use explorer_cli::config::{DataConfig, ExplorerConfig};
use explorer_ingest::load_passengers;
use explorer_model::{ChartSpec, ChartTopic, EXPLORATION_TOPICS};
use explorer_report::{assemble_chart, calculate_survival_rate};
use explorer_transform::prepare;
use explorer_waittime::{
    WaitTimeStatistics, calculate_parameters, generate_wait_times, wait_time_histogram,
};

use crate::cli::{ChartArgs, DataArgs, ExploreArgs, PrepareArgs, SurvivalArgs, WaitTimeArgs};
use crate::summary::{
    print_chart_table, print_prepared_summary, print_survival_table, print_wait_time_summary,
};

#[derive(Serialize)]
struct TopicChart<'a> {
    #[serde(flatten)]
    topic: &'a ChartTopic,
    chart: &'a ChartSpec,
}

pub fn run_prepare(args: &PrepareArgs, config: &ExplorerConfig) -> Result<()> {
    let mut prepared = load_prepared(&args.data, &config.data)?;
    print_prepared_summary(&prepared);
    if let Some(path) = &args.output {
        let mut file =
            File::create(path).with_context(|| format!("create {}", path.display()))?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut prepared)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), rows = prepared.height(), "Wrote prepared table");
        println!("Prepared table: {}", path.display());
    }
    Ok(())
}

pub fn run_survival(args: &SurvivalArgs, config: &ExplorerConfig) -> Result<()> {
    let prepared = load_prepared(&args.data, &config.data)?;
    let stats = calculate_survival_rate(&prepared, args.by.as_deref())?;
    print_survival_table(args.by.as_deref(), &stats);
    Ok(())
}

pub fn run_chart(args: &ChartArgs, config: &ExplorerConfig) -> Result<()> {
    let prepared = load_prepared(&args.data, &config.data)?;
    let spec = assemble_chart(&prepared, &args.category, &args.value)?;
    let json = serde_json::to_string_pretty(&spec)?;
    match &args.output {
        Some(path) => {
            write_file(path, &json)?;
            print_chart_table(&spec);
            println!("Chart: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn run_explore(args: &ExploreArgs, config: &ExplorerConfig) -> Result<()> {
    let prepared = load_prepared(&args.data, &config.data)?;
    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    for topic in &EXPLORATION_TOPICS {
        let chart = assemble_chart(&prepared, topic.category_column, topic.value_column)
            .with_context(|| format!("build the {} chart", topic.key))?;
        println!("\n{}\n{}", topic.heading, topic.commentary);
        print_chart_table(&chart);
        if let Some(dir) = &args.output_dir {
            let path = topic_path(dir, topic);
            let json = serde_json::to_string_pretty(&TopicChart {
                topic,
                chart: &chart,
            })?;
            write_file(&path, &json)?;
            println!("Chart: {}", path.display());
        }
    }
    Ok(())
}

pub fn run_wait_times(args: &WaitTimeArgs, config: &ExplorerConfig) -> Result<()> {
    let defaults = &config.wait_times;
    let people = args.people.unwrap_or(defaults.people);
    let staff = args.staff.unwrap_or(defaults.staff);
    let seed = args.seed.or(defaults.seed);
    let bins = args.bins.unwrap_or(defaults.bins);

    let parameters = calculate_parameters(people, staff)?;
    let samples = generate_wait_times(people, staff, seed)?;
    let stats = WaitTimeStatistics::from_samples(&samples);
    println!("{people} attendees, {staff} bar staff");
    print_wait_time_summary(&parameters, stats.as_ref());

    if let Some(path) = &args.histogram {
        let histogram = wait_time_histogram(&samples, bins);
        write_file(path, &serde_json::to_string_pretty(&histogram)?)?;
        println!("Histogram: {}", path.display());
    }
    Ok(())
}

fn load_prepared(args: &DataArgs, config: &DataConfig) -> Result<DataFrame> {
    let path = args.csv.as_deref().unwrap_or(config.path.as_path());
    let delay = args.delay_secs.map_or_else(
        || config.load_delay(),
        |secs| Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO),
    );
    let raw = load_passengers(path, delay)?;
    Ok(prepare(raw)?)
}

fn topic_path(dir: &Path, topic: &ChartTopic) -> PathBuf {
    dir.join(format!("{}.json", topic.key))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
