use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;

use explorer_model::{ChartSpec, SurvivalStat};
use explorer_waittime::{LognormalParameters, WaitTimeStatistics};

/// Survival percentages below this are red, at or above `100 - LOW_RATE` green.
const LOW_RATE: f64 = 35.0;

pub fn print_prepared_summary(df: &DataFrame) {
    println!("Prepared {} passengers, {} columns", df.height(), df.width());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Nulls"),
        header_cell("First value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in df.get_columns() {
        let first = if df.height() == 0 {
            dim_cell("-")
        } else {
            match column.get(0) {
                Ok(value) if !value.is_null() => Cell::new(value.str_value()),
                _ => dim_cell("null"),
            }
        };
        table.add_row(vec![
            Cell::new(column.name().as_str()),
            dim_cell(column.dtype()),
            null_count_cell(column.null_count()),
            first,
        ]);
    }
    println!("{table}");
}

pub fn print_survival_table(column: Option<&str>, stats: &[SurvivalStat]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(column.unwrap_or("Category")),
        header_cell("Passengers"),
        header_cell("Survived"),
        header_cell("Rate"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    let mut total = 0u64;
    let mut survived = 0u64;
    for stat in stats {
        total += stat.total_count;
        survived += stat.survived_count;
        table.add_row(vec![
            Cell::new(&stat.category),
            Cell::new(stat.total_count),
            Cell::new(stat.survived_count),
            rate_cell(stat.survival_rate),
        ]);
    }
    if stats.len() > 1 {
        table.add_row(vec![
            Cell::new("TOTAL")
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(total).add_attribute(Attribute::Bold),
            Cell::new(survived).add_attribute(Attribute::Bold),
            rate_cell(explorer_model::survival::survival_rate(survived, total))
                .add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");
}

/// Per-category tick labels and box statistics of a chart.
pub fn print_chart_table(spec: &ChartSpec) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&spec.x_title),
        header_cell("Points"),
        header_cell("Median"),
        header_cell("IQR"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (category, label) in spec.categories.iter().zip(&spec.tick_labels) {
        let points = spec
            .points
            .iter()
            .filter(|point| &point.category == category)
            .count();
        let summary = spec.boxes.iter().find(|b| &b.category == category);
        table.add_row(vec![
            Cell::new(label.replace("<br>", " ")),
            Cell::new(points),
            summary.map_or_else(|| dim_cell("-"), |b| Cell::new(format!("{:.2}", b.median))),
            summary.map_or_else(|| dim_cell("-"), |b| Cell::new(format!("{:.2}", b.iqr()))),
        ]);
    }
    println!("{table}");
}

pub fn print_wait_time_summary(
    parameters: &LognormalParameters,
    stats: Option<&WaitTimeStatistics>,
) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Minutes")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![dim_cell("mu"), Cell::new(format!("{:.4}", parameters.mu))]);
    table.add_row(vec![
        dim_cell("sigma"),
        Cell::new(format!("{:.4}", parameters.sigma)),
    ]);
    match stats {
        Some(stats) => {
            table.add_row(vec![Cell::new("count"), Cell::new(stats.count)]);
            table.add_row(vec![Cell::new("mean"), minutes_cell(stats.mean)]);
            table.add_row(vec![
                Cell::new("std"),
                stats.std.map_or_else(|| dim_cell("-"), minutes_cell),
            ]);
            table.add_row(vec![Cell::new("p25"), minutes_cell(stats.p25)]);
            table.add_row(vec![Cell::new("median"), minutes_cell(stats.median)]);
            table.add_row(vec![Cell::new("p75"), minutes_cell(stats.p75)]);
            table.add_row(vec![Cell::new("p90"), minutes_cell(stats.p90)]);
            table.add_row(vec![
                Cell::new("max").fg(Color::Yellow),
                minutes_cell(stats.max).fg(Color::Yellow),
            ]);
        }
        None => {
            table.add_row(vec![Cell::new("count"), dim_cell(0)]);
        }
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn rate_cell(rate: f64) -> Cell {
    let cell = Cell::new(format!("{rate:.1}%"));
    if rate < LOW_RATE {
        cell.fg(Color::Red)
    } else if rate >= 100.0 - LOW_RATE {
        cell.fg(Color::Green)
    } else {
        cell
    }
}

fn null_count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}

fn minutes_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2}"))
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
