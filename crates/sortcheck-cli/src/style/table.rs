//! Summary tables using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use sortcheck::{BatchReport, Outcome, RunReport};

const COLUMNS: [&str; 6] = ["Run", "Size", "Algorithm", "Outcome", "Footprint", "Time"];

/// Creates a table with one row per run.
pub fn batch_table(batch: &BatchReport) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = COLUMNS
        .iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for report in &batch.runs {
        table.add_row(run_row(report));
    }

    for index in [1, 4, 5] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}

/// Prints the batch summary table.
pub fn print_batch_table(batch: &BatchReport) {
    println!("{}", batch_table(batch));
}

fn run_row(report: &RunReport) -> Vec<Cell> {
    let label = report
        .variant
        .map_or_else(|| format!("n={}", report.size), |variant| variant.to_string());

    let outcome = match report.outcome {
        Outcome::Success => outcome_cell("passed", Color::Green),
        Outcome::Failure(mismatch) => outcome_cell(&format!("failed: {mismatch}"), Color::Red),
    };

    vec![
        Cell::new(label),
        Cell::new(report.size),
        Cell::new(report.algorithm),
        outcome,
        Cell::new(format_bytes(report.footprint_bytes)),
        Cell::new(format_micros(report.elapsed_us)),
    ]
}

fn outcome_cell(text: &str, color: Color) -> Cell {
    if super::no_color() {
        Cell::new(text)
    } else {
        Cell::new(text).fg(color)
    }
}

/// Formats a byte count using binary units.
pub fn format_bytes(bytes: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = KIB * 1024;

    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MiB", bytes / MIB)
    } else if bytes >= KIB && bytes % KIB == 0 {
        format!("{} KiB", bytes / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Formats a duration given in microseconds.
#[allow(clippy::cast_precision_loss)]
pub fn format_micros(us: u64) -> String {
    if us >= 1_000_000 {
        format!("{:.2} s", us as f64 / 1_000_000.0)
    } else if us >= 1_000 {
        format!("{:.2} ms", us as f64 / 1_000.0)
    } else {
        format!("{us} µs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(40), "40 B");
        assert_eq!(format_bytes(4000), "4000 B");
        assert_eq!(format_bytes(32 * 1024), "32 KiB");
        assert_eq!(format_bytes(4 * 1024 * 1024), "4 MiB");
    }

    #[test]
    fn test_format_micros() {
        assert_eq!(format_micros(12), "12 µs");
        assert_eq!(format_micros(1_500), "1.50 ms");
        assert_eq!(format_micros(2_250_000), "2.25 s");
    }
}
