use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use vmi_cli::runner::RunResult;
use vmi_model::Severity;

pub fn print_summary(result: &RunResult) {
    if let Some(dir) = &result.output_dir {
        println!("Output: {}", dir.display());
    }
    if let Some(path) = &result.report_path {
        println!("Diagnostics report: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Pass"),
        header_cell("Types"),
        header_cell("Generated"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for column in 1..5 {
        if let Some(column) = table.column_mut(column) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut total_generated = 0usize;
    for pass in &result.passes {
        total_generated += pass.generated.len();
        table.add_row(vec![
            Cell::new(pass.index),
            Cell::new(pass.types),
            Cell::new(pass.generated.len()),
            Cell::new(pass.error_count),
            Cell::new(pass.warning_count),
        ]);
    }
    table.add_row(vec![
        Cell::new("total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(total_generated),
        Cell::new(result.report.error_count()),
        Cell::new(result.report.warning_count()),
    ]);
    println!("{table}");

    for diagnostic in &result.report.diagnostics {
        match diagnostic.severity {
            Severity::Error => eprintln!("{diagnostic}"),
            Severity::Warning => println!("{diagnostic}"),
        }
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}
