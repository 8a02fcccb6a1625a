use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hda_core::MergeStats;
use hda_ingest::any_to_string_for_output;
use hda_model::Source;
use hda_report::{ReportBody, ReportData};
use polars::prelude::{AnyValue, DataFrame};

use hda_cli::pipeline::MergeRun;

pub fn print_summary(run: &MergeRun) {
    let Some(merged) = run.session.merged() else {
        return;
    };
    let stats = &merged.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("File"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for source in Source::ALL {
        let file = run
            .session
            .source(source)
            .map(|loaded| loaded.path.display().to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(source.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(file),
            Cell::new(stats.rows_for(source)),
        ]);
    }
    table.add_row(vec![
        dim_cell("Empty rows dropped"),
        dim_cell("-"),
        count_cell(stats.empty_rows_dropped, Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("Placeholder hospital rows dropped"),
        dim_cell("-"),
        count_cell(stats.placeholder_rows_dropped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("MERGED")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} columns", stats.merged_columns)),
        Cell::new(stats.merged_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_notes(stats);
    if let Some(export) = &run.export {
        println!("Data saved to {} ({})", export.path.display(), export.format);
    }
}

fn print_notes(stats: &MergeStats) {
    if stats.index_column_dropped {
        println!("Dropped row-index column 'Unnamed: 0'.");
    }
    if stats.unrecognized_gender > 0 {
        eprintln!(
            "warning: {} gender value(s) not recognized, kept as written",
            stats.unrecognized_gender
        );
    }
}

pub fn print_preview(df: &DataFrame, rows: usize) {
    let preview = df.head(Some(rows));
    let mut table = Table::new();
    table.set_header(
        preview
            .get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    let columns = preview.get_columns();
    for idx in 0..preview.height() {
        table.add_row(
            columns
                .iter()
                .map(|column| {
                    Cell::new(any_to_string_for_output(
                        column.get(idx).unwrap_or(AnyValue::Null),
                    ))
                })
                .collect::<Vec<_>>(),
        );
    }
    println!();
    println!("Preview ({} of {} rows):", preview.height(), df.height());
    println!("{table}");
}

pub fn print_reports(reports: &[ReportData]) {
    for report in reports {
        println!();
        println!("{}", report.title);
        println!("{}", report_table(report));
    }
}

fn report_table(report: &ReportData) -> Table {
    let mut table = Table::new();
    let category = report.x_label.unwrap_or("Category");
    match &report.body {
        ReportBody::Counts { categories } => {
            table.set_header(vec![
                header_cell(category),
                header_cell(report.y_label.unwrap_or("Count")),
            ]);
            for entry in categories {
                table.add_row(vec![Cell::new(&entry.label), Cell::new(entry.count)]);
            }
        }
        ReportBody::Shares { slices } => {
            table.set_header(vec![
                header_cell("Diagnosis"),
                header_cell("Count"),
                header_cell("Share"),
            ]);
            for slice in slices {
                table.add_row(vec![
                    Cell::new(&slice.label),
                    Cell::new(slice.count),
                    Cell::new(format!("{:.1}%", slice.percent)),
                ]);
            }
        }
        ReportBody::Distribution { groups } => {
            table.set_header(
                [category, "Count", "Min", "Q1", "Median", "Q3", "Max"]
                    .into_iter()
                    .map(header_cell)
                    .collect::<Vec<_>>(),
            );
            for group in groups {
                let mut row = vec![Cell::new(&group.group)];
                match &group.summary {
                    Some(summary) => {
                        row.push(Cell::new(summary.count));
                        for value in [
                            summary.min,
                            summary.q1,
                            summary.median,
                            summary.q3,
                            summary.max,
                        ] {
                            row.push(Cell::new(format!("{value:.2}")));
                        }
                    }
                    None => {
                        row.push(Cell::new(0));
                        row.extend((0..5).map(|_| dim_cell("-")));
                    }
                }
                table.add_row(row);
            }
        }
        ReportBody::Stacked { genders, rows } => {
            let mut header = vec![header_cell(category)];
            header.extend(
                genders
                    .iter()
                    .map(|gender| header_cell(&format!("{} {gender}", report.legend.unwrap_or("")))),
            );
            table.set_header(header);
            for row in rows {
                let mut cells = vec![Cell::new(&row.hospital)];
                cells.extend(row.counts.iter().map(|count| count_cell(*count, Color::Reset)));
                table.add_row(cells);
            }
        }
    }
    apply_table_style(&mut table);
    for index in 1..table.column_count() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
