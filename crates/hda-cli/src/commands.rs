use anyhow::{Context, Result};
use comfy_table::Table;
use hda_ingest::LoadOptions;
use hda_model::Source;
use serde_json::json;

use hda_cli::pipeline::{MergeRequest, MergeRun, run_merge_pipeline};

use crate::cli::MergeArgs;
use crate::summary::{apply_table_style, print_preview, print_reports, print_summary};

pub fn run_sources() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Source", "Label", "Renamed columns"]);
    apply_table_style(&mut table);
    for source in Source::ALL {
        let renames = source
            .column_renames()
            .iter()
            .map(|(from, to)| format!("{from} -> {to}"))
            .collect::<Vec<_>>();
        let renames = if renames.is_empty() {
            "(already canonical)".to_string()
        } else {
            renames.join(", ")
        };
        table.add_row(vec![
            source.as_str().to_string(),
            source.label().to_string(),
            renames,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_merge(args: &MergeArgs) -> Result<MergeRun> {
    let mut load_options = LoadOptions::default().with_infer_schema_length(args.infer_schema_length);
    if let Some(max) = args.max_file_size {
        load_options = load_options.with_max_file_size(max);
    }
    let request = MergeRequest {
        general: args.general.clone(),
        prenatal: args.prenatal.clone(),
        sports: args.sports.clone(),
        output: args.output.clone(),
        reports: args.reports.iter().map(|&kind| kind.into()).collect(),
        load_options,
    };
    run_merge_pipeline(&request)
}

/// Print the outcome of a merge run in the requested form.
pub fn print_merge_run(run: &MergeRun, args: &MergeArgs) -> Result<()> {
    if args.json {
        let merged = run.session.merged().map(|merged| &merged.stats);
        let document = json!({
            "stats": merged,
            "export": run.export.as_ref().map(|export| json!({
                "path": export.path.display().to_string(),
                "format": export.format,
                "rows": export.rows,
                "columns": export.columns,
            })),
            "reports": run.reports,
        });
        let text = serde_json::to_string_pretty(&document).context("serialize merge run")?;
        println!("{text}");
        return Ok(());
    }

    print_summary(run);
    if let (Some(rows), Some(merged)) = (args.preview, run.session.merged()) {
        print_preview(&merged.data, rows);
    }
    print_reports(&run.reports);
    Ok(())
}
