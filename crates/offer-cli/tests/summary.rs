//! Tests for the console summary.

use std::path::PathBuf;

use offer_cli::summary::{column_table, status_lines};
use offer_cli::types::CleanResult;
use offer_model::{CastDiagnostic, CleaningProfile, ColumnKind, ColumnReport, PipelineReport};

fn column(name: &str, kind: Option<ColumnKind>, dtype: &str, non_null: usize) -> ColumnReport {
    let mut report = ColumnReport::new(name, kind, dtype);
    report.non_null = non_null;
    report
}

fn sample_result(output: Option<&str>) -> CleanResult {
    let mut action = column("offer_action", Some(ColumnKind::String), "i64", 9);
    action.filled = 1;
    action.unrecognized = 2;
    let mut event_dt = column("event_dt", Some(ColumnKind::String), "str", 8);
    event_dt.parse_failures = 1;
    let var_1 = column("var_1", Some(ColumnKind::Float), "list[f64]", 9);
    CleanResult {
        input: PathBuf::from("amex_offers_data.parquet"),
        output: output.map(PathBuf::from),
        report: PipelineReport {
            profile: CleaningProfile::Canonical,
            input_rows: 10,
            output_rows: 9,
            duplicates_removed: 1,
            diagnostics: vec![CastDiagnostic {
                column: "var_1".to_string(),
                target: ColumnKind::Float,
                message: "unsupported source dtype list[f64]".to_string(),
            }],
            columns: vec![action, event_dt, var_1],
        },
    }
}

#[test]
fn test_status_lines() {
    let lines = status_lines(&sample_result(Some("temp.csv"))).join("\n");
    insta::assert_snapshot!(lines, @r"
    Input: amex_offers_data.parquet
    Output: temp.csv
    Profile: canonical
    Rows: 10 in, 9 out (1 duplicate removed)
    Filled: 1 cells
    Unparseable dates/times left empty: 1
    ");
}

#[test]
fn test_status_lines_dry_run() {
    let lines = status_lines(&sample_result(None));
    assert_eq!(lines[1], "Output: none (dry run)");
}

#[test]
fn test_column_table_lists_every_column() {
    let report = sample_result(None).report;
    let table = column_table(&report);
    let rendered = table.to_string();

    assert_eq!(table.row_iter().count(), 3);
    for name in ["offer_action", "event_dt", "var_1", "Non-null", "Unparsed"] {
        assert!(rendered.contains(name), "missing {name}");
    }
}
