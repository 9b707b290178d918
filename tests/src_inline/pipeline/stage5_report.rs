use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::{Criteria, DegenerateRowPolicy, Impact};
use crate::pipeline::run_topsis;
use crate::report::build_summary;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_topsis_report_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn fixture() -> (DecisionTable, Criteria, TopsisOutcome) {
    let table = DecisionTable {
        id_header: "Fund Name".to_string(),
        criteria: vec!["P1".to_string(), "P2".to_string()],
        ids: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        values: vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]],
        text: vec![
            vec!["1".to_string(), "1.00".to_string()],
            vec!["2".to_string(), "2e0".to_string()],
            vec!["3".to_string(), "3".to_string()],
        ],
        coerced_cells: 0,
    };
    let criteria = Criteria {
        weights: vec![1.0, 1.0],
        impacts: vec![Impact::Beneficial, Impact::Beneficial],
    };
    let outcome = run_topsis(&table, &criteria, DegenerateRowPolicy::Neutral).unwrap();
    (table, criteria, outcome)
}

#[test]
fn test_render_result_csv_appends_score_and_rank() {
    let (table, _, outcome) = fixture();
    let mut writer = csv::Writer::from_writer(Vec::new());
    render_result_csv(&mut writer, &table, &outcome).unwrap();
    let bytes = writer.into_inner().unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Fund Name,P1,P2,Topsis Score,Rank");
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "A,1,1.00,0,3");
    assert!(lines[2].starts_with("B,2,2e0,"));
    assert_eq!(lines[3], "C,3,3,1,1");
}

#[test]
fn test_write_result_csv_overwrites_existing_file() {
    let dir = make_temp_dir();
    let path = dir.join("result.csv");
    fs::write(&path, "stale contents that are longer than the new file body\n".repeat(20)).unwrap();
    let (table, _, outcome) = fixture();
    write_result_csv(&table, &outcome, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Fund Name,P1,P2,Topsis Score,Rank\n"));
    assert!(!text.contains("stale"));
    assert!(!temp_path(&path).exists());
}

#[test]
fn test_write_result_csv_missing_directory_leaves_nothing() {
    let dir = make_temp_dir();
    let path = dir.join("missing").join("result.csv");
    let (table, _, outcome) = fixture();
    assert!(write_result_csv(&table, &outcome, &path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_write_summary_json() {
    let dir = make_temp_dir();
    let path = dir.join("summary.json");
    let (table, criteria, outcome) = fixture();
    let summary = build_summary(&table, &criteria, &outcome, "in.csv", "out.csv");
    write_summary_json(&summary, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["tool"], "kira-topsis");
    assert_eq!(value["n_rows"], 3);
    assert_eq!(value["best"][0], "C");
    assert_eq!(value["criteria"][0]["impact"], "beneficial");
    assert_eq!(value["ideal"]["positive"].as_array().unwrap().len(), 2);
}

#[test]
fn test_temp_path_is_sibling() {
    let tmp = temp_path(Path::new("/data/out.csv"));
    assert_eq!(tmp, PathBuf::from("/data/out.csv.tmp"));
}
