use ud_report::{load_report, parse_report, UsageReport};

const MAX_REPORT_BYTES: u64 = 1024 * 1024;

const REPORT: &str = "# Model Usage Dashboard

_Last updated: 2024-03-01 09:00 UTC_

## Summary

| Metric | Value |
|--------|-------|
| Agents | 3 |
| Spend  | $4.10 |

## Agents

| Agent | Model | Last Active | Input Tokens | Output Tokens | Cost | Status |
|-------|-------|-------------|--------------|---------------|------|--------|
| main@openclaw | anthropic/claude-opus | 2024-03-01 08:55 | 120400 | 8800 | $3.25 | Busy |
| scout@openclaw | openai/gpt-4o-mini | 2024-03-01 08:40 | 5300 | 900 | $0.85 |
| | | | | | | |
| cron@openclaw | local/llama | 2024-02-29 23:00 | n/a | 0 | $0 | Idle |

## Notes

| retired@openclaw | openai/gpt-4 | 2023-12-01 | 1 | 1 | $1.00 | Offline |
";

#[test]
fn summary_table_separator_opens_scan_early() {
    // The summary table's separator starts the scan, and its closing blank line
    // ends it before the agents table is reached.
    let records = parse_report(REPORT);
    assert!(records.is_empty());
}

#[test]
fn agents_table_parses_when_first_in_file() {
    let start = REPORT.find("| Agent |").unwrap();
    let records = parse_report(&REPORT[start..]);

    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["main@openclaw", "scout@openclaw", "cron@openclaw"]);

    assert_eq!(records[0].model, "anthropic/claude-opus");
    assert_eq!(records[0].timestamp, "2024-03-01 08:55");
    assert_eq!(records[0].input_tokens, 120400);
    assert_eq!(records[0].output_tokens, 8800);
    assert_eq!(records[0].cost, 3.25);
    assert_eq!(records[0].status, "Busy");

    assert_eq!(records[1].status, "Available");
    assert_eq!(records[2].input_tokens, 0);
    assert_eq!(records[2].cost, 0.0);
}

#[tokio::test]
async fn load_report_from_disk_builds_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("MODEL_USAGE_DASHBOARD.md");
    let start = REPORT.find("| Agent |").unwrap();
    std::fs::write(&path, &REPORT[start..]).unwrap();

    let records = load_report(&path, MAX_REPORT_BYTES).await.unwrap();
    let report = UsageReport::new(records);
    assert_eq!(report.total_agents, 3);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["agents"][1]["name"], "scout@openclaw");
    assert_eq!(json["agents"][1]["outputTokens"], 900);
    assert_eq!(json["total_agents"], 3);
}
