//! Extracts agent rows from the usage table in a markdown report.
//!
//! Only one table shape is recognized: a pipe table whose header row starts
//! with `| Agent |` or whose separator contains `|----`. Data rows must start
//! with `|` and contain an `@`. The first line after the table start that does
//! not begin with `|` ends the scan for the whole file.

use crate::record::{AgentUsageRecord, DEFAULT_STATUS};

const SEPARATOR_MARKER: &str = "|----";
const HEADER_PREFIX: &str = "| Agent |";
const MIN_CELLS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Searching,
    InTable,
    Done,
}

/// Parse the full text of a report into records, in file order.
///
/// Never fails: malformed rows are dropped and malformed numbers default to zero.
pub fn parse_report(contents: &str) -> Vec<AgentUsageRecord> {
    let mut records = Vec::new();
    let mut state = ScanState::Searching;

    for line in contents.split('\n') {
        if state == ScanState::Done {
            break;
        }

        if line.contains(SEPARATOR_MARKER) || line.starts_with(HEADER_PREFIX) {
            state = ScanState::InTable;
            continue;
        }

        if state == ScanState::Searching {
            continue;
        }

        if !line.starts_with('|') {
            state = ScanState::Done;
            continue;
        }

        if line.contains('@') {
            if let Some(record) = parse_row(line) {
                records.push(record);
            }
        }
    }

    records
}

/// Map one data row to a record, or `None` if it has fewer than six cells.
fn parse_row(line: &str) -> Option<AgentUsageRecord> {
    let cells: Vec<&str> = line
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect();

    if cells.len() < MIN_CELLS {
        return None;
    }

    Some(AgentUsageRecord {
        name: cells[0].to_string(),
        model: cells[1].to_string(),
        timestamp: cells[2].to_string(),
        input_tokens: parse_tokens(cells[3]),
        output_tokens: parse_tokens(cells[4]),
        cost: parse_cost(cells[5]),
        status: cells
            .get(6)
            .map(|s| s.to_string())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
    })
}

/// Plain ASCII digits only; anything else, including overflow, is 0.
pub fn parse_tokens(cell: &str) -> u64 {
    if cell.is_empty() || !cell.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }
    cell.parse().unwrap_or(0)
}

/// Digits with at most one `.`, after dropping a single leading `$`. Otherwise 0.0.
pub fn parse_cost(cell: &str) -> f64 {
    let amount = cell.strip_prefix('$').unwrap_or(cell);

    let mut digits = 0usize;
    let mut dots = 0usize;
    for b in amount.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return 0.0,
        }
    }
    if digits == 0 || dots > 1 {
        return 0.0;
    }

    amount.parse().unwrap_or(0.0)
}
