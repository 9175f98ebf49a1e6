//! CSV import/export of the round history
//!
//! The format is shared with the web and mobile front ends: a fixed header,
//! one comma-separated row of integers per round, oldest first, `\n`
//! between lines and no quoting. Rows are written directly so the output
//! stays byte-for-byte what the other front ends produce; reading goes
//! through the `csv` crate.

use chrono::NaiveDate;

use crate::error::CsvError;
use crate::ledger::Round;

/// Column names, in order
pub const CSV_HEADERS: [&str; 7] = [
    "Session",
    "Mike_Score",
    "Preeta_Score",
    "Mike_Session_Total",
    "Preeta_Session_Total",
    "Mike_Overall_Total",
    "Preeta_Overall_Total",
];

const COLUMNS: usize = CSV_HEADERS.len();

/// Encode rounds as CSV, or `None` when there is nothing to export
pub fn export_to_csv(rounds: &[Round]) -> Option<String> {
    if rounds.is_empty() {
        return None;
    }

    let mut lines = Vec::with_capacity(rounds.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    lines.extend(rounds.iter().map(|r| {
        format!(
            "{},{},{},{},{},{},{}",
            r.session,
            r.mike_score,
            r.preeta_score,
            r.mike_session_total,
            r.preeta_session_total,
            r.mike_overall_total,
            r.preeta_overall_total
        )
    }));
    Some(lines.join("\n"))
}

/// Decode CSV into rounds
///
/// The first line is skipped as the header and blank lines are ignored.
/// Parsing is all-or-nothing: the first bad line fails the whole file, and
/// its number counts the header as line 1.
pub fn parse_csv(content: &str) -> Result<Vec<Round>, CsvError> {
    let body = content.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut rounds: Vec<Round> = Vec::new();
    for result in reader.records() {
        let invalid = CsvError::InvalidLine {
            line: rounds.len() + 2,
        };
        let Ok(record) = result else {
            return Err(invalid);
        };
        if record.iter().all(str::is_empty) {
            continue;
        }
        match parse_record(&record) {
            Some(round) => rounds.push(round),
            None => return Err(invalid),
        }
    }

    if rounds.is_empty() {
        return Err(CsvError::NoData);
    }
    Ok(rounds)
}

type Row = (u32, i64, i64, i64, i64, i64, i64);

fn parse_record(record: &csv::StringRecord) -> Option<Round> {
    if record.len() != COLUMNS {
        return None;
    }
    let (
        session,
        mike_score,
        preeta_score,
        mike_session_total,
        preeta_session_total,
        mike_overall_total,
        preeta_overall_total,
    ): Row = record.deserialize(None).ok()?;

    let round = Round {
        session,
        mike_score,
        preeta_score,
        mike_session_total,
        preeta_session_total,
        mike_overall_total,
        preeta_overall_total,
    };
    round.has_valid_session().then_some(round)
}

/// Export filename for a given day, e.g. `cambio_scores_2024-03-09.csv`
pub fn csv_filename(date: NaiveDate) -> String {
    format!("cambio_scores_{}.csv", date.format("%Y-%m-%d"))
}

/// Export filename for today's UTC date
pub fn generate_csv_filename() -> String {
    csv_filename(chrono::Utc::now().date_naive())
}
