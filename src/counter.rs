use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};

use crate::date::{parse_target_date, DateArg};
use crate::error::{CookieError, Result};
use crate::record::Record;
use crate::stats::{ActivityResult, CookieTally};

const LOG_SUFFIX: &str = ".csv";

/// Finds the cookie(s) logged most often on `date` in the CSV file at `path`.
///
/// The date is validated before the path, and both before anything is read.
/// The file's first line is a header and is skipped unread. Any malformed
/// data line aborts the whole scan.
pub fn most_active_cookies(path: &Path, date: &DateArg) -> Result<ActivityResult> {
    let start_time = Instant::now();
    let target_date = parse_target_date(date)?;
    check_log_path(path)?;

    let file = File::open(path).map_err(|source| {
        error!(action = "open", component = "cookie_log", file_path = ?path, error = %source, "Failed to open file");
        CookieError::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!(action = "open", component = "cookie_log", file_path = ?path, "File opened successfully");

    let result = most_active_from_reader(BufReader::new(file), target_date)?;

    info!(
        action = "complete",
        component = "cookie_log",
        duration_ms = start_time.elapsed().as_millis(),
        "Cookie log scan completed"
    );
    Ok(result)
}

fn check_log_path(path: &Path) -> Result<()> {
    if !path.as_os_str().to_string_lossy().ends_with(LOG_SUFFIX) {
        error!(action = "validate", component = "cookie_log", file_path = ?path, "File must have a '.csv' extension");
        return Err(CookieError::InvalidExtension(path.to_path_buf()));
    }

    if !path.is_file() {
        error!(action = "validate", component = "cookie_log", file_path = ?path, "File does not exist");
        return Err(CookieError::FileNotFound(path.to_path_buf()));
    }

    Ok(())
}

/// Scans an already opened log. The first line is always discarded as the header.
pub fn most_active_from_reader<R: BufRead>(reader: R, date: NaiveDate) -> Result<ActivityResult> {
    let mut tally = CookieTally::new();
    let mut lines_processed = 0;

    for (index, line) in reader.lines().enumerate().skip(1) {
        let line_number = index + 1;
        let line = line.map_err(|source| {
            error!(action = "read", component = "cookie_log", line_number, error = %source, "Failed to read line");
            CookieError::Read {
                line: line_number,
                source,
            }
        })?;
        lines_processed += 1;

        let record = Record::parse(&line).map_err(|source| {
            error!(action = "parse", component = "record", line_number, error = %source, "Invalid CSV format");
            CookieError::MalformedRecord {
                line: line_number,
                source,
            }
        })?;

        if record.date() == date {
            tally.record(&record.cookie);
        }
    }

    info!(
        action = "scan",
        component = "cookie_log",
        lines_processed,
        "Total lines processed from CSV file"
    );

    let cookies = tally.most_active();
    if cookies.is_empty() {
        info!(action = "result", component = "tally", %date, "No active cookies found for date");
    } else {
        debug!(action = "result", component = "tally", distinct_cookies = tally.len(), "Tally built");
        info!(
            action = "result",
            component = "tally",
            %date,
            count = tally.max_count(),
            cookies = %cookies.join(", "),
            "Most active cookies for date"
        );
    }

    Ok(ActivityResult {
        date,
        cookies,
        count: tally.max_count(),
        lines_processed,
    })
}
