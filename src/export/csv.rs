//! CSV report export.
//!
//! One row per checked domain, in input order. Sub-records are flattened to
//! their status string; MX records are reduced to a count.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::api::{CheckRecord, CheckResult};
use crate::error_handling::{ReportError, ResponseShapeError};

/// Header row of the CSV report.
pub const CSV_HEADER: [&str; 10] = [
    "Domain",
    "Overall Score",
    "Compliance",
    "SPF",
    "DKIM",
    "DMARC",
    "MX Records",
    "BIMI",
    "MTA-STS",
    "Tested At",
];

const NOT_AVAILABLE: &str = "N/A";

/// Flattens one result into a CSV row.
///
/// Error results carry the failure description in the SPF column and leave
/// the remaining check columns empty.
pub fn build_csv_row(result: &CheckResult) -> Result<Vec<String>, ResponseShapeError> {
    let row = match result {
        CheckResult::Error(failure) => vec![
            failure.domain.clone(),
            "0".to_string(),
            "ERROR".to_string(),
            failure.error.clone(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ],
        CheckResult::Success(report) => {
            vec![
                report.domain()?.to_string(),
                report.overall_score()?.to_string(),
                report.compliance_level()?.to_string(),
                report.spf()?.status("spf")?.as_str().to_string(),
                report.dkim()?.status("dkim")?.as_str().to_string(),
                report.dmarc()?.status("dmarc")?.as_str().to_string(),
                report.mx()?.records("mx")?.len().to_string(),
                optional_status(report.bimi()),
                optional_status(report.mtasts()),
                report.timestamp()?.to_string(),
            ]
        }
    };
    Ok(row)
}

fn optional_status(record: Option<&CheckRecord>) -> String {
    record
        .and_then(CheckRecord::status_text)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |status| status.to_string())
}

fn build_rows(results: &[CheckResult]) -> Result<Vec<Vec<String>>, ResponseShapeError> {
    results.iter().map(build_csv_row).collect()
}

fn write_rows<W: Write>(rows: &[Vec<String>], writer: W) -> Result<usize, ReportError> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Writes the CSV report to any writer.
///
/// Every row is built before anything is written, so a malformed result
/// leaves the writer untouched.
///
/// # Returns
///
/// The number of data rows written.
pub fn write_csv<W: Write>(results: &[CheckResult], writer: W) -> Result<usize, ReportError> {
    let rows = build_rows(results)?;
    write_rows(&rows, writer)
}

/// Writes the CSV report to `output`, replacing any existing file.
///
/// The file is only created once every row has been built, so a malformed
/// response never truncates a previous report.
pub fn export_csv(results: &[CheckResult], output: &Path) -> Result<usize, ReportError> {
    let rows = build_rows(results)?;
    let file = std::fs::File::create(output)?;
    write_rows(&rows, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CheckFailure;
    use crate::error_handling::ErrorType;
    use serde_json::json;

    fn success(domain: &str, score: i64, bimi: bool) -> CheckResult {
        let mut body = json!({
            "domain": domain,
            "overallScore": score,
            "complianceLevel": "compliant",
            "timestamp": "2025-01-15T10:30:00Z",
            "spf": {"status": "pass", "message": "ok"},
            "dkim": {"status": "fail", "message": "missing"},
            "dmarc": {"status": "warning", "message": "p=none"},
            "mx": {"status": "pass", "message": "ok", "records": [
                {"priority": 10, "exchange": "mx1.example.com"},
                {"priority": 20, "exchange": "mx2.example.com"},
                {"priority": 30, "exchange": "mx3.example.com"}
            ]}
        });
        if bimi {
            body["bimi"] = json!({"status": "pass", "message": "ok"});
        }
        CheckResult::from_response(domain, body).unwrap()
    }

    fn failure(domain: &str, error: &str) -> CheckResult {
        CheckResult::Error(CheckFailure {
            domain: domain.to_string(),
            error: error.to_string(),
            kind: ErrorType::HttpRequestTimeoutError,
        })
    }

    #[test]
    fn test_success_row() {
        let row = build_csv_row(&success("example.com", 85, true)).unwrap();
        assert_eq!(
            row,
            vec![
                "example.com",
                "85",
                "compliant",
                "pass",
                "fail",
                "warning",
                "3",
                "pass",
                "N/A",
                "2025-01-15T10:30:00Z"
            ]
        );
    }

    #[test]
    fn test_error_row() {
        let row = build_csv_row(&failure("down.example", "operation timed out")).unwrap();
        assert_eq!(
            row,
            vec!["down.example", "0", "ERROR", "operation timed out", "", "", "", "", "", ""]
        );
    }

    #[test]
    fn test_write_csv_header_and_quoting() {
        let results = vec![
            success("example.com", 85, false),
            failure("bad.example", "error sending request, connection refused"),
        ];
        let mut buf = Vec::new();
        let count = write_csv(&results, &mut buf).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Domain,Overall Score,Compliance,SPF,DKIM,DMARC,MX Records,BIMI,MTA-STS,Tested At"
        );
        assert_eq!(
            lines[1],
            "example.com,85,compliant,pass,fail,warning,3,N/A,N/A,2025-01-15T10:30:00Z"
        );
        assert_eq!(
            lines[2],
            "bad.example,0,ERROR,\"error sending request, connection refused\",,,,,,"
        );
    }

    #[test]
    fn test_unexpected_detail_types_still_produce_a_row() {
        let mut body = json!({
            "domain": "example.com",
            "overallScore": 85,
            "complianceLevel": "compliant",
            "timestamp": "2025-01-15T10:30:00Z",
            "spf": {"status": "pass", "message": "ok", "record": 42},
            "dkim": {"status": "pass", "message": "ok", "selector": ["a", "b"]},
            "dmarc": {"status": "pass", "message": "ok"},
            "mx": {"status": "pass", "message": "ok", "records": [{"priority": "10"}]}
        });
        body["bimi"] = json!(false);
        let result = CheckResult::from_response("example.com", body).unwrap();
        assert_eq!(
            build_csv_row(&result).unwrap(),
            vec![
                "example.com",
                "85",
                "compliant",
                "pass",
                "pass",
                "pass",
                "1",
                "N/A",
                "N/A",
                "2025-01-15T10:30:00Z"
            ]
        );
    }

    #[test]
    fn test_missing_mx_records_is_shape_error() {
        let body = json!({
            "domain": "example.com",
            "overallScore": 50,
            "complianceLevel": "partial",
            "timestamp": "t",
            "spf": {"status": "pass"},
            "dkim": {"status": "pass"},
            "dmarc": {"status": "pass"},
            "mx": {"status": "fail"}
        });
        let result = CheckResult::from_response("example.com", body).unwrap();
        assert_eq!(build_csv_row(&result).unwrap_err().field, "mx.records");

        let mut buf = Vec::new();
        assert!(matches!(
            write_csv(&[result], &mut buf),
            Err(ReportError::Shape(_))
        ));
        assert!(buf.is_empty());
    }
}
