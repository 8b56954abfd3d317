//! Human-readable single-domain report.

use crate::api::{CheckRecord, FieldText, SecurityReport};
use crate::config::REPORT_WIDTH;
use crate::error_handling::ResponseShapeError;

/// Column at which section content starts (`"MTA-STS:  "` is the longest label).
const LABEL_WIDTH: usize = 10;

/// Renders the bordered report for one domain.
///
/// BIMI and MTA-STS sections are left out entirely when the service did not
/// return them.
///
/// # Errors
///
/// Returns `ResponseShapeError` naming the first required field that is
/// missing from the response.
pub fn render_report(report: &SecurityReport) -> Result<String, ResponseShapeError> {
    let border = "=".repeat(REPORT_WIDTH);
    let mut lines = vec![
        String::new(),
        border.clone(),
        format!("  EMAIL SECURITY REPORT: {}", report.domain()?),
        border.clone(),
        String::new(),
        format!("Overall Score: {}/100", report.overall_score()?),
        format!(
            "Compliance: {}",
            report.compliance_level()?.to_string().to_uppercase()
        ),
        String::new(),
    ];

    let spf = report.spf()?;
    push_section(&mut lines, "SPF", "spf", spf)?;
    push_detail(&mut lines, "Record", spf.record());
    lines.push(String::new());

    let dkim = report.dkim()?;
    push_section(&mut lines, "DKIM", "dkim", dkim)?;
    push_detail(&mut lines, "Selector", dkim.selector());
    lines.push(String::new());

    let dmarc = report.dmarc()?;
    push_section(&mut lines, "DMARC", "dmarc", dmarc)?;
    push_detail(&mut lines, "Policy", dmarc.policy());
    lines.push(String::new());

    let mx = report.mx()?;
    push_section(&mut lines, "MX", "mx", mx)?;
    for (i, record) in mx.records("mx").unwrap_or_default().iter().enumerate() {
        let priority = record
            .priority()
            .ok_or_else(|| ResponseShapeError::missing(format!("mx.records[{i}].priority")))?;
        let exchange = record
            .exchange()
            .ok_or_else(|| ResponseShapeError::missing(format!("mx.records[{i}].exchange")))?;
        lines.push(format!("{:LABEL_WIDTH$}[{}] {}", "", priority, exchange));
    }
    lines.push(String::new());

    if let Some(bimi) = report.bimi() {
        push_section(&mut lines, "BIMI", "bimi", bimi)?;
        push_detail(&mut lines, "Logo", bimi.logo_url());
        lines.push(String::new());
    }

    if let Some(mtasts) = report.mtasts() {
        push_section(&mut lines, "MTA-STS", "mtasts", mtasts)?;
        push_detail(&mut lines, "Mode", mtasts.mode());
        lines.push(String::new());
    }

    lines.push(border.clone());
    lines.push(format!("Tested at: {}", report.timestamp()?));
    lines.push(border);

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

fn push_section(
    lines: &mut Vec<String>,
    label: &str,
    key: &str,
    record: &CheckRecord,
) -> Result<(), ResponseShapeError> {
    let heading = format!("{label}:");
    lines.push(format!(
        "{heading:<LABEL_WIDTH$}{}",
        record.status(key)?.label()
    ));
    lines.push(format!("{:LABEL_WIDTH$}{}", "", record.message(key)?));
    Ok(())
}

fn push_detail(lines: &mut Vec<String>, name: &str, value: Option<FieldText<'_>>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        lines.push(format!("{:LABEL_WIDTH$}{name}: {value}", ""));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn body() -> Value {
        json!({
            "domain": "example.com",
            "overallScore": 85,
            "complianceLevel": "compliant",
            "timestamp": "2025-01-15T10:30:00Z",
            "spf": {"status": "pass", "message": "SPF record found", "record": "v=spf1 include:_spf.google.com -all"},
            "dkim": {"status": "pass", "message": "DKIM configured", "selector": "google"},
            "dmarc": {"status": "warning", "message": "Policy is none", "policy": "none"},
            "mx": {"status": "pass", "message": "MX records found", "records": [
                {"priority": 1, "exchange": "aspmx.l.google.com"},
                {"priority": 5, "exchange": "alt1.aspmx.l.google.com"}
            ]}
        })
    }

    fn render(body: Value) -> Result<String, ResponseShapeError> {
        render_report(&SecurityReport::from_value(body).unwrap())
    }

    #[test]
    fn test_header_and_score() {
        let out = render(body()).unwrap();
        assert!(out.contains(&"=".repeat(60)));
        assert!(out.contains("  EMAIL SECURITY REPORT: example.com"));
        assert!(out.contains("Overall Score: 85/100"));
        assert!(out.contains("Compliance: COMPLIANT"));
        assert!(out.contains("Tested at: 2025-01-15T10:30:00Z"));
    }

    #[test]
    fn test_sections_and_details() {
        let out = render(body()).unwrap();
        assert!(out.contains("SPF:      ✅ PASS\n          SPF record found\n"));
        assert!(out.contains("          Record: v=spf1 include:_spf.google.com -all"));
        assert!(out.contains("          Selector: google"));
        assert!(out.contains("DMARC:    ⚠️  WARNING"));
        assert!(out.contains("          Policy: none"));
    }

    #[test]
    fn test_every_mx_record_on_its_own_line() {
        let out = render(body()).unwrap();
        assert!(out.contains("          [1] aspmx.l.google.com\n"));
        assert!(out.contains("          [5] alt1.aspmx.l.google.com\n"));
    }

    #[test]
    fn test_bimi_omitted_when_absent() {
        let out = render(body()).unwrap();
        assert!(!out.contains("BIMI"));
        assert!(!out.contains("MTA-STS"));
    }

    #[test]
    fn test_bimi_and_mtasts_rendered_when_present() {
        let mut body = body();
        body["bimi"] = json!({"status": "fail", "message": "No BIMI record", "logoUrl": "https://example.com/logo.svg"});
        body["mtasts"] = json!({"status": "enforce-pending", "message": "Policy in testing", "mode": "testing"});
        let out = render(body).unwrap();
        assert!(out.contains("BIMI:     ❌ FAIL"));
        assert!(out.contains("          Logo: https://example.com/logo.svg"));
        assert!(out.contains("MTA-STS:  ENFORCE-PENDING"));
        assert!(out.contains("          Mode: testing"));
    }

    #[test]
    fn test_status_glyph_mapping_for_bimi() {
        for (status, expected) in [
            ("pass", "PASS"),
            ("fail", "FAIL"),
            ("warning", "WARNING"),
            ("not_configured", "NOT_CONFIGURED"),
        ] {
            let mut body = body();
            body["bimi"] = json!({"status": status, "message": "m"});
            let out = render(body).unwrap();
            let bimi_line = out
                .lines()
                .find(|line| line.starts_with("BIMI:"))
                .expect("BIMI section should be rendered");
            assert!(
                bimi_line.contains(expected),
                "status {status} should render {expected}, got {bimi_line}"
            );
        }
    }

    #[test]
    fn test_missing_required_section_is_shape_error() {
        let mut body = body();
        body.as_object_mut().unwrap().remove("spf");
        assert_eq!(render(body).unwrap_err().field, "spf");
    }

    #[test]
    fn test_missing_status_is_shape_error() {
        let mut body = body();
        body["dkim"] = json!({"message": "no status"});
        assert_eq!(render(body).unwrap_err().field, "dkim.status");
    }

    #[test]
    fn test_detail_of_unexpected_type_is_shown_as_json() {
        let mut body = body();
        body["dkim"]["selector"] = json!(["google", "s1"]);
        body["mx"]["records"][0]["priority"] = json!("1");
        let out = render(body).unwrap();
        assert!(out.contains(r#"          Selector: ["google","s1"]"#));
        assert!(out.contains("          [1] aspmx.l.google.com\n"));
    }

    #[test]
    fn test_report_layout_ends_with_border_line() {
        let out = render(body()).unwrap();
        assert!(out.starts_with(&format!("\n{}\n", "=".repeat(60))));
        assert!(out.ends_with(&format!("Tested at: 2025-01-15T10:30:00Z\n{}\n", "=".repeat(60))));
        assert!(out.contains("Compliance: COMPLIANT\n\nSPF:"));
    }

    #[test]
    fn test_missing_mx_records_renders_no_hosts() {
        let mut body = body();
        body["mx"] = json!({"status": "fail", "message": "No MX records"});
        let out = render(body).unwrap();
        assert!(out.contains("MX:       ❌ FAIL\n          No MX records\n\n"));
    }
}
