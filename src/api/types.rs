//! Check result types.
//!
//! The evaluation service owns its response schema, so the typed view below is
//! lenient: every field is optional and untyped, and only the code that
//! actually needs a field asks for it (getting a `ResponseShapeError` if it is
//! missing). The raw body is kept alongside for JSON passthrough and JSONL
//! export.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};

use crate::config::ERROR_COMPLIANCE_LEVEL;
use crate::error_handling::{
    categorize_api_error, error_chain, ApiError, ErrorType, ResponseShapeError,
};

/// Outcome of one check category as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
    /// Any other status string, passed through verbatim
    Other(String),
}

impl CheckStatus {
    /// Parses the wire value. Matching is exact: `"PASS"` is not `Pass`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pass" => CheckStatus::Pass,
            "fail" => CheckStatus::Fail,
            "warning" => CheckStatus::Warning,
            other => CheckStatus::Other(other.to_string()),
        }
    }

    /// The wire value.
    pub fn as_str(&self) -> &str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "fail",
            CheckStatus::Warning => "warning",
            CheckStatus::Other(raw) => raw,
        }
    }

    /// Label with status glyph for the human-readable report.
    pub fn label(&self) -> String {
        match self {
            CheckStatus::Pass => "✅ PASS".to_string(),
            CheckStatus::Fail => "❌ FAIL".to_string(),
            CheckStatus::Warning => "⚠️  WARNING".to_string(),
            CheckStatus::Other(raw) => raw.to_uppercase(),
        }
    }
}

/// A response field shown as text.
///
/// Strings are shown verbatim; any other JSON value is shown as compact JSON,
/// so a field of an unexpected type still renders instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldText<'a>(&'a Value);

impl<'a> FieldText<'a> {
    pub fn as_str(&self) -> Option<&'a str> {
        self.0.as_str()
    }

    pub fn as_value(&self) -> &'a Value {
        self.0
    }

    /// True for an empty string.
    pub fn is_empty(&self) -> bool {
        self.as_str().is_some_and(str::is_empty)
    }
}

impl fmt::Display for FieldText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// One MX host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MxRecord {
    priority: Option<Value>,
    exchange: Option<Value>,
}

impl MxRecord {
    pub fn priority(&self) -> Option<FieldText<'_>> {
        self.priority.as_ref().map(FieldText)
    }

    pub fn exchange(&self) -> Option<FieldText<'_>> {
        self.exchange.as_ref().map(FieldText)
    }
}

/// A check category sub-record (`spf`, `dkim`, `dmarc`, `mx`, `bimi`, `mtasts`).
///
/// Only `status` and `message` are common to all categories; the remaining
/// fields are category specific. Fields are kept as raw JSON and read on
/// demand, so their types are never checked up front.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRecord {
    status: Option<Value>,
    message: Option<Value>,
    record: Option<Value>,
    selector: Option<Value>,
    policy: Option<Value>,
    records: Option<Value>,
    logo_url: Option<Value>,
    mode: Option<Value>,
}

impl CheckRecord {
    pub fn status(&self, section: &str) -> Result<CheckStatus, ResponseShapeError> {
        self.status_text()
            .map(|text| CheckStatus::parse(&text.to_string()))
            .ok_or_else(|| ResponseShapeError::missing(format!("{section}.status")))
    }

    /// The raw status, if present.
    pub fn status_text(&self) -> Option<FieldText<'_>> {
        self.status.as_ref().map(FieldText)
    }

    pub fn message(&self, section: &str) -> Result<FieldText<'_>, ResponseShapeError> {
        self.message
            .as_ref()
            .map(FieldText)
            .ok_or_else(|| ResponseShapeError::missing(format!("{section}.message")))
    }

    /// MX hosts; the field must be an array.
    pub fn records(&self, section: &str) -> Result<Vec<MxRecord>, ResponseShapeError> {
        let items = self
            .records
            .as_ref()
            .and_then(Value::as_array)
            .ok_or_else(|| ResponseShapeError::missing(format!("{section}.records")))?;
        Ok(items
            .iter()
            .map(|item| MxRecord::deserialize(item).unwrap_or_default())
            .collect())
    }

    /// SPF record text
    pub fn record(&self) -> Option<FieldText<'_>> {
        self.record.as_ref().map(FieldText)
    }

    /// DKIM selector that was found
    pub fn selector(&self) -> Option<FieldText<'_>> {
        self.selector.as_ref().map(FieldText)
    }

    /// DMARC policy (`none`, `quarantine`, `reject`)
    pub fn policy(&self) -> Option<FieldText<'_>> {
        self.policy.as_ref().map(FieldText)
    }

    /// BIMI logo location
    pub fn logo_url(&self) -> Option<FieldText<'_>> {
        self.logo_url.as_ref().map(FieldText)
    }

    /// MTA-STS mode
    pub fn mode(&self) -> Option<FieldText<'_>> {
        self.mode.as_ref().map(FieldText)
    }

    fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.message.is_none()
            && self.record.is_none()
            && self.selector.is_none()
            && self.policy.is_none()
            && self.records.is_none()
            && self.logo_url.is_none()
            && self.mode.is_none()
    }
}

/// Reads a sub-record, treating anything that is not an object as absent.
fn lenient_record<'de, D>(deserializer: D) -> Result<Option<CheckRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(Value::is_object)
        .and_then(|v| CheckRecord::deserialize(v).ok()))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportBody {
    domain: Option<Value>,
    overall_score: Option<Value>,
    compliance_level: Option<Value>,
    timestamp: Option<Value>,
    #[serde(default, deserialize_with = "lenient_record")]
    spf: Option<CheckRecord>,
    #[serde(default, deserialize_with = "lenient_record")]
    dkim: Option<CheckRecord>,
    #[serde(default, deserialize_with = "lenient_record")]
    dmarc: Option<CheckRecord>,
    #[serde(default, deserialize_with = "lenient_record")]
    mx: Option<CheckRecord>,
    #[serde(default, deserialize_with = "lenient_record")]
    bimi: Option<CheckRecord>,
    #[serde(default, deserialize_with = "lenient_record")]
    mtasts: Option<CheckRecord>,
}

/// A successful evaluation as returned by the service.
#[derive(Debug, Clone)]
pub struct SecurityReport {
    raw: Value,
    body: ReportBody,
}

macro_rules! required_section {
    ($($name:ident),*) => {
        $(
            pub fn $name(&self) -> Result<&CheckRecord, ResponseShapeError> {
                self.body
                    .$name
                    .as_ref()
                    .ok_or_else(|| ResponseShapeError::missing(stringify!($name)))
            }
        )*
    };
}

fn required<'a>(
    value: &'a Option<Value>,
    field: &'static str,
) -> Result<FieldText<'a>, ResponseShapeError> {
    value
        .as_ref()
        .map(FieldText)
        .ok_or_else(|| ResponseShapeError::missing(field))
}

impl SecurityReport {
    /// Builds the typed view over a decoded response body.
    ///
    /// Only a body that is not a JSON object is rejected; individual fields
    /// are checked when something reads them.
    pub fn from_value(raw: Value) -> Result<Self, ApiError> {
        if !raw.is_object() {
            return Err(ApiError::UnexpectedShape(format!(
                "expected a JSON object, got {}",
                json_kind(&raw)
            )));
        }
        let body = ReportBody::deserialize(&raw)
            .map_err(|e| ApiError::UnexpectedShape(e.to_string()))?;
        Ok(Self { raw, body })
    }

    /// The response body exactly as received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn domain(&self) -> Result<FieldText<'_>, ResponseShapeError> {
        required(&self.body.domain, "domain")
    }

    pub fn overall_score(&self) -> Result<FieldText<'_>, ResponseShapeError> {
        required(&self.body.overall_score, "overallScore")
    }

    pub fn compliance_level(&self) -> Result<FieldText<'_>, ResponseShapeError> {
        required(&self.body.compliance_level, "complianceLevel")
    }

    /// Compliance level when it is a string.
    pub fn compliance_level_opt(&self) -> Option<&str> {
        self.body.compliance_level.as_ref().and_then(Value::as_str)
    }

    pub fn timestamp(&self) -> Result<FieldText<'_>, ResponseShapeError> {
        required(&self.body.timestamp, "timestamp")
    }

    required_section!(spf, dkim, dmarc, mx);

    /// BIMI sub-record; `None` when absent, null, empty or not an object.
    pub fn bimi(&self) -> Option<&CheckRecord> {
        self.body.bimi.as_ref().filter(|r| !r.is_empty())
    }

    /// MTA-STS sub-record; `None` when absent, null, empty or not an object.
    pub fn mtasts(&self) -> Option<&CheckRecord> {
        self.body.mtasts.as_ref().filter(|r| !r.is_empty())
    }
}

/// A domain that could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub domain: String,
    /// Description of the transport or protocol failure
    pub error: String,
    /// Category used in bulk run statistics
    pub kind: ErrorType,
}

impl CheckFailure {
    pub fn from_api_error(domain: &str, error: &ApiError) -> Self {
        Self {
            domain: domain.to_string(),
            error: error_chain(error),
            kind: categorize_api_error(error),
        }
    }

    /// The failure in the service's own error shape.
    pub fn to_json(&self) -> Value {
        json!({
            "domain": self.domain,
            "error": self.error,
            "overallScore": 0,
            "complianceLevel": ERROR_COMPLIANCE_LEVEL,
        })
    }
}

/// Result of checking one domain.
#[derive(Debug, Clone)]
pub enum CheckResult {
    Success(SecurityReport),
    Error(CheckFailure),
}

impl CheckResult {
    /// Interprets a decoded 2xx response body.
    ///
    /// A body carrying an `error` key is the service reporting a failure and
    /// becomes the `Error` variant.
    pub fn from_response(domain: &str, body: Value) -> Result<Self, ApiError> {
        if let Some(error) = body.as_object().and_then(|obj| obj.get("error")) {
            let error = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let domain = body
                .get("domain")
                .and_then(Value::as_str)
                .unwrap_or(domain)
                .to_string();
            return Ok(CheckResult::Error(CheckFailure {
                domain,
                error,
                kind: ErrorType::ServiceReportedError,
            }));
        }
        SecurityReport::from_value(body).map(CheckResult::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CheckResult::Error(_))
    }

    /// Overall score; error results count as 0.
    pub fn score(&self) -> Result<f64, ResponseShapeError> {
        match self {
            CheckResult::Success(report) => report
                .overall_score()?
                .as_value()
                .as_f64()
                .ok_or_else(|| ResponseShapeError::missing("overallScore")),
            CheckResult::Error(_) => Ok(0.0),
        }
    }

    pub fn compliance_level(&self) -> Option<&str> {
        match self {
            CheckResult::Success(report) => report.compliance_level_opt(),
            CheckResult::Error(_) => Some(ERROR_COMPLIANCE_LEVEL),
        }
    }

    /// The result as JSON: the raw service body, or the error shape.
    pub fn to_json(&self) -> Value {
        match self {
            CheckResult::Success(report) => report.raw().clone(),
            CheckResult::Error(failure) => failure.to_json(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
