//! JSON passthrough output.

use serde_json::Value;

/// Re-serializes a service response with 2-space indentation.
///
/// Key order is preserved as received.
pub fn render_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indented_and_order_preserving() {
        let value: Value =
            serde_json::from_str(r#"{"domain":"example.com","overallScore":85,"spf":{"status":"pass"}}"#)
                .unwrap();
        let out = render_json(&value).unwrap();
        assert_eq!(
            out,
            "{\n  \"domain\": \"example.com\",\n  \"overallScore\": 85,\n  \"spf\": {\n    \"status\": \"pass\"\n  }\n}"
        );
    }
}
