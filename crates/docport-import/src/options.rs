//! Per-import options.

use serde::Deserialize;

/// Caller-supplied import options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportOptions {
    /// Run the text and FAQ rewrite passes.
    pub enhance: bool,
    /// Audience hint forwarded to the text rewriter.
    pub audience: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let options: ImportOptions = serde_json::from_str("{}").expect("empty options");

        assert_eq!(options, ImportOptions::default());
        assert!(!options.enhance);
    }

    #[test]
    fn test_camel_case_fields() {
        let options: ImportOptions =
            serde_json::from_str(r#"{"enhance": true, "audience": "support team"}"#)
                .expect("full options");

        assert!(options.enhance);
        assert_eq!(options.audience.as_deref(), Some("support team"));
    }
}
