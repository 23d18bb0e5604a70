use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub try_this: Option<String>,
}

/// Classify a command failure into a stable error code with a recovery hint.
pub fn envelope_for(error: &anyhow::Error) -> ErrorEnvelope {
    let message = error.to_string();

    if message.contains("unavailable") {
        return ErrorEnvelope {
            code: "RESOURCE_UNAVAILABLE".to_string(),
            message,
            try_this: Some(
                "check that the resource URL or file path exists and is reachable".to_string(),
            ),
        };
    }

    if message.contains("malformed document") {
        return ErrorEnvelope {
            code: "MALFORMED_DOCUMENT".to_string(),
            message,
            try_this: Some("confirm the resource body parses as JSON".to_string()),
        };
    }

    if message.contains("did not match any node") {
        return ErrorEnvelope {
            code: "PATH_NOT_FOUND".to_string(),
            message,
            try_this: Some(
                "run `payload-compare tree <SOURCE>` to list valid node paths".to_string(),
            ),
        };
    }

    if message.contains("pane width") {
        return ErrorEnvelope {
            code: "INVALID_ARGUMENT".to_string(),
            message,
            try_this: Some("pass a wider --pane-width".to_string()),
        };
    }

    if message.contains("clipboard error") {
        return ErrorEnvelope {
            code: "CLIPBOARD_UNAVAILABLE".to_string(),
            message,
            try_this: Some(
                "clipboard access needs a desktop session; pipe `tree` output instead".to_string(),
            ),
        };
    }

    ErrorEnvelope {
        code: "COMMAND_FAILED".to_string(),
        message,
        try_this: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn classifies_load_failures() {
        let envelope = envelope_for(&anyhow!(
            "resource a.json unavailable: status 404 Not Found"
        ));
        assert_eq!(envelope.code, "RESOURCE_UNAVAILABLE");
        assert!(envelope.try_this.is_some());

        let envelope = envelope_for(&anyhow!(
            "resource a.json returned a malformed document: expected value at line 1 column 1"
        ));
        assert_eq!(envelope.code, "MALFORMED_DOCUMENT");
    }

    #[test]
    fn classifies_path_and_argument_failures() {
        let envelope = envelope_for(&anyhow!("path '$.data.missing' did not match any node"));
        assert_eq!(envelope.code, "PATH_NOT_FOUND");

        let envelope = envelope_for(&anyhow!("pane width 5 is too narrow"));
        assert_eq!(envelope.code, "INVALID_ARGUMENT");
    }

    #[test]
    fn unknown_failures_fall_back_to_command_failed() {
        let envelope = envelope_for(&anyhow!("something else broke"));
        assert_eq!(envelope.code, "COMMAND_FAILED");
        assert!(envelope.try_this.is_none());
    }
}
