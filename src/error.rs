use std::process::ExitCode;
use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DdnsError>;

/// Every way a run can stop early. Each variant names the stage that failed.
#[derive(Error, Debug)]
pub enum DdnsError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to set up HTTP client: {0}")]
    HttpClient(String),

    #[error("IPv4 lookup failed: {0}")]
    Lookup(String),

    #[error("Failed to fetch zone {zone}: {message}")]
    ZoneFetch { zone: String, message: String },

    #[error("Failed to update {rtype} {name}: {message}")]
    RecordWrite {
        name: String,
        rtype: String,
        message: String,
    },
}

impl DdnsError {
    /// Process status for this failure: 2 for bad configuration, 1 otherwise.
    pub fn status(&self) -> u8 {
        match self {
            DdnsError::Configuration(_) => 2,
            _ => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

/// Renders a transport failure without the stage prefix, which the caller adds.
pub fn describe_http_error(err: &reqwest::Error, timeout: Duration) -> String {
    if err.is_timeout() {
        format!("timed out after {}s", timeout.as_secs_f64())
    } else if let Some(status) = err.status() {
        format!("HTTP {}", status)
    } else if err.is_decode() {
        format!("invalid response body: {}", err)
    } else {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors_exit_with_two() {
        let err = DdnsError::Configuration("PDNS_API_URL must be set".into());
        assert_eq!(err.status(), 2);
    }

    #[test]
    fn runtime_errors_exit_with_one() {
        let errors = [
            DdnsError::HttpClient("TLS backend unavailable".into()),
            DdnsError::Lookup("timed out after 5s".into()),
            DdnsError::ZoneFetch {
                zone: "example.net.".into(),
                message: "HTTP 500 Internal Server Error".into(),
            },
            DdnsError::RecordWrite {
                name: "dyn.example.net.".into(),
                rtype: "A".into(),
                message: "HTTP 422 Unprocessable Entity".into(),
            },
        ];
        for err in errors {
            assert_eq!(err.status(), 1);
        }
    }

    #[test]
    fn messages_name_the_failed_stage() {
        let err = DdnsError::ZoneFetch {
            zone: "example.net.".into(),
            message: "HTTP 404 Not Found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch zone example.net.: HTTP 404 Not Found"
        );
    }
}
