use std::time::Duration;

/// Result type for scenario operations
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Error types for scenario operations
///
/// None of these are recovered locally: any failure aborts the current
/// scenario, the browser session is still released, and the process exits
/// non-zero with the message below.
#[derive(Debug)]
pub enum ScenarioError {
    /// The browser process or page could not be started
    Launch(String),

    /// The target URL was unreachable or failed to load
    Navigation {
        /// URL that was being navigated to
        url: String,
        /// Underlying failure description
        reason: String,
    },

    /// The injected seeding script threw or the storage write failed
    Seeding(String),

    /// A bounded wait exceeded its budget
    Timeout {
        /// What was being waited on (predicate expression or event name)
        what: String,
        /// The budget that was exceeded
        budget: Duration,
    },

    /// Observed UI state did not match the expected pre/postcondition
    Assertion {
        /// Selector of the element under assertion
        selector: String,
        /// Expected condition
        expected: String,
        /// Actual observed state
        actual: String,
    },

    /// DevTools protocol transport error
    Cdp(chromiumoxide::error::CdpError),

    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Launch(msg) => write!(f, "Launch failure: {}", msg),
            ScenarioError::Navigation { url, reason } => {
                write!(f, "Navigation failure for {}: {}", url, reason)
            }
            ScenarioError::Seeding(msg) => write!(f, "Seeding failure: {}", msg),
            ScenarioError::Timeout { what, budget } => {
                write!(f, "Timed out after {:?} waiting for: {}", budget, what)
            }
            ScenarioError::Assertion {
                selector,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Assertion failure on {}: expected {}, got {}",
                    selector, expected, actual
                )
            }
            ScenarioError::Cdp(err) => write!(f, "Browser protocol error: {}", err),
            ScenarioError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Cdp(err) => Some(err),
            ScenarioError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScenarioError {
    fn from(err: std::io::Error) -> Self {
        ScenarioError::Io(err)
    }
}

impl From<chromiumoxide::error::CdpError> for ScenarioError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        ScenarioError::Cdp(err)
    }
}

impl From<image::ImageError> for ScenarioError {
    fn from(err: image::ImageError) -> Self {
        ScenarioError::Io(std::io::Error::other(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_message_names_selector_and_conditions() {
        let err = ScenarioError::Assertion {
            selector: "#skill-trigger-button".to_string(),
            expected: "visible and enabled".to_string(),
            actual: "present but disabled".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("#skill-trigger-button"));
        assert!(msg.contains("visible and enabled"));
        assert!(msg.contains("present but disabled"));
    }

    #[test]
    fn test_timeout_message_includes_budget() {
        let err = ScenarioError::Timeout {
            what: "window.SkillManager && window.ClassManager".to_string(),
            budget: Duration::from_secs(10),
        };
        assert!(err.to_string().contains("10s"));
        assert!(err.to_string().contains("SkillManager"));
    }
}
