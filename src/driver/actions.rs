//! Scripted interactions, state assertions, and screenshot capture.
//!
//! All element inspection goes through a single page-context query so
//! assertion failures can report what was actually observed (absent, hidden,
//! disabled) instead of a bare protocol error.

use std::fs;
use std::path::Path;

use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::ScreenshotParams;
use serde::Deserialize;

use crate::driver::types::{ScenarioError, ScenarioResult};
use crate::runner::{self, CaptureArtifact};
use crate::session::BrowserSession;

/// Observed state of a DOM element
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ElementState {
    /// Element matched the selector
    pub present: bool,
    /// Element has a layout box and is not hidden by computed style
    pub visible: bool,
    /// Element's `disabled` property is true
    pub disabled: bool,
}

impl ElementState {
    /// Human-readable description for assertion messages
    pub fn describe(&self) -> String {
        if !self.present {
            "absent".to_string()
        } else if !self.visible {
            "present but hidden".to_string()
        } else if self.disabled {
            "visible but disabled".to_string()
        } else {
            "visible and enabled".to_string()
        }
    }
}

/// Quote a string as a JavaScript string literal
pub(crate) fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Inspect an element's presence, visibility, and disabled state in page context
pub async fn element_state(
    session: &BrowserSession,
    selector: &str,
) -> ScenarioResult<ElementState> {
    let script = format!(
        r#"(() => {{
            const el = document.querySelector({sel});
            if (!el) return {{ present: false, visible: false, disabled: false }};
            const rect = el.getBoundingClientRect();
            const style = window.getComputedStyle(el);
            const visible = rect.width > 0 && rect.height > 0
                && style.visibility !== 'hidden' && style.display !== 'none';
            return {{ present: true, visible, disabled: el.disabled === true }};
        }})()"#,
        sel = js_string(selector)
    );

    let result = session.page().evaluate(script).await?;
    result
        .into_value::<ElementState>()
        .map_err(|e| ScenarioError::Cdp(CdpError::Serde(e)))
}

/// Click a located element.
///
/// The element's state is checked first so a missing target fails with the
/// selector rather than a protocol error.
pub async fn click(session: &BrowserSession, selector: &str) -> ScenarioResult<()> {
    let state = element_state(session, selector).await?;
    if !state.present {
        return Err(ScenarioError::Assertion {
            selector: selector.to_string(),
            expected: "element present for click".to_string(),
            actual: state.describe(),
        });
    }

    let element = session.page().find_element(selector).await?;
    element.click().await?;
    Ok(())
}

/// Scroll a located element into view
pub async fn scroll_into_view(session: &BrowserSession, selector: &str) -> ScenarioResult<()> {
    let state = element_state(session, selector).await?;
    if !state.present {
        return Err(ScenarioError::Assertion {
            selector: selector.to_string(),
            expected: "element present for scroll".to_string(),
            actual: state.describe(),
        });
    }

    let element = session.page().find_element(selector).await?;
    element.scroll_into_view().await?;
    Ok(())
}

/// Fill an input and dispatch change notifications.
///
/// Sets the value in page context and dispatches bubbling `input` and
/// `change` events, mirroring what the application observes on a user edit.
pub async fn fill(session: &BrowserSession, selector: &str, value: &str) -> ScenarioResult<()> {
    let script = format!(
        r#"(() => {{
            const el = document.querySelector({sel});
            if (!el) return false;
            el.value = {val};
            el.dispatchEvent(new Event('input', {{ bubbles: true }}));
            el.dispatchEvent(new Event('change', {{ bubbles: true }}));
            return true;
        }})()"#,
        sel = js_string(selector),
        val = js_string(value)
    );

    let result = session.page().evaluate(script).await?;
    let filled = result.into_value::<bool>().unwrap_or(false);
    if !filled {
        return Err(ScenarioError::Assertion {
            selector: selector.to_string(),
            expected: "input present for fill".to_string(),
            actual: "absent".to_string(),
        });
    }
    Ok(())
}

/// Invoke an application-exposed global expression directly.
///
/// Returns the expression's value, or `null` when it yields `undefined`.
pub async fn invoke(
    session: &BrowserSession,
    expr: &str,
) -> ScenarioResult<serde_json::Value> {
    let result = session.page().evaluate(expr).await?;
    Ok(result
        .into_value::<serde_json::Value>()
        .unwrap_or(serde_json::Value::Null))
}

/// Assert an element is present and visible
pub async fn assert_visible(session: &BrowserSession, selector: &str) -> ScenarioResult<()> {
    let state = element_state(session, selector).await?;
    if !(state.present && state.visible) {
        return Err(ScenarioError::Assertion {
            selector: selector.to_string(),
            expected: "visible".to_string(),
            actual: state.describe(),
        });
    }
    Ok(())
}

/// Assert an element is visible and not disabled
pub async fn assert_enabled(session: &BrowserSession, selector: &str) -> ScenarioResult<()> {
    let state = element_state(session, selector).await?;
    if !(state.present && state.visible && !state.disabled) {
        return Err(ScenarioError::Assertion {
            selector: selector.to_string(),
            expected: "visible and enabled".to_string(),
            actual: state.describe(),
        });
    }
    Ok(())
}

/// Assert an element is present and disabled
pub async fn assert_disabled(session: &BrowserSession, selector: &str) -> ScenarioResult<()> {
    let state = element_state(session, selector).await?;
    if !(state.present && state.disabled) {
        return Err(ScenarioError::Assertion {
            selector: selector.to_string(),
            expected: "disabled".to_string(),
            actual: state.describe(),
        });
    }
    Ok(())
}

/// Capture a PNG screenshot to the deterministic artifact path for `name`.
///
/// The output directory is created if absent; an existing artifact from a
/// previous run is overwritten.
pub async fn capture(session: &BrowserSession, name: &str) -> ScenarioResult<CaptureArtifact> {
    let path = runner::artifact_path(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    capture_to(session, &path).await?;

    Ok(CaptureArtifact {
        name: name.to_string(),
        path,
    })
}

async fn capture_to(session: &BrowserSession, path: &Path) -> ScenarioResult<()> {
    session
        .page()
        .save_screenshot(
            ScreenshotParams::builder()
                .format(CaptureScreenshotFormat::Png)
                .build(),
            path,
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_quotes_and_escapes() {
        assert_eq!(js_string("#boss-card"), "\"#boss-card\"");
        assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn test_element_state_describe() {
        let absent = ElementState {
            present: false,
            visible: false,
            disabled: false,
        };
        assert_eq!(absent.describe(), "absent");

        let hidden = ElementState {
            present: true,
            visible: false,
            disabled: false,
        };
        assert_eq!(hidden.describe(), "present but hidden");

        let disabled = ElementState {
            present: true,
            visible: true,
            disabled: true,
        };
        assert_eq!(disabled.describe(), "visible but disabled");

        let enabled = ElementState {
            present: true,
            visible: true,
            disabled: false,
        };
        assert_eq!(enabled.describe(), "visible and enabled");
    }
}
