//! Browser session management with guaranteed teardown.
//!
//! Provides scoped ownership of one headless browser process and one page:
//! - Launch, navigate, and hand the page to scenario steps
//! - A single release point ([`BrowserSession::close`]) used on every exit path
//! - Handler event loop runs on its own task for the session's lifetime

use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::page::ReloadParams;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::config;
use crate::driver::types::{ScenarioError, ScenarioResult};

/// An exclusively owned browser process with exactly one page.
///
/// No two scenarios share a session; acquiring launches a fresh browser and
/// closing releases it. The scenario runner closes the session on both the
/// success and failure paths, so a failed assertion or timeout never leaks a
/// browser process.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
    target_url: String,
}

impl BrowserSession {
    /// Launch a headless browser, open a single page, and navigate to `target_url`.
    ///
    /// The page's load event is awaited under the configured navigation
    /// timeout. If page creation or navigation fails, the browser process is
    /// torn down before the error propagates.
    pub async fn acquire(target_url: &str) -> ScenarioResult<Self> {
        let cfg = config::get();

        let browser_config = BrowserConfig::builder()
            .window_size(cfg.browser.viewport_width, cfg.browser.viewport_height)
            .no_sandbox() // CI containers
            .build()
            .map_err(ScenarioError::Launch)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| ScenarioError::Launch(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = match open_page(&browser, target_url, cfg.waits.nav_timeout()).await {
            Ok(page) => page,
            Err(err) => {
                let mut browser = browser;
                let _ = browser.close().await;
                let _ = browser.wait().await;
                handler_task.abort();
                return Err(err);
            }
        };

        Ok(Self {
            browser,
            page,
            handler: handler_task,
            target_url: target_url.to_string(),
        })
    }

    /// The page owned by this session
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The URL this session was navigated to on acquisition
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    /// Reload the page and wait for its load lifecycle event.
    ///
    /// Used after storage-based seeding: the application only reads
    /// persistent storage at initialization.
    pub async fn reload(&self) -> ScenarioResult<()> {
        let nav_timeout = config::get().waits.nav_timeout();
        self.page.execute(ReloadParams::default()).await?;
        match timeout(nav_timeout, self.page.wait_for_navigation()).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(ScenarioError::Navigation {
                url: self.target_url.clone(),
                reason: e.to_string(),
            }),
            Err(_) => Err(ScenarioError::Timeout {
                what: format!("load event after reload of {}", self.target_url),
                budget: nav_timeout,
            }),
        }
    }

    /// Release the browser process.
    ///
    /// Best-effort: a failed close is reported but does not abort the caller,
    /// which may itself be on an error path.
    pub async fn close(mut self) {
        if let Err(err) = self.browser.close().await {
            eprintln!("Warning: browser close failed: {}", err);
        }
        let _ = self.browser.wait().await;
        self.handler.abort();
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        // Last resort if close() was never reached; the browser's own drop
        // kills the child process.
        self.handler.abort();
    }
}

async fn open_page(
    browser: &Browser,
    url: &str,
    nav_timeout: Duration,
) -> ScenarioResult<Page> {
    let page = browser
        .new_page(url)
        .await
        .map_err(|e| ScenarioError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let nav = timeout(nav_timeout, page.wait_for_navigation())
        .await
        .map(|result| result.map(|_| ()));
    match nav {
        Ok(Ok(())) => Ok(page),
        Ok(Err(e)) => Err(ScenarioError::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Err(ScenarioError::Timeout {
            what: format!("load event for {}", url),
            budget: nav_timeout,
        }),
    }
}
