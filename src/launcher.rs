//! Opening result URLs in a browser.
//!
//! Activation is a two-step strategy: the configured browser first, then
//! the operating system's generic URL handler. Only the "no usable browser
//! handler" failure falls through to the second step. Handlers return as
//! soon as the process is spawned and never wait on it.

use std::io::ErrorKind;
use std::process::{Command, Stdio};
use std::thread;

use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable naming the user's preferred browser.
pub const BROWSER_ENV: &str = "BROWSER";

/// Why a handler could not open a URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// No browser is configured, or its executable does not exist.
    #[error("no usable browser handler: {0}")]
    NoHandler(String),

    /// The handler exists but opening failed.
    #[error("{0}")]
    Failed(String),
}

/// Something that can open a URL.
pub trait UrlHandler: Send + Sync {
    /// Human-readable name used in log messages.
    fn name(&self) -> String;

    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Launches a specific browser executable with the URL as its argument.
///
/// With no explicit executable the `BROWSER` environment variable is used.
#[derive(Debug, Clone, Default)]
pub struct BrowserHandler {
    browser: Option<String>,
}

impl BrowserHandler {
    pub fn new(browser: Option<String>) -> Self {
        Self { browser }
    }

    fn executable(&self) -> Option<String> {
        self.browser
            .clone()
            .filter(|b| !b.trim().is_empty())
            .or_else(|| std::env::var(BROWSER_ENV).ok().filter(|b| !b.trim().is_empty()))
    }
}

impl UrlHandler for BrowserHandler {
    fn name(&self) -> String {
        self.executable().unwrap_or_else(|| "default browser".to_string())
    }

    fn open(&self, url: &str) -> Result<(), LaunchError> {
        let exe = self
            .executable()
            .ok_or_else(|| LaunchError::NoHandler("no browser configured".to_string()))?;

        debug!(browser = %exe, url, "launching browser");
        let mut cmd = Command::new(&exe);
        cmd.arg(url);
        launch(cmd, &exe).map_err(|e| match e {
            LaunchError::NoHandler(_) => {
                LaunchError::NoHandler(format!("browser executable '{}' not found", exe))
            }
            other => other,
        })
    }
}

/// Spawns `cmd` with null stdio and returns without waiting for it.
///
/// The child is reaped on a background thread so it never lingers as a
/// zombie. A non-zero exit is only logged.
fn launch(mut cmd: Command, what: &str) -> Result<(), LaunchError> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => LaunchError::NoHandler(format!("'{}' not found", what)),
            _ => LaunchError::Failed(format!("failed to launch '{}': {}", what, e)),
        })?;

    let what = what.to_string();
    thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => warn!("'{}' exited with {}", what, status),
        Ok(_) => {}
        Err(e) => warn!("failed to wait for '{}': {}", what, e),
    });
    Ok(())
}

/// Asks the operating system to open the URL with whatever it associates
/// with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHandler;

impl SystemHandler {
    fn program() -> &'static str {
        if cfg!(target_os = "windows") {
            "cmd"
        } else if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        }
    }

    fn command(url: &str) -> Command {
        let mut cmd = Command::new(Self::program());
        if cfg!(target_os = "windows") {
            cmd.args(["/C", "start", "", url]);
        } else {
            cmd.arg(url);
        }
        cmd
    }
}

impl UrlHandler for SystemHandler {
    fn name(&self) -> String {
        Self::program().to_string()
    }

    fn open(&self, url: &str) -> Result<(), LaunchError> {
        launch(Self::command(url), &self.name())
    }
}

/// Tries `primary`, falling back to `fallback` only when `primary` has no
/// usable handler.
pub struct FallbackOpener {
    primary: Box<dyn UrlHandler>,
    fallback: Box<dyn UrlHandler>,
}

impl FallbackOpener {
    pub fn new(primary: Box<dyn UrlHandler>, fallback: Box<dyn UrlHandler>) -> Self {
        Self { primary, fallback }
    }

    /// The configured browser followed by the OS generic open.
    pub fn system(browser: Option<String>) -> Self {
        Self::new(
            Box::new(BrowserHandler::new(browser)),
            Box::new(SystemHandler),
        )
    }
}

impl UrlHandler for FallbackOpener {
    fn name(&self) -> String {
        self.primary.name()
    }

    fn open(&self, url: &str) -> Result<(), LaunchError> {
        match self.primary.open(url) {
            Ok(()) => Ok(()),
            Err(LaunchError::NoHandler(reason)) => {
                warn!(
                    "{} unavailable ({}), trying {}",
                    self.primary.name(),
                    reason,
                    self.fallback.name()
                );
                self.fallback.open(url)
            }
            Err(e) => Err(e),
        }
    }
}
