//! Suite bookkeeping - sequential case execution, results, reporting

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thirtyfour::WebElement;
use tracing::{error, info, warn};

use crate::error::{E2eError, E2eResult};
use crate::session::Session;

/// Result of running a single test case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub name: String,
    pub passed: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Result of running the whole suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub finished_at: String,
    pub results: Vec<CaseResult>,
}

impl SuiteSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Sequential case runner bound to one shared browser session
pub struct Suite<'a> {
    session: &'a Session,
    output_dir: PathBuf,
    results: Vec<CaseResult>,
    started: Instant,
}

impl<'a> Suite<'a> {
    pub fn new(session: &'a Session, output_dir: impl Into<PathBuf>) -> E2eResult<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)?;

        Ok(Self {
            session,
            output_dir,
            results: Vec::new(),
            started: Instant::now(),
        })
    }

    /// Run one case to completion and record its outcome.
    ///
    /// A failing case halts only itself; the next case starts from
    /// whatever page state the application was left in and must establish
    /// its own preconditions.
    pub async fn run<F>(&mut self, name: &str, case: F)
    where
        F: Future<Output = E2eResult<()>>,
    {
        info!("Running case: {}", name);
        let start = Instant::now();
        let outcome = case.await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(()) => {
                info!("✓ {} ({} ms)", name, duration_ms);
                self.results.push(CaseResult {
                    name: name.to_string(),
                    passed: true,
                    duration_ms,
                    error: None,
                });
            }
            Err(e) => {
                error!("✗ {} - {}", name, e);
                self.capture_failure(name).await;
                self.results.push(CaseResult {
                    name: name.to_string(),
                    passed: false,
                    duration_ms,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    /// Screenshot the page a case failed on
    async fn capture_failure(&self, name: &str) {
        let path = self.output_dir.join(format!("{}-failed.png", name));
        match self.session.driver().screenshot(&path).await {
            Ok(()) => info!("Failure screenshot: {}", path.display()),
            Err(e) => warn!("Could not capture failure screenshot: {}", e),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Finish the run: log totals and return the summary.
    pub fn finish(self) -> SuiteSummary {
        let duration_ms = self.started.elapsed().as_millis() as u64;
        let passed = self.results.iter().filter(|r| r.passed).count();
        let failed = self.results.len() - passed;

        info!("");
        info!(
            "Suite results: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        SuiteSummary {
            total: self.results.len(),
            passed,
            failed,
            duration_ms,
            finished_at: chrono::Utc::now().to_rfc3339(),
            results: self.results,
        }
    }
}

/// Write a suite summary to `<dir>/test-results.json`
pub fn write_results(summary: &SuiteSummary, dir: &Path) -> E2eResult<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join("test-results.json");
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(&path, json)?;

    info!("Results written to: {}", path.display());
    Ok(path)
}

/// Promote a wait sentinel into the element it should have produced.
pub fn require<T>(found: Option<T>, what: &str) -> E2eResult<T> {
    found.ok_or_else(|| E2eError::AssertionFailed(format!("{} not found", what)))
}

/// Assert an element is currently displayed.
pub async fn require_displayed(element: &WebElement, what: &str) -> E2eResult<()> {
    if element.is_displayed().await? {
        Ok(())
    } else {
        Err(E2eError::AssertionFailed(format!("{} not visible", what)))
    }
}

/// Assert an arbitrary post-condition.
pub fn require_that(condition: bool, what: &str) -> E2eResult<()> {
    if condition {
        Ok(())
    } else {
        Err(E2eError::AssertionFailed(what.to_string()))
    }
}
