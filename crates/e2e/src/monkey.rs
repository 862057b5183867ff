//! Randomized UI crawl - unleash a gremlins.js horde and collect a report
//!
//! Hooks page errors and console output, lets gremlins.js hammer the UI
//! for a bounded window, then reads the accumulated report back out of
//! the page.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::E2eResult;
use crate::session::Session;

const SETUP_SCRIPT: &str = r#"
window.__monkeyReport = { errors: [], consoleErrors: [], visitedUrls: [window.location.href] };

window.addEventListener('error', function (e) {
  window.__monkeyReport.errors.push(e.message + ' @ ' + e.filename + ':' + e.lineno);
});

var origError = console.error;
console.error = function () {
  var parts = Array.prototype.map.call(arguments, String);
  window.__monkeyReport.consoleErrors.push(parts.join(' '));
  origError.apply(console, arguments);
};

var s = document.createElement('script');
s.src = 'https://unpkg.com/gremlins.js';
s.onload = function () {
  window.__gremlinsHorde = gremlins.createHorde();
  window.__gremlinsHorde.unleash();
};
document.head.appendChild(s);
"#;

const COLLECT_SCRIPT: &str = r#"
if (window.__gremlinsHorde) {
  window.__gremlinsHorde.stop();
}
window.__monkeyReport.visitedUrls.push(window.location.href);
return window.__monkeyReport;
"#;

/// What the horde saw while it ran
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonkeyReport {
    /// Uncaught page errors, as `message @ file:line`
    pub errors: Vec<String>,

    /// Everything the page wrote through `console.error`
    pub console_errors: Vec<String>,

    /// URLs the crawl started and ended on
    pub visited_urls: Vec<String>,
}

/// Run a gremlins horde against the current page for `duration`.
pub async fn unleash(session: &Session, duration: Duration) -> E2eResult<MonkeyReport> {
    info!("Unleashing gremlins horde for {:?}", duration);

    session.driver().execute(SETUP_SCRIPT, vec![]).await?;
    sleep(duration).await;

    let ret = session.driver().execute(COLLECT_SCRIPT, vec![]).await?;
    let report: MonkeyReport = ret.convert()?;

    if !report.errors.is_empty() {
        warn!("Monkey crawl surfaced {} page error(s)", report.errors.len());
    }

    Ok(report)
}

/// Write a monkey report to `<dir>/monkey-report.json`
pub fn write_report(report: &MonkeyReport, dir: &Path) -> E2eResult<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join("monkey-report.json");
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json)?;

    info!("Monkey report written to: {}", path.display());
    Ok(path)
}
