//! Wait-and-act helpers - bounded polling for UI elements
//!
//! Every test case goes through this layer. A timeout is an expected
//! outcome here: it is converted into a sentinel (`None` / `false`) with a
//! `warn!` diagnostic instead of propagating, so call sites choose between
//! a hard assertion failure and tolerant branching. Genuine driver faults
//! outside the polling window still surface as errors elsewhere.

use std::future::Future;
use std::time::{Duration, Instant};

use thirtyfour::prelude::*;
use tokio::time::sleep;
use tracing::warn;

/// Default wait for visibility and clickability checks
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default wait for the weaker presence-only check
pub const DEFAULT_PRESENCE_TIMEOUT: Duration = Duration::from_secs(10);

/// Interval between element probes
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Poll `probe` until it yields a value or `timeout` elapses.
///
/// The probe always runs at least once, and the loop returns within one
/// poll interval of the deadline.
pub(crate) async fn poll_until<T, F, Fut>(timeout: Duration, mut probe: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let start = Instant::now();
    loop {
        if let Some(value) = probe().await {
            return Some(value);
        }
        if start.elapsed() >= timeout {
            return None;
        }
        sleep(POLL_INTERVAL).await;
    }
}

/// Wait for an element to be present and displayed, with the default timeout.
pub async fn wait_for_visible(driver: &WebDriver, by: By) -> Option<WebElement> {
    wait_for_visible_within(driver, by, DEFAULT_WAIT_TIMEOUT).await
}

/// Wait for an element to be present and displayed.
///
/// Returns the element handle, or `None` once `timeout` elapses.
pub async fn wait_for_visible_within(
    driver: &WebDriver,
    by: By,
    timeout: Duration,
) -> Option<WebElement> {
    let found = poll_until(timeout, || {
        let by = by.clone();
        async move {
            match driver.find(by).await {
                Ok(element) if is_displayed(&element).await => Some(element),
                _ => None,
            }
        }
    })
    .await;

    if found.is_none() {
        warn!("Timeout: element {:?} not visible after {:?}", by, timeout);
    }
    found
}

/// Wait for an element to be attached to the page, with the default timeout.
pub async fn wait_for_present(driver: &WebDriver, by: By) -> Option<WebElement> {
    wait_for_present_within(driver, by, DEFAULT_PRESENCE_TIMEOUT).await
}

/// Wait for an element to be attached to the page.
///
/// Weaker than [`wait_for_visible_within`]: returns as soon as the element
/// exists in the DOM, which may precede visibility. Callers accept that an
/// action against a present-but-not-yet-visible element can fail and is
/// not retried.
pub async fn wait_for_present_within(
    driver: &WebDriver,
    by: By,
    timeout: Duration,
) -> Option<WebElement> {
    let found = poll_until(timeout, || {
        let by = by.clone();
        async move { driver.find(by).await.ok() }
    })
    .await;

    if found.is_none() {
        warn!("Timeout: element {:?} not present after {:?}", by, timeout);
    }
    found
}

/// Wait for an element to be clickable and click it, with the default timeout.
pub async fn click_when_ready(driver: &WebDriver, by: By) -> bool {
    click_when_ready_within(driver, by, DEFAULT_WAIT_TIMEOUT).await
}

/// Wait for an element to be present, displayed and enabled, then click it.
///
/// Returns `true` once the click is issued, `false` if the element never
/// became ready within `timeout`.
pub async fn click_when_ready_within(driver: &WebDriver, by: By, timeout: Duration) -> bool {
    let target = poll_until(timeout, || {
        let by = by.clone();
        async move {
            match driver.find(by).await {
                Ok(element) if is_interactable(&element).await => Some(element),
                _ => None,
            }
        }
    })
    .await;

    let Some(element) = target else {
        warn!("Timeout: clickable element {:?} not found after {:?}", by, timeout);
        return false;
    };

    match element.click().await {
        Ok(()) => true,
        Err(e) => {
            // Stale or obscured between the probe and the click; reported
            // the same as never-ready.
            warn!("Click on {:?} failed after it became ready: {}", by, e);
            false
        }
    }
}

async fn is_displayed(element: &WebElement) -> bool {
    matches!(element.is_displayed().await, Ok(true))
}

async fn is_interactable(element: &WebElement) -> bool {
    matches!(element.is_displayed().await, Ok(true))
        && matches!(element.is_enabled().await, Ok(true))
}
