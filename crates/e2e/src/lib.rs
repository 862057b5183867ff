//! Travner E2E Test Suite
//!
//! This crate provides a browser-driven E2E test harness that:
//! - Spawns chromedriver as a subprocess (or attaches to an existing one)
//! - Drives the Travner web app through the WebDriver protocol
//! - Wraps every element interaction in bounded wait-and-retry helpers
//! - Records per-case results as JSON, with screenshots on failure
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 E2E Suite Binary (tests/e2e.rs)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Suite                                                      │
//! │    ├── ChromedriverHandle::spawn() -> driver process        │
//! │    ├── Session::connect() -> shared browser session         │
//! │    ├── run(case) x N, sequentially                          │
//! │    └── finish() -> SuiteSummary -> test-results.json        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Case (async fn)                                            │
//! │    ├── session.goto("/login")                               │
//! │    ├── wait_for_visible / wait_for_present -> Option<elem>  │
//! │    ├── click_when_ready -> bool                             │
//! │    ├── flows::login(session, email, password)               │
//! │    └── require / require_displayed -> hard failure          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Timeouts inside the wait helpers are soft failures (sentinels plus a
//! diagnostic); assertion violations and driver faults are hard failures
//! that end only the current case.

pub mod data;
pub mod driver;
pub mod error;
pub mod flows;
pub mod monkey;
pub mod runner;
pub mod session;
pub mod wait;

pub use data::TestData;
pub use driver::ChromedriverHandle;
pub use error::{E2eError, E2eResult};
pub use runner::{Suite, SuiteSummary};
pub use session::Session;
