//! Shared user flows composed from the wait helpers

use thirtyfour::prelude::*;
use tracing::warn;

use crate::error::E2eResult;
use crate::session::Session;
use crate::wait::wait_for_visible;

/// Perform email/password login.
///
/// Resolves the email field, password field and submit button before
/// typing anything. If any of the three is missing, the attempt is
/// abandoned without clicking submit: fields may hold partial input, but
/// an incomplete form is never submitted. Success is observed by the
/// caller through post-navigation page state.
pub async fn login(session: &Session, email: &str, password: &str) -> E2eResult<()> {
    session.goto("/login").await?;

    let driver = session.driver();
    let email_input = wait_for_visible(driver, By::Id("email")).await;
    let password_input = wait_for_visible(driver, By::Id("current-password")).await;
    let login_btn = wait_for_visible(driver, By::Id("login-btn")).await;

    let (Some(email_input), Some(password_input), Some(login_btn)) =
        (email_input, password_input, login_btn)
    else {
        warn!("Login aborted: missing form elements");
        return Ok(());
    };

    email_input.clear().await?;
    email_input.send_keys(email).await?;
    password_input.clear().await?;
    password_input.send_keys(password).await?;
    login_btn.click().await?;

    Ok(())
}
