//! Password management cases

use std::time::Duration;

use thirtyfour::prelude::*;
use tokio::time::sleep;
use tracing::{debug, info};

use travner_e2e::flows::login;
use travner_e2e::runner::{require, require_displayed};
use travner_e2e::session::Session;
use travner_e2e::wait::{click_when_ready, wait_for_visible};
use travner_e2e::{E2eResult, TestData};

/// Signup weak password validation
pub async fn password_strength(session: &Session) -> E2eResult<()> {
    session.goto("/signup").await?;
    let driver = session.driver();

    let password_input = require(
        wait_for_visible(driver, By::Id("password")).await,
        "password input",
    )?;
    let submit_btn = require(
        wait_for_visible(driver, By::Id("signup-btn")).await,
        "signup button",
    )?;

    password_input.send_keys("weak").await?;
    submit_btn.click().await?;

    let error_msg = require(
        wait_for_visible(driver, By::Id("password-error")).await,
        "password error message",
    )?;
    require_displayed(&error_msg, "password error message").await
}

/// Account lockout after repeated failed login attempts
pub async fn account_lockout(session: &Session, data: &TestData) -> E2eResult<()> {
    session.goto("/login").await?;
    let driver = session.driver();

    for attempt in 1..=5 {
        let email_input = require(
            wait_for_visible(driver, By::Id("email")).await,
            "email input",
        )?;
        let password_input = require(
            wait_for_visible(driver, By::Id("current-password")).await,
            "password input",
        )?;
        let login_btn = require(
            wait_for_visible(driver, By::Id("login-btn")).await,
            "login button",
        )?;

        email_input.clear().await?;
        password_input.clear().await?;
        email_input.send_keys(data.email.as_str()).await?;
        password_input.send_keys(data.wrong_password.as_str()).await?;
        login_btn.click().await?;

        debug!("Failed login attempt {}/5 submitted", attempt);
        sleep(Duration::from_secs(1)).await;
    }

    let lock_msg = require(
        wait_for_visible(driver, By::Id("lockout-msg")).await,
        "lockout message",
    )?;
    require_displayed(&lock_msg, "lockout message").await
}

/// Forgot password flow
pub async fn forgot_password(session: &Session, data: &TestData) -> E2eResult<()> {
    session.goto("/login").await?;
    let driver = session.driver();

    click_when_ready(driver, By::LinkText("Forgot Password?")).await;

    let reset_form = require(
        wait_for_visible(driver, By::Id("reset-password-form")).await,
        "reset password form",
    )?;
    require_displayed(&reset_form, "reset password form").await?;

    let email_input = require(
        wait_for_visible(driver, By::Id("reset-email")).await,
        "reset email input",
    )?;
    let submit_btn = require(
        wait_for_visible(driver, By::Id("reset-submit-btn")).await,
        "reset submit button",
    )?;

    email_input.send_keys(data.email.as_str()).await?;
    submit_btn.click().await?;

    info!("Password reset requested for {}", data.email);
    Ok(())
}

/// Change password through the profile menu
pub async fn change_password(session: &Session, data: &TestData) -> E2eResult<()> {
    login(session, &data.email, &data.password).await?;
    let driver = session.driver();

    click_when_ready(driver, By::Id("profile-menu")).await;
    click_when_ready(driver, By::Id("change-password-btn")).await;

    let old_pass = require(
        wait_for_visible(driver, By::Id("old-password")).await,
        "old password input",
    )?;
    let new_pass = require(
        wait_for_visible(driver, By::Id("new-password")).await,
        "new password input",
    )?;
    let confirm_pass = require(
        wait_for_visible(driver, By::Id("confirm-password")).await,
        "confirm password input",
    )?;
    let submit_btn = require(
        wait_for_visible(driver, By::Id("submit-change-password")).await,
        "change password submit button",
    )?;

    old_pass.send_keys(data.password.as_str()).await?;
    new_pass.send_keys(data.new_password.as_str()).await?;
    confirm_pass.send_keys(data.new_password.as_str()).await?;
    submit_btn.click().await?;

    let success_msg = require(
        wait_for_visible(driver, By::Id("success-msg")).await,
        "change password success message",
    )?;
    require_displayed(&success_msg, "change password success message").await
}
