//! Sign-in screen.
//!
//! Prompts for credentials, exchanges them for a bearer token, and
//! persists the token into the slot. A successful sign-in leads straight
//! to the patient directory.

use anyhow::Context;
use gateway::RegistryApi;

use crate::session::TokenStore;
use crate::ui;

use super::Route;

/// Result of one sign-in attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn,
    MissingInput,
    Rejected(String),
}

/// Exchanges the credentials for a token and persists it. Empty input is
/// rejected before anything touches the network.
pub async fn attempt<A: RegistryApi>(
    api: &A,
    store: &TokenStore,
    username: &str,
    password: &str,
) -> anyhow::Result<LoginOutcome> {
    if username.is_empty() || password.is_empty() {
        return Ok(LoginOutcome::MissingInput);
    }

    match api.login(username, password).await {
        Ok(token) => {
            store
                .save(&token)
                .context("could not persist the session token")?;
            tracing::debug!(user = username, "signed in");
            Ok(LoginOutcome::SignedIn)
        }
        Err(err) => {
            tracing::warn!(error = %err, "sign-in rejected");
            let message = err
                .server_message()
                .unwrap_or("Could not sign you in. Check your credentials and try again.")
                .to_owned();
            Ok(LoginOutcome::Rejected(message))
        }
    }
}

/// Runs the interactive sign-in loop and returns the next route.
pub async fn run<A: RegistryApi>(api: &A, store: &TokenStore) -> anyhow::Result<Route> {
    loop {
        ui::heading("Sign in");
        println!("Leave the username empty to go back.");

        let username = ui::prompt("Username: ")?;
        if username.is_empty() {
            return Ok(Route::Home);
        }
        let password = ui::prompt("Password: ")?;

        println!("Signing in...");
        match attempt(api, store, &username, &password).await? {
            LoginOutcome::SignedIn => {
                ui::alert("Session", "You are signed in.")?;
                return Ok(Route::Patients);
            }
            LoginOutcome::MissingInput => {
                ui::alert("Sign in", "Both the username and the password are required.")?;
            }
            LoginOutcome::Rejected(message) => {
                ui::alert("Sign in", &message)?;
            }
        }
    }
}
