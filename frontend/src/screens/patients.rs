//! Patient directory screen.
//!
//! Resolves the stored session before showing anything, lists the
//! registered patients, and lets an administrator add new ones. When no
//! usable session exists the screen hands the user to the sign-in flow
//! instead of rendering.

use std::io;

use gateway::{GatewayError, Patient, PatientDraft, RegistryApi};

use crate::session::{self, Session, TokenStore};
use crate::ui;

use super::Route;

/// What the screen currently shows.
#[derive(Debug)]
pub enum ScreenState {
    /// Session resolution has not run yet.
    Loading,
    /// No usable credential; the sign-in flow is the only way forward.
    Unauthenticated,
    /// A resolved session; the directory is visible.
    Active(Session),
}

/// Result of one create attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    MissingInput,
    NotSignedIn,
    Rejected(String),
}

pub struct PatientsScreen<'a, A> {
    api: &'a A,
    store: &'a TokenStore,
    state: ScreenState,
    patients: Vec<Patient>,
}

impl<'a, A: RegistryApi> PatientsScreen<'a, A> {
    pub fn new(api: &'a A, store: &'a TokenStore) -> Self {
        Self {
            api,
            store,
            state: ScreenState::Loading,
            patients: Vec::new(),
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Resolves the stored credential into a session. Any resolution
    /// failure lands on the unauthenticated state; the guard has already
    /// cleared the slot where that applies.
    pub fn activate(&mut self) {
        match session::resolve_session(self.store) {
            Ok(session) => {
                tracing::debug!(user = %session.claims.sub, "session resolved");
                self.state = ScreenState::Active(session);
            }
            Err(err) => {
                tracing::debug!(reason = %err, "no usable session");
                self.state = ScreenState::Unauthenticated;
            }
        }
    }

    /// Fetches the roster. On failure the previous list stays on screen.
    pub async fn reload(&mut self) -> Result<(), GatewayError> {
        let token = match &self.state {
            ScreenState::Active(session) => session.token.clone(),
            _ => return Ok(()),
        };
        self.refresh_list(&token).await
    }

    /// Sends one create request. Field validation happens before anything
    /// touches the network.
    pub async fn submit(&mut self, draft: PatientDraft) -> SubmitOutcome {
        if !draft.is_complete() {
            return SubmitOutcome::MissingInput;
        }

        let token = match &self.state {
            ScreenState::Active(session) => session.token.clone(),
            _ => return SubmitOutcome::NotSignedIn,
        };

        if let Err(err) = self.api.create_patient(&draft, &token).await {
            tracing::warn!(error = %err, "patient creation rejected");
            let message = err
                .server_message()
                .unwrap_or("The patient could not be added.")
                .to_owned();
            return SubmitOutcome::Rejected(message);
        }

        // The service assigns the id, so the new row comes from a re-fetch
        // rather than a local insert.
        if let Err(err) = self.refresh_list(&token).await {
            tracing::warn!(error = %err, "roster refresh after create failed");
        }
        SubmitOutcome::Created
    }

    /// Drops the credential and everything derived from it.
    pub fn logout(&mut self) -> io::Result<()> {
        self.store.clear()?;
        self.state = ScreenState::Unauthenticated;
        self.patients.clear();
        Ok(())
    }

    async fn refresh_list(&mut self, token: &str) -> Result<(), GatewayError> {
        match self.api.list_patients(token).await {
            Ok(list) => {
                self.patients = list;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "patient list fetch failed");
                Err(err)
            }
        }
    }

    fn render(&self) {
        ui::heading("Patients");
        if self.patients.is_empty() {
            println!("No patients on file.");
            return;
        }
        for patient in &self.patients {
            println!(
                "#{:<4} {} {}  cin: {}  insured: {}",
                patient.id,
                patient.last_name,
                patient.first_name,
                patient.national_id,
                patient.insurance_code
            );
        }
    }
}

/// Runs the interactive directory loop and returns the next route.
pub async fn run<A: RegistryApi>(api: &A, store: &TokenStore) -> anyhow::Result<Route> {
    let mut screen = PatientsScreen::new(api, store);
    screen.activate();

    if matches!(screen.state, ScreenState::Unauthenticated) {
        ui::alert("Session", "Please sign in to view the patient directory.")?;
        return Ok(Route::Login);
    }

    if screen.reload().await.is_err() {
        ui::alert("Patients", "The patient list could not be loaded.")?;
    }

    loop {
        let is_admin = match &screen.state {
            ScreenState::Active(session) => session.role.is_admin(),
            _ => {
                ui::alert("Session", "Your session ended. Please sign in again.")?;
                return Ok(Route::Login);
            }
        };

        screen.render();
        match ui::prompt(menu(is_admin))?.as_str() {
            "a" if is_admin => {
                let draft = read_draft()?;
                match screen.submit(draft).await {
                    SubmitOutcome::Created => ui::alert("Patients", "Patient added.")?,
                    SubmitOutcome::MissingInput => {
                        ui::alert("Patients", "Every field is required.")?;
                    }
                    SubmitOutcome::NotSignedIn => continue,
                    SubmitOutcome::Rejected(message) => ui::alert("Patients", &message)?,
                }
            }
            "r" => {
                if screen.reload().await.is_err() {
                    ui::alert("Patients", "The patient list could not be loaded.")?;
                }
            }
            "l" => {
                screen.logout()?;
                ui::alert("Session", "You have been signed out.")?;
                return Ok(Route::Home);
            }
            "b" => return Ok(Route::Home),
            _ => {}
        }
    }
}

/// Action line for the directory prompt. Creation is offered to admins only.
fn menu(is_admin: bool) -> &'static str {
    if is_admin {
        "[a]dd  [r]efresh  [l]og out  [b]ack: "
    } else {
        "[r]efresh  [l]og out  [b]ack: "
    }
}

fn read_draft() -> io::Result<PatientDraft> {
    Ok(PatientDraft {
        last_name: ui::prompt("Last name: ")?,
        first_name: ui::prompt("First name: ")?,
        national_id: ui::prompt("National ID: ")?,
        insurance_code: ui::prompt("Insurance code: ")?,
    })
}
