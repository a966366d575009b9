//! Client-side journey state.
//!
//! Answers collected during a journey live here until they are submitted.
//! State only changes through `AppState::reduce`; starting, restarting or
//! submitting a journey resets it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The journeys the portal runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JourneyKind {
    Retirement,
    Transfer,
    Bereavement,
    /// A CMS-defined journey, by its type key.
    Generic(String),
}

/// Details entered while reporting a bereavement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BereavementForm {
    pub deceased_forenames: Option<String>,
    pub deceased_surname: Option<String>,
    pub date_of_death: Option<String>,
    pub reporter_forenames: Option<String>,
    pub reporter_surname: Option<String>,
    pub reporter_email: Option<String>,
    pub reporter_phone: Option<String>,
    pub relationship: Option<String>,
}

impl BereavementForm {
    pub fn deceased_name(&self) -> Option<String> {
        join_name(&self.deceased_forenames, &self.deceased_surname)
    }

    pub fn reporter_name(&self) -> Option<String> {
        join_name(&self.reporter_forenames, &self.reporter_surname)
    }

    /// Overlay the fields set in `update`.
    fn merge(&mut self, update: BereavementForm) {
        let BereavementForm {
            deceased_forenames,
            deceased_surname,
            date_of_death,
            reporter_forenames,
            reporter_surname,
            reporter_email,
            reporter_phone,
            relationship,
        } = update;
        overlay(&mut self.deceased_forenames, deceased_forenames);
        overlay(&mut self.deceased_surname, deceased_surname);
        overlay(&mut self.date_of_death, date_of_death);
        overlay(&mut self.reporter_forenames, reporter_forenames);
        overlay(&mut self.reporter_surname, reporter_surname);
        overlay(&mut self.reporter_email, reporter_email);
        overlay(&mut self.reporter_phone, reporter_phone);
        overlay(&mut self.relationship, relationship);
    }
}

fn overlay(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}

fn join_name(forenames: &Option<String>, surname: &Option<String>) -> Option<String> {
    let parts: Vec<&str> = [forenames, surname]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(" "))
}

/// A pending jump ahead in a journey, with the step to come back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FastForward {
    pub target_step: String,
    pub return_step: Option<String>,
}

/// Session state for the journey in progress.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub journey: Option<JourneyKind>,
    pub bereavement: BereavementForm,
    pub transfer_loading: bool,
    pub checkbox_answers: BTreeMap<String, bool>,
    pub fast_forward: Option<FastForward>,
    /// An email address entered but not yet verified. Shown in place of the
    /// address on record until verification completes.
    pub pending_email: Option<String>,
}

/// A state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    StartJourney(JourneyKind),
    RestartJourney,
    SubmitJourney,
    UpdateBereavement(BereavementForm),
    SetTransferLoading(bool),
    SetCheckboxAnswer { key: String, checked: bool },
    SetFastForward(Option<FastForward>),
    SetPendingEmail(Option<String>),
}

impl AppState {
    /// Apply an action, returning the next state.
    ///
    /// ```
    /// use mdp_content::state::{AppAction, AppState, JourneyKind};
    ///
    /// let state = AppState::default()
    ///     .reduce(AppAction::StartJourney(JourneyKind::Transfer))
    ///     .reduce(AppAction::SetTransferLoading(true))
    ///     .reduce(AppAction::SubmitJourney);
    /// assert_eq!(state, AppState::default());
    /// ```
    pub fn reduce(self, action: AppAction) -> AppState {
        match action {
            AppAction::StartJourney(kind) => {
                debug!(journey = ?kind, "journey started");
                AppState {
                    journey: Some(kind),
                    ..AppState::default()
                }
            }
            AppAction::RestartJourney => {
                debug!(journey = ?self.journey, "journey restarted");
                AppState {
                    journey: self.journey,
                    ..AppState::default()
                }
            }
            AppAction::SubmitJourney => {
                debug!(journey = ?self.journey, "journey submitted");
                AppState::default()
            }
            AppAction::UpdateBereavement(update) => {
                let mut next = self;
                next.bereavement.merge(update);
                next
            }
            AppAction::SetTransferLoading(loading) => AppState {
                transfer_loading: loading,
                ..self
            },
            AppAction::SetCheckboxAnswer { key, checked } => {
                let mut next = self;
                next.checkbox_answers.insert(key, checked);
                next
            }
            AppAction::SetFastForward(fast_forward) => AppState {
                fast_forward,
                ..self
            },
            AppAction::SetPendingEmail(email) => AppState {
                pending_email: email.filter(|e| !e.trim().is_empty()),
                ..self
            },
        }
    }
}
