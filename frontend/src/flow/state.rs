//! The state machine shared by every account flow.
//!
//! A flow starts in [`FlowState::CollectingInput`] (form flows) or
//! [`FlowState::Submitting`] (flows that fire on page load), sends exactly one
//! request per submission and lands in [`FlowState::Success`] or
//! [`FlowState::Failed`]. Nothing here retries on its own.

use super::{token::Token, validation::ValidationError};
use crate::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UserNotFound,
    ExpiredToken,
    InvalidToken,
    ServerError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    /// Waiting for the user. `notice` holds the last local validation message.
    CollectingInput { notice: Option<String> },
    /// A request is in flight. Also the "loading" view of on-load flows.
    Submitting,
    Success,
    Failed { kind: ErrorKind, message: String },
}

impl FlowState {
    pub fn collecting() -> Self {
        Self::CollectingInput { notice: None }
    }

    pub fn failed(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Failed {
            kind,
            message: message.into(),
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Failed { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// When a flow sends its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    OnSubmit,
    OnLoad,
}

/// A `detail` phrase the service uses for a specific failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownError {
    pub detail: &'static str,
    pub kind: ErrorKind,
    /// Message to show; `None` shows the service's own detail.
    pub message: Option<&'static str>,
}

/// Why a submission never reached the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Invalid(ValidationError),
    MissingToken,
}

impl From<ValidationError> for Rejection {
    fn from(error: ValidationError) -> Self {
        Self::Invalid(error)
    }
}

/// Static description of one flow.
#[derive(Debug)]
pub struct FlowDefinition {
    pub name: &'static str,
    pub trigger: Trigger,
    /// Message shown when the page has no token; `None` for flows that
    /// never take one.
    pub requires_token: Option<&'static str>,
    pub known_errors: &'static [KnownError],
    /// Shown for unclassified failures when the service gives no detail.
    pub fallback_message: &'static str,
}

impl FlowDefinition {
    /// State on page load. A flow that needs a token and has none goes
    /// straight to [`ErrorKind::InvalidToken`].
    pub fn initial_state(&self, token: Option<&Token>) -> FlowState {
        if let (Some(message), None) = (self.requires_token, token) {
            return FlowState::failed(ErrorKind::InvalidToken, message);
        }
        match self.trigger {
            Trigger::OnSubmit => FlowState::collecting(),
            Trigger::OnLoad => FlowState::Submitting,
        }
    }

    pub fn rejected(&self, rejection: Rejection) -> FlowState {
        match rejection {
            Rejection::Invalid(error) => FlowState::CollectingInput {
                notice: Some(error.to_string()),
            },
            Rejection::MissingToken => FlowState::failed(
                ErrorKind::InvalidToken,
                self.requires_token.unwrap_or(self.fallback_message),
            ),
        }
    }

    /// Maps the outcome of the single request onto a terminal state.
    pub fn classify(&self, outcome: Result<(), ApiError>) -> FlowState {
        let error = match outcome {
            Ok(()) => return FlowState::Success,
            Err(error) => error,
        };

        if error.status.is_some() {
            if let Some(detail) = error.detail.as_deref() {
                if let Some(known) = self.known_errors.iter().find(|k| k.detail == detail) {
                    let message = known.message.unwrap_or(detail);
                    return FlowState::failed(known.kind, message);
                }
            }
        }

        FlowState::failed(
            ErrorKind::ServerError,
            error.message_or(self.fallback_message),
        )
    }
}
