/*!
 * Page Lifecycle States
 * State machine vocabulary and lifecycle errors
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle state of one hosted page.
///
/// `Created → Loading → Shown → {Suspended, Paused} → Closing → Closed`;
/// `Suspended` and `Paused` return to `Shown` on resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageState {
    Created,
    Loading,
    Shown,
    Suspended,
    Paused,
    Closing,
    Closed,
}

impl PageState {
    #[inline]
    pub fn is_closing(&self) -> bool {
        matches!(self, PageState::Closing)
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        matches!(self, PageState::Closed)
    }
}

/// Close-callback negotiation with hosted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseNegotiation {
    /// No callback registered; close proceeds directly.
    NoCallback,
    /// Hosted content registered a callback via `onCloseNotify`.
    Registered,
    /// Close requested; waiting for the callback acknowledgment.
    Executing,
    /// The grace timer fired before acknowledgment; close was forced.
    TimedOut,
    /// Hosted content acknowledged callback completion in time.
    Completed,
}

/// Policy for handling main-frame load errors, chosen by hosted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadErrorPolicy {
    /// The host presents its own error handling.
    Default,
    /// Hosted content receives the error as an event and handles it itself.
    Event,
}

impl LoadErrorPolicy {
    pub fn parse(raw: &str) -> Self {
        if raw == "event" {
            LoadErrorPolicy::Event
        } else {
            LoadErrorPolicy::Default
        }
    }
}

/// Lifecycle transition errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum LifecycleError {
    #[error("another lifecycle transition is in flight")]
    #[diagnostic(
        code(page::transition_in_flight),
        help("Transitions for one page are serialized; retry once the current transition settles.")
    )]
    TransitionInFlight,

    #[error("invalid {op} from state {from:?}")]
    #[diagnostic(
        code(page::invalid_transition),
        help("The operation is not defined for the page's current lifecycle state.")
    )]
    InvalidTransition { from: PageState, op: &'static str },

    #[error("close callback execution is pending")]
    #[diagnostic(
        code(page::close_pending),
        help("Suspension is rejected while a close callback is executing.")
    )]
    ClosePending,
}

pub type LifecycleResult<T> = Result<T, LifecycleError>;
