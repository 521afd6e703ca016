//! Menu states and the webhook endpoints that serve them

use crate::records::{RecordStore, PNR_LENGTH, TRAIN_NUMBER_LENGTH};
use serde::Serialize;
use std::fmt;

/// Webhook paths the provider posts digits back to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Endpoint {
    /// Call entry; also the fallback target of every redirect
    Voice,
    HandleMenu,
    HandlePnr,
    HandleTrain,
    HandlePnrOptions,
    HandleTrainOptions,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Voice => "/voice",
            Endpoint::HandleMenu => "/handle-menu",
            Endpoint::HandlePnr => "/handle-pnr",
            Endpoint::HandleTrain => "/handle-train",
            Endpoint::HandlePnrOptions => "/handle-pnr-options",
            Endpoint::HandleTrainOptions => "/handle-train-options",
        }
    }

    /// The menu state whose digits arrive at this endpoint
    pub fn menu_state(self) -> MenuState {
        match self {
            Endpoint::Voice | Endpoint::HandleMenu => MenuState::Main,
            Endpoint::HandlePnr => MenuState::PnrGather,
            Endpoint::HandleTrain => MenuState::TrainGather,
            Endpoint::HandlePnrOptions => MenuState::PnrResult,
            Endpoint::HandleTrainOptions => MenuState::TrainResult,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Point in the call flow the caller has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    /// Top-level menu; every call starts here
    Main,
    /// Collecting a PNR number
    PnrGather,
    /// Collecting a train number
    TrainGather,
    /// Booking read back, offering follow-up options
    PnrResult,
    /// Schedule read back, offering follow-up options
    TrainResult,
    /// Input was not understood; caller is sent back to entry
    Invalid,
    /// Call is being closed
    Goodbye,
}

impl MenuState {
    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::Main => "main",
            MenuState::PnrGather => "pnr_gather",
            MenuState::TrainGather => "train_gather",
            MenuState::PnrResult => "pnr_result",
            MenuState::TrainResult => "train_result",
            MenuState::Invalid => "invalid",
            MenuState::Goodbye => "goodbye",
        }
    }

    /// Endpoint the provider should post this state's digits to
    pub fn action(self) -> Option<Endpoint> {
        match self {
            MenuState::Main => Some(Endpoint::HandleMenu),
            MenuState::PnrGather => Some(Endpoint::HandlePnr),
            MenuState::TrainGather => Some(Endpoint::HandleTrain),
            MenuState::PnrResult => Some(Endpoint::HandlePnrOptions),
            MenuState::TrainResult => Some(Endpoint::HandleTrainOptions),
            MenuState::Invalid | MenuState::Goodbye => None,
        }
    }

    /// Number of digits gathered in this state
    pub fn expected_digits(self) -> Option<usize> {
        match self {
            MenuState::Main | MenuState::PnrResult | MenuState::TrainResult => Some(1),
            MenuState::PnrGather => Some(PNR_LENGTH),
            MenuState::TrainGather => Some(TRAIN_NUMBER_LENGTH),
            MenuState::Invalid | MenuState::Goodbye => None,
        }
    }

    /// Check if the caller has left the flow
    pub fn is_terminal(self) -> bool {
        matches!(self, MenuState::Goodbye)
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a transition may consult besides the state and event
#[derive(Clone, Copy)]
pub struct FlowContext<'a> {
    pub records: &'a dyn RecordStore,
    /// Seconds the provider waits for digits before giving up
    pub gather_timeout_secs: u32,
}

/// Default gather timeout handed to the provider
pub const DEFAULT_GATHER_TIMEOUT_SECS: u32 = 10;

impl<'a> FlowContext<'a> {
    pub fn new(records: &'a dyn RecordStore) -> Self {
        Self {
            records,
            gather_timeout_secs: DEFAULT_GATHER_TIMEOUT_SECS,
        }
    }

    #[must_use]
    pub fn with_gather_timeout(mut self, secs: u32) -> Self {
        self.gather_timeout_secs = secs;
        self
    }
}
