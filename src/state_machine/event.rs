//! Events that can occur during a call

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The provider has connected a call (or redirected back to entry)
    CallStarted { caller: Option<String> },

    /// Digits gathered from the caller; empty when the gather timed out
    Digits { digits: String },
}

impl Event {
    /// Build a digits event from the raw webhook field
    pub fn digits(raw: Option<&str>) -> Self {
        Event::Digits {
            digits: raw.unwrap_or_default().trim().to_string(),
        }
    }
}
