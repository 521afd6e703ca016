//! Provider-agnostic description of a call response

use super::state::Endpoint;
use serde::Serialize;

/// Key that ends digit entry early
pub const FINISH_ON_KEY: char = '#';

/// Something played to the caller before listening
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    Say { text: String },
    Pause { seconds: u32 },
}

impl Segment {
    pub fn say(text: impl Into<String>) -> Self {
        Segment::Say { text: text.into() }
    }

    pub fn pause() -> Self {
        Segment::Pause { seconds: 1 }
    }
}

/// How to collect the caller's next input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatherSpec {
    pub action: Endpoint,
    pub num_digits: usize,
    pub timeout_secs: u32,
    pub finish_on_key: char,
    /// Spoken while listening; a key press interrupts it
    pub prompt: Vec<String>,
}

/// What to say and what to listen for next
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub segments: Vec<Segment>,
    pub gather: Option<GatherSpec>,
    /// Where the provider goes if the gather ends without input
    pub redirect: Option<Endpoint>,
    /// Hang up after speaking
    pub terminate: bool,
}

impl Descriptor {
    /// Speak, listen for digits, and fall back to the entry point
    pub fn gather(segments: Vec<Segment>, gather: GatherSpec) -> Self {
        Self {
            segments,
            gather: Some(gather),
            redirect: Some(Endpoint::Voice),
            terminate: false,
        }
    }

    /// Speak, then send the caller to `target`
    pub fn redirect(segments: Vec<Segment>, target: Endpoint) -> Self {
        Self {
            segments,
            gather: None,
            redirect: Some(target),
            terminate: false,
        }
    }

    /// Speak, then hang up
    pub fn hangup(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            gather: None,
            redirect: None,
            terminate: true,
        }
    }

    /// Every spoken text in playback order, gather prompt last
    #[cfg(test)]
    pub fn spoken_text(&self) -> Vec<&str> {
        let segments = self.segments.iter().filter_map(|s| match s {
            Segment::Say { text } => Some(text.as_str()),
            Segment::Pause { .. } => None,
        });
        let prompt = self
            .gather
            .iter()
            .flat_map(|g| g.prompt.iter().map(String::as_str));
        segments.chain(prompt).collect()
    }

    /// Whether any spoken text contains `needle`
    #[cfg(test)]
    pub fn mentions(&self, needle: &str) -> bool {
        self.spoken_text().iter().any(|t| t.contains(needle))
    }
}
