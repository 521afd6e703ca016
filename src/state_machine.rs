//! Call-flow state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions:
//! the transition function decides what the caller hears next and which
//! session updates to make, and the runtime carries those updates out.

mod descriptor;
mod effect;
pub mod event;
mod prompts;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use descriptor::{Descriptor, GatherSpec, Segment};
pub use effect::Effect;
pub use event::Event;
pub use state::{Endpoint, FlowContext, MenuState};
pub use transition::{transition, TransitionResult};
