//! Pure state transition function
//!
//! Every (state, event) pair has an answer: input that does not fit the
//! current menu is absorbed into the invalid-input response, which sends
//! the caller back to the entry point. There is no attempt limit.

use super::descriptor::{Descriptor, GatherSpec, Segment, FINISH_ON_KEY};
use super::prompts;
use super::{Effect, Endpoint, Event, FlowContext, MenuState};
use crate::session::CallFlow;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: MenuState,
    pub descriptor: Descriptor,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: MenuState, descriptor: Descriptor) -> Self {
        Self {
            new_state: state,
            descriptor,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs; the only
/// outside call is the record lookup, which is itself side-effect free.
pub fn transition(state: MenuState, context: &FlowContext<'_>, event: Event) -> TransitionResult {
    let digits = match event {
        // Entry always lands on a fresh main menu, whatever came before
        Event::CallStarted { caller } => {
            return TransitionResult::new(MenuState::Main, main_menu(context, true))
                .with_effect(Effect::StartSession { caller });
        }
        Event::Digits { digits } => digits,
    };

    match (state, digits.as_str()) {
        // ============================================================
        // Main menu
        // ============================================================
        (MenuState::Main, "1") => {
            TransitionResult::new(MenuState::PnrGather, pnr_gather(context))
                .with_effect(Effect::record_menu_input("main", &digits))
                .with_effect(Effect::SetFlow(CallFlow::Pnr))
        }

        (MenuState::Main, "2") => {
            TransitionResult::new(MenuState::TrainGather, train_gather(context))
                .with_effect(Effect::record_menu_input("main", &digits))
                .with_effect(Effect::SetFlow(CallFlow::Train))
        }

        (MenuState::Main, "9") => {
            let mut result = goodbye();
            result
                .effects
                .insert(0, Effect::record_menu_input("main", &digits));
            result
        }

        (MenuState::Main, _) => {
            invalid().with_effect(Effect::record_menu_input("main", &digits))
        }

        // ============================================================
        // Number entry
        // ============================================================
        (MenuState::PnrGather, pnr) if is_complete_entry(MenuState::PnrGather, pnr) => {
            let text = context.records.lookup_booking(pnr).map_or_else(
                || prompts::PNR_NOT_FOUND.to_string(),
                |booking| prompts::booking_status(&booking),
            );
            TransitionResult::new(
                MenuState::PnrResult,
                result_with_options(context, text, MenuState::PnrResult, prompts::PNR_OPTIONS),
            )
            .with_effect(Effect::record_query(pnr))
        }

        (MenuState::TrainGather, number) if is_complete_entry(MenuState::TrainGather, number) => {
            let text = context.records.lookup_schedule(number).map_or_else(
                || prompts::TRAIN_NOT_FOUND.to_string(),
                |schedule| prompts::schedule_info(&schedule),
            );
            TransitionResult::new(
                MenuState::TrainResult,
                result_with_options(context, text, MenuState::TrainResult, prompts::TRAIN_OPTIONS),
            )
            .with_effect(Effect::record_query(number))
        }

        // ============================================================
        // Follow-up options after a result
        // ============================================================
        (MenuState::PnrResult, "1") => {
            TransitionResult::new(MenuState::PnrGather, pnr_gather(context))
        }
        (MenuState::TrainResult, "1") => {
            TransitionResult::new(MenuState::TrainGather, train_gather(context))
        }
        (MenuState::PnrResult | MenuState::TrainResult, "2") => {
            TransitionResult::new(MenuState::Main, main_menu(context, false))
        }
        (MenuState::PnrResult | MenuState::TrainResult, "9") => goodbye(),

        // ============================================================
        // Anything else, including timeouts and digits posted to a
        // state that never gathers
        // ============================================================
        (
            MenuState::PnrGather
            | MenuState::TrainGather
            | MenuState::PnrResult
            | MenuState::TrainResult
            | MenuState::Invalid
            | MenuState::Goodbye,
            _,
        ) => invalid(),
    }
}

/// Exactly the expected number of ASCII digits for `state`
pub fn is_complete_entry(state: MenuState, digits: &str) -> bool {
    state
        .expected_digits()
        .is_some_and(|len| digits.len() == len && digits.bytes().all(|b| b.is_ascii_digit()))
}

fn gather_for(context: &FlowContext<'_>, state: MenuState, prompt: Vec<String>) -> GatherSpec {
    let (Some(action), Some(num_digits)) = (state.action(), state.expected_digits()) else {
        unreachable!("{state} does not gather input")
    };
    GatherSpec {
        action,
        num_digits,
        timeout_secs: context.gather_timeout_secs,
        finish_on_key: FINISH_ON_KEY,
        prompt,
    }
}

/// The top-level menu; `greet` prefixes the welcome used on call entry
fn main_menu(context: &FlowContext<'_>, greet: bool) -> Descriptor {
    let mut prompt = Vec::with_capacity(2);
    if greet {
        prompt.push(prompts::GREETING.to_string());
    }
    prompt.push(prompts::MAIN_MENU.to_string());
    Descriptor::gather(vec![], gather_for(context, MenuState::Main, prompt))
}

fn pnr_gather(context: &FlowContext<'_>) -> Descriptor {
    Descriptor::gather(
        vec![],
        gather_for(
            context,
            MenuState::PnrGather,
            vec![prompts::PNR_GATHER.to_string()],
        ),
    )
}

fn train_gather(context: &FlowContext<'_>) -> Descriptor {
    Descriptor::gather(
        vec![],
        gather_for(
            context,
            MenuState::TrainGather,
            vec![prompts::TRAIN_GATHER.to_string()],
        ),
    )
}

fn result_with_options(
    context: &FlowContext<'_>,
    result_text: String,
    state: MenuState,
    options: &str,
) -> Descriptor {
    Descriptor::gather(
        vec![Segment::say(result_text), Segment::pause()],
        gather_for(context, state, vec![options.to_string()]),
    )
}

fn invalid() -> TransitionResult {
    TransitionResult::new(
        MenuState::Invalid,
        Descriptor::redirect(
            vec![Segment::say(prompts::INVALID_INPUT), Segment::pause()],
            Endpoint::Voice,
        ),
    )
}

fn goodbye() -> TransitionResult {
    TransitionResult::new(
        MenuState::Goodbye,
        Descriptor::hangup(vec![Segment::say(prompts::GOODBYE)]),
    )
    .with_effect(Effect::EndSession)
}
