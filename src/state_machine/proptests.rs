//! Property-based tests for the call-flow state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::transition::*;
use super::*;
use crate::records::StaticRecords;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn step(state: MenuState, event: Event) -> TransitionResult {
    transition(state, &FlowContext::new(&StaticRecords), event)
}

/// A response either hangs up or always has somewhere to go next
fn never_dead_ends(descriptor: &Descriptor) -> bool {
    if descriptor.terminate {
        descriptor.gather.is_none() && descriptor.redirect.is_none()
    } else {
        descriptor.redirect == Some(Endpoint::Voice)
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = MenuState> {
    prop_oneof![
        Just(MenuState::Main),
        Just(MenuState::PnrGather),
        Just(MenuState::TrainGather),
        Just(MenuState::PnrResult),
        Just(MenuState::TrainResult),
        Just(MenuState::Invalid),
        Just(MenuState::Goodbye),
    ]
}

fn arb_gather_state() -> impl Strategy<Value = MenuState> {
    prop_oneof![Just(MenuState::PnrGather), Just(MenuState::TrainGather)]
}

fn arb_digits() -> impl Strategy<Value = String> {
    prop_oneof![
        // Single key presses dominate real traffic
        "[0-9#*]",
        Just(String::new()),
        "[0-9]{5}",
        "[0-9]{10}",
        "[0-9a-z ]{0,12}",
        prop_oneof![
            Just("2154673890".to_string()),
            Just("4521987630".to_string()),
            Just("12952".to_string()),
            Just("22439".to_string()),
        ],
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        8 => arb_digits().prop_map(|digits| Event::Digits { digits }),
        1 => proptest::option::of("\\+91[0-9]{10}")
            .prop_map(|caller| Event::CallStarted { caller }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Invariant 1: No response leaves the caller without a next step
    #[test]
    fn prop_no_dead_ends(state in arb_state(), event in arb_event()) {
        let result = step(state, event);
        prop_assert!(
            never_dead_ends(&result.descriptor),
            "dead end from {:?}: {:?}", state, result.descriptor
        );
    }

    // Invariant 2: Hanging up happens exactly when saying goodbye, and
    // only then is the session ended
    #[test]
    fn prop_terminate_iff_goodbye(state in arb_state(), event in arb_event()) {
        let result = step(state, event);
        let is_goodbye = result.new_state == MenuState::Goodbye;
        prop_assert_eq!(result.descriptor.terminate, is_goodbye);
        prop_assert_eq!(result.effects.contains(&Effect::EndSession), is_goodbye);
    }

    // Invariant 3: "9" from the main menu always ends the call,
    // whatever happened earlier in it
    #[test]
    fn prop_nine_from_main_always_goodbye(
        history in proptest::collection::vec(arb_event(), 0..15)
    ) {
        let mut state = MenuState::Main;
        for event in history {
            state = step(state, event).new_state;
        }
        let state = step(state, Event::CallStarted { caller: None }).new_state;

        let result = step(state, Event::Digits { digits: "9".to_string() });
        prop_assert_eq!(result.new_state, MenuState::Goodbye);
        prop_assert!(result.descriptor.terminate);
    }

    // Invariant 4: Entry resets the flow from any state
    #[test]
    fn prop_call_start_always_main(state in arb_state(), caller in proptest::option::of("[0-9]{10}")) {
        let result = step(state, Event::CallStarted { caller: caller.clone() });
        prop_assert_eq!(result.new_state, MenuState::Main);
        prop_assert_eq!(result.effects, vec![Effect::StartSession { caller }]);
    }

    // Invariant 5: A gather state only produces a result for a complete
    // all-digit entry, and looks up exactly that key
    #[test]
    fn prop_gather_requires_exact_digits(state in arb_gather_state(), digits in arb_digits()) {
        let complete = is_complete_entry(state, &digits);
        let result = step(state, Event::Digits { digits: digits.clone() });

        if complete {
            prop_assert!(matches!(result.new_state, MenuState::PnrResult | MenuState::TrainResult));
            prop_assert_eq!(result.effects, vec![Effect::record_query(&digits)]);
        } else {
            prop_assert_eq!(result.new_state, MenuState::Invalid);
            prop_assert!(result.effects.is_empty());
        }
    }

    // Invariant 6: Wrong-length numeric PNRs are never looked up
    #[test]
    fn prop_short_or_long_pnr_invalid(digits in "[0-9]{0,9}|[0-9]{11,14}") {
        let result = step(MenuState::PnrGather, Event::Digits { digits });
        prop_assert_eq!(result.new_state, MenuState::Invalid);
        prop_assert_eq!(result.descriptor.redirect, Some(Endpoint::Voice));
        prop_assert!(result.descriptor.gather.is_none());
    }

    // Invariant 7: Every gather listens for the digit count of the state
    // it hands control to
    #[test]
    fn prop_gather_matches_next_state(state in arb_state(), event in arb_event()) {
        let result = step(state, event);
        if let Some(gather) = &result.descriptor.gather {
            prop_assert_eq!(Some(gather.action), result.new_state.action());
            prop_assert_eq!(Some(gather.num_digits), result.new_state.expected_digits());
            prop_assert_eq!(gather.action.menu_state(), result.new_state);
        }
    }

    // Invariant 8: Same inputs, same outputs
    #[test]
    fn prop_transition_is_deterministic(state in arb_state(), event in arb_event()) {
        let first = step(state, event.clone());
        let second = step(state, event);
        prop_assert_eq!(first.new_state, second.new_state);
        prop_assert_eq!(first.descriptor, second.descriptor);
        prop_assert_eq!(first.effects, second.effects);
    }
}

#[test]
fn test_every_menu_state_round_trips_through_its_endpoint() {
    for state in [
        MenuState::Main,
        MenuState::PnrGather,
        MenuState::TrainGather,
        MenuState::PnrResult,
        MenuState::TrainResult,
    ] {
        let action = state.action().unwrap();
        assert_eq!(action.menu_state(), state);
    }
    assert!(MenuState::Invalid.action().is_none());
    assert!(MenuState::Goodbye.action().is_none());
    assert!(MenuState::Goodbye.is_terminal());
}
