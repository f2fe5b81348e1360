use kif_realty_web::forms::{FieldRule, FieldState};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the state and callbacks for a validated form field.
#[derive(Clone, PartialEq)]
pub struct ValidatedField {
    /// Current value, touched flag and error.
    pub state: FieldState,
    /// Callback for the input's `oninput` event.
    pub oninput: Callback<InputEvent>,
    /// Callback for the input's `onblur` event. Validates the current value.
    pub onblur: Callback<FocusEvent>,
    /// Validate without a blur, e.g. on submit.
    pub touch: Callback<()>,
    /// Clear value and error after a successful submit.
    pub reset: Callback<()>,
}

/// Custom hook to manage state for one validated input. `format` rewrites
/// the raw input on every keystroke (phone number grouping).
#[hook]
pub fn use_validated_field(rule: FieldRule, format: Option<fn(&str) -> String>) -> ValidatedField {
    let state = use_state(FieldState::default);

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut value = input.value();
            if let Some(format) = format {
                value = format(&value);
                // Keep the visible text in the canonical form.
                input.set_value(&value);
            }
            let mut next = (*state).clone();
            next.on_input(rule, value);
            state.set(next);
        })
    };

    let onblur = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*state).clone();
            next.on_blur(rule);
            state.set(next);
        })
    };

    let touch = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.validate(rule);
            state.set(next);
        })
    };

    let reset = {
        let state = state.clone();
        Callback::from(move |_| state.set(FieldState::default()))
    };

    ValidatedField {
        state: (*state).clone(),
        oninput,
        onblur,
        touch,
        reset,
    }
}
