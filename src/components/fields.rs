use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::forms::{Field, FieldErrors};

/// Current value of whichever form control fired the event.
pub fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Builds an `oninput` callback that writes the control's value into a copy
/// of the form held in `state`.
pub fn bind<T>(state: &UseStateHandle<T>, apply: fn(&mut T, String)) -> Callback<InputEvent>
where
    T: Clone + 'static,
{
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let mut next = (*state).clone();
        apply(&mut next, event_value(&e));
        state.set(next);
    })
}

/// Same as [`bind`] for controls that only fire `change` (selects).
pub fn bind_change<T>(state: &UseStateHandle<T>, apply: fn(&mut T, String)) -> Callback<Event>
where
    T: Clone + 'static,
{
    let state = state.clone();
    Callback::from(move |e: Event| {
        let mut next = (*state).clone();
        apply(&mut next, event_value(&e));
        state.set(next);
    })
}

pub fn error_text(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(error) => html! { <p class="field-error">{error.to_string()}</p> },
        None => html! {},
    }
}

pub fn input_class(errors: &FieldErrors, field: Field) -> Classes {
    classes!("lpc-input", errors.get(field).is_some().then(|| "invalid"))
}
