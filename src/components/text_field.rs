//! Form-bound text input with inline validation message.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wires an `<input>` to one field of a `FormBinding`: keystrokes store the
//! raw value, leaving the input validates, and the field's first error is
//! rendered underneath once the field has been visited.

use leptos::prelude::*;

use crate::forms::Schema;
use crate::forms::binding::FormBinding;

#[component]
pub fn TextField<S>(
    form: RwSignal<FormBinding<S>>,
    field: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    /// Treat an emptied input as absent rather than as the empty string.
    #[prop(optional)]
    optional: bool,
) -> impl IntoView
where
    S: Schema + Send + Sync + 'static,
{
    let error = move || form.with(|f| f.error_for(field));

    view! {
        <label class="text-field" class:text-field--invalid=move || error().is_some()>
            <span class="text-field__label">{label}</span>
            <input
                class="text-field__input"
                type=input_type
                name=field
                placeholder=placeholder
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        if optional && value.is_empty() {
                            f.unset(field);
                        } else {
                            f.set(field, value);
                        }
                    });
                }
                on:blur=move |_| form.update(|f| f.blur(field))
            />
            <Show when=move || error().is_some()>
                <p class="text-field__error">{move || error().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}
