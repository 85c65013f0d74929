//! Labelled inputs with inline validation messages.

use leptos::prelude::*;

use crate::forms::{Field, FieldErrors};

/// Inline message for `field`, empty when valid.
pub fn field_error(errors: RwSignal<FieldErrors>, field: Field) -> Signal<String> {
    Signal::derive(move || errors.get().get(field).to_owned())
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                class:field__input--invalid=move || !error.get().is_empty()
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !error.get().is_empty()>
                <p class="field__error">{move || error.get()}</p>
            </Show>
        </label>
    }
}

/// Password input with a show/hide toggle.
#[component]
pub fn PasswordField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<String>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <span class="field__password">
                <input
                    class="field__input"
                    class:field__input--invalid=move || !error.get().is_empty()
                    type=move || if visible.get() { "text" } else { "password" }
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    class="field__toggle"
                    type="button"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </span>
            <Show when=move || !error.get().is_empty()>
                <p class="field__error">{move || error.get()}</p>
            </Show>
        </label>
    }
}
