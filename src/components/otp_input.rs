//! Six-cell OTP input and the resend button with its cooldown ticker.
//!
//! DESIGN
//! ======
//! Cell contents and focus rules live in [`OtpCells`]; this component only
//! forwards DOM events and moves focus. The cooldown ticker is a
//! `spawn_local` loop that writes through `try_update`, so it stops on its
//! own once the owning view is disposed or the countdown reaches zero.

use leptos::prelude::*;

use crate::forms::otp::OtpCells;
use crate::forms::validation::OTP_LEN;
use crate::state::cooldown::ResendCooldown;

#[component]
pub fn OtpInput(cells: RwSignal<OtpCells>) -> impl IntoView {
    let refs: [NodeRef<leptos::html::Input>; OTP_LEN] = std::array::from_fn(|_| NodeRef::new());

    let focus = move |index: usize| {
        if let Some(input) = refs.get(index).and_then(|r| r.get_untracked()) {
            let _ = input.focus();
        }
    };

    let cell = move |index: usize| {
        view! {
            <input
                class="otp__cell"
                type="text"
                inputmode="numeric"
                autocomplete="one-time-code"
                maxlength="1"
                node_ref=refs[index]
                prop:value=move || cells.get().digit(index)
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    if let Some(next) = cells.try_update(|c| c.input(index, &raw)) {
                        focus(next);
                    }
                }
                on:keydown=move |ev| {
                    if ev.key() == "Backspace" && cells.get_untracked().digit(index).is_empty() {
                        ev.prevent_default();
                        if let Some(next) = cells.try_update(|c| c.backspace(index)) {
                            focus(next);
                        }
                    }
                }
                on:paste=move |ev| {
                    let Some(text) = clipboard_text(&ev) else {
                        return;
                    };
                    ev.prevent_default();
                    if let Some(next) = cells.try_update(|c| c.paste(&text)) {
                        focus(next);
                    }
                }
            />
        }
    };

    view! { <div class="otp">{(0..OTP_LEN).map(cell).collect_view()}</div> }
}

#[cfg(feature = "csr")]
fn clipboard_text(ev: &leptos::web_sys::ClipboardEvent) -> Option<String> {
    ev.clipboard_data().and_then(|data| data.get_data("text").ok())
}

#[cfg(not(feature = "csr"))]
fn clipboard_text(_ev: &leptos::web_sys::ClipboardEvent) -> Option<String> {
    None
}

/// Restart the countdown, spawning a ticker unless one is already running.
pub fn start_cooldown(cooldown: RwSignal<ResendCooldown>) {
    let was_running = cooldown.try_update(|c| {
        let running = c.is_active();
        c.start();
        running
    });
    if was_running == Some(false) {
        spawn_ticker(cooldown);
    }
}

#[cfg(feature = "csr")]
fn spawn_ticker(cooldown: RwSignal<ResendCooldown>) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            if cooldown.try_update(ResendCooldown::tick) != Some(true) {
                break;
            }
        }
    });
}

#[cfg(not(feature = "csr"))]
fn spawn_ticker(_cooldown: RwSignal<ResendCooldown>) {}

#[component]
pub fn ResendButton(
    cooldown: RwSignal<ResendCooldown>,
    #[prop(into)] busy: Signal<bool>,
    on_resend: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="link-button"
            type="button"
            disabled=move || cooldown.get().is_active() || busy.get()
            on:click=move |_| on_resend.run(())
        >
            {move || cooldown.get().label()}
        </button>
    }
}
