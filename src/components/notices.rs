//! Toast stack and the helpers async actions use to report outcomes.

use leptos::prelude::*;

use crate::actions::SubmitError;
use crate::state::notice::{NoticeKind, Notices};

/// Queue a toast that dismisses itself after
/// [`NOTICE_TIMEOUT_MS`](crate::state::notice::NOTICE_TIMEOUT_MS).
pub fn notify(notices: RwSignal<Notices>, kind: NoticeKind, message: impl Into<String>) {
    let message = message.into();
    log::debug!("notice ({kind:?}): {message}");
    if let Some(id) = notices.try_update(|n| n.push(kind, message)) {
        schedule_dismiss(notices, id);
    }
}

/// Toast for a failed submit. Field errors are shown inline, not here.
pub fn notify_error(notices: RwSignal<Notices>, err: &SubmitError) {
    if err.field_errors().is_none() {
        notify(notices, NoticeKind::Error, err.to_string());
    }
}

#[cfg(feature = "csr")]
fn schedule_dismiss(notices: RwSignal<Notices>, id: u64) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::notice::NOTICE_TIMEOUT_MS).await;
        notices.try_update(|n| n.dismiss(id));
    });
}

#[cfg(not(feature = "csr"))]
fn schedule_dismiss(_notices: RwSignal<Notices>, _id: u64) {}

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<Notices>>();

    view! {
        <div class="notice-stack" role="status">
            <For
                each=move || notices.get().items().to_vec()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.kind {
                        NoticeKind::Success => "notice notice--success",
                        NoticeKind::Error => "notice notice--error",
                    };
                    view! {
                        <div class=class on:click=move |_| {
                            notices.update(|n| {
                                n.dismiss(id);
                            });
                        }>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
