//! Transient success/error banner fed by `ToastState`.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Shows the latest notification and hides it after its duration unless a
/// newer one replaced it first.
#[component]
pub fn Toast() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some((seq, duration_ms)) = toasts.with(|t| t.visible().map(|n| (t.seq, n.duration_ms))) else {
                return;
            };
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                toasts.update(|t| t.hide(seq));
            });
        });
    }

    view! {
        {move || {
            toasts
                .with(|t| t.visible().cloned())
                .map(|n| {
                    view! {
                        <div class=format!("toast toast--{}", n.kind.as_str()) role="status">
                            <span class="toast__message">{n.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| {
                                    toasts
                                        .update(|t| {
                                            let seq = t.seq;
                                            t.hide(seq);
                                        })
                                }
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
