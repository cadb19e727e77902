use leptos::prelude::*;

use super::global_context::{use_global_context, NoticeKind};

/// Transient success/error banner in the top-right corner
#[component]
pub fn Notifications() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        {move || ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "toast toast--success",
                NoticeKind::Error => "toast toast--error",
            };
            view! {
                <div class=class role="status" on:click=move |_| ctx.dismiss_notice()>
                    {notice.text}
                </div>
            }
        })}
    }
}
