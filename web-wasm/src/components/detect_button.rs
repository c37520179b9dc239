//! 送信ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn DetectButton<FD>(
    is_busy: ReadSignal<bool>,
    on_detect: FD,
) -> impl IntoView
where
    FD: Fn(()) + 'static + Clone + Send + Sync,
{
    // ファイル未選択でも押せる（押下時に警告を出す）。送信中のみ無効。
    view! {
        <div class="detect-buttons">
            <button
                class="btn btn-primary"
                disabled=move || is_busy.get()
                on:click={
                    let on_detect = on_detect.clone();
                    move |_| on_detect(())
                }
            >
                {move || if is_busy.get() { "Detecting..." } else { "Detect" }}
            </button>
        </div>
    }
}
