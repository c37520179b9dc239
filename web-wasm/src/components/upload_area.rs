//! 画像選択・プレビューコンポーネント

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    preview_url: ReadSignal<Option<String>>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(Option<File>) + 'static + Clone + Send + Sync,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        // 選択が空でも通知する（状態を変えるかはセッション側が決める）
        let file = input.files().and_then(|files| files.get(0));
        on_file_selected(file);
    };

    view! {
        <div class="upload-area">
            <input
                type="file"
                id="imageInput"
                accept="image/*"
                on:change=on_change
            />
            <p class="text-muted">"Supported formats: JPEG, PNG"</p>

            <Show when=move || preview_url.get().is_some()>
                <img
                    id="previewImage"
                    class="preview"
                    alt="preview"
                    src=move || preview_url.get().unwrap_or_default()
                />
            </Show>
        </div>
    }
}
