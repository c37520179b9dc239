//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Vehicle & Sugarcane Detection"</h1>
        </header>
    }
}
