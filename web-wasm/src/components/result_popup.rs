//! 検出結果ポップアップコンポーネント

use leptos::prelude::*;
use cane_scan_common::DetectionReport;

#[component]
pub fn ResultPopup<FC>(
    report: ReadSignal<DetectionReport>,
    on_close: FC,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="popup" class="popup">
            <div class="popup-content">
                <h2>"Detection Result"</h2>
                <p>
                    <strong>"Vehicle Type: "</strong>
                    <span id="vehicleType">{move || report.get().vehicle_type}</span>
                </p>
                <p>
                    <strong>"Vehicle Color: "</strong>
                    <span id="vehicleColor">{move || report.get().vehicle_color}</span>
                </p>
                <p>
                    <strong>"Sugarcane: "</strong>
                    <span id="sugarcane">{move || report.get().sugarcane}</span>
                </p>
                <p>
                    <strong>"Number Plate: "</strong>
                    <span id="plate">{move || report.get().plate}</span>
                </p>
                <p>
                    <strong>"Plate Color: "</strong>
                    <span id="plateColor">{move || report.get().plate_color}</span>
                </p>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_close = on_close.clone();
                        move |_| on_close(())
                    }
                >
                    "Close"
                </button>
            </div>
        </div>
    }
}
