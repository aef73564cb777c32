//! Payment Cancelled Page

use leptos::prelude::*;

#[component]
pub fn CancelPage() -> impl IntoView {
    view! {
        <div class="result result-cancel">
            <h1>"Payment Cancelled"</h1>
            <p>"Your payment was cancelled. No charges were made."</p>
            <a href="/" class="btn">"Return to Dashboard"</a>
        </div>
    }
}
