//! Payment Success Page

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn SuccessPage() -> impl IntoView {
    let query = use_query_map();
    let session_id = move || query.read().get("session_id");

    view! {
        <div class="result result-success">
            <h1>"Payment Successful"</h1>
            <p>"Thank you! Your payment has been received."</p>
            {move || session_id().map(|id| view! {
                <p class="muted">"Reference: " <code>{id}</code></p>
            })}
            <a href="/" class="btn btn-primary">"Return to Dashboard"</a>
        </div>
    }
}
