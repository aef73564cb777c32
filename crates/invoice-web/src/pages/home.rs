//! Dashboard Page

use leptos::prelude::*;

use crate::components::{InvoiceFormCard, InvoiceList};

#[component]
pub fn HomePage() -> impl IntoView {
    let (refresh, set_refresh) = signal(0_u32);

    view! {
        <div class="dashboard">
            <header class="hero">
                <h1>"Invoice Management System"</h1>
                <p class="subtitle">"Create invoices and send Stripe payment links to your clients"</p>
            </header>

            <div class="grid">
                <InvoiceFormCard on_created=set_refresh />
                <InvoiceList refresh=refresh />
            </div>
        </div>
    }
}
