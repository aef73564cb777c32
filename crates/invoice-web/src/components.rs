//! UI Components

use leptos::prelude::*;

use crate::api::{self, FieldError, Invoice, InvoiceForm, SubmitError};

/// Dollar amount with two decimals
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// CSS modifier for a status badge
pub fn status_class(status: &str) -> &'static str {
    match status {
        "paid" => "status status-paid",
        "failed" => "status status-failed",
        _ => "status status-pending",
    }
}

fn field_message(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

/// Invoice creation form
///
/// Bumps `on_created` after every successful submission so the list reloads.
#[component]
pub fn InvoiceFormCard(on_created: WriteSignal<u32>) -> impl IntoView {
    let (amount, set_amount) = signal(String::new());
    let (client_email, set_client_email) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (field_errors, set_field_errors) = signal(Vec::<FieldError>::new());
    let (error, set_error) = signal(None::<String>);
    let (payment_url, set_payment_url) = signal(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        set_submitting.set(true);
        set_field_errors.set(Vec::new());
        set_error.set(None);
        set_payment_url.set(None);

        let form = InvoiceForm {
            amount: amount.get(),
            client_email: client_email.get(),
            description: description.get(),
        };

        leptos::task::spawn_local(async move {
            match api::create_invoice(&form).await {
                Ok(url) => {
                    set_payment_url.set(Some(url));
                    set_amount.set(String::new());
                    set_client_email.set(String::new());
                    set_description.set(String::new());
                    on_created.update(|n| *n += 1);
                }
                Err(SubmitError::Fields(errors)) => set_field_errors.set(errors),
                Err(SubmitError::General(message)) => set_error.set(Some(message)),
            }
            set_submitting.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            field_message(&field_errors.get(), field)
                .map(|message| view! { <p class="field-error">{message}</p> })
        }
    };

    view! {
        <section class="card">
            <h2>"Create Invoice"</h2>

            <form on:submit=submit>
                <div class="field">
                    <label for="amount">"Amount (USD)"</label>
                    <input
                        id="amount"
                        type="number"
                        step="0.01"
                        min="0.01"
                        placeholder="0.00"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                    {field_error("amount")}
                </div>

                <div class="field">
                    <label for="clientEmail">"Client Email"</label>
                    <input
                        id="clientEmail"
                        type="email"
                        placeholder="client@example.com"
                        prop:value=move || client_email.get()
                        on:input=move |ev| set_client_email.set(event_target_value(&ev))
                    />
                    {field_error("clientEmail")}
                </div>

                <div class="field">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        placeholder="Invoice payment"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                    {field_error("description")}
                </div>

                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Create Invoice" }}
                </button>
            </form>

            {move || error.get().map(|message| view! { <p class="alert alert-error">{message}</p> })}

            {move || payment_url.get().map(|url| view! {
                <div class="alert alert-success">
                    <p>"Invoice created. Share this payment link with your client:"</p>
                    <a href=url.clone() target="_blank" rel="noopener noreferrer">{url.clone()}</a>
                </div>
            })}
        </section>
    }
}

/// Status pill
#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    view! { <span class=status_class(&status)>{status.clone()}</span> }
}

/// One table row
#[component]
pub fn InvoiceRow(invoice: Invoice) -> impl IntoView {
    let created = invoice.created_at.with_timezone(&chrono::Local).format("%b %-d, %Y").to_string();

    view! {
        <tr>
            <td class="amount">{format_amount(invoice.amount)}</td>
            <td>
                <div class="client">{invoice.client_email.clone()}</div>
                <div class="description">{invoice.description.clone()}</div>
            </td>
            <td><StatusBadge status=invoice.status.clone() /></td>
            <td>{created}</td>
            <td>
                <a href=invoice.payment_link.clone() target="_blank" rel="noopener noreferrer">
                    "View"
                </a>
            </td>
        </tr>
    }
}

/// Recent invoices table, reloaded whenever `refresh` changes
#[component]
pub fn InvoiceList(refresh: ReadSignal<u32>) -> impl IntoView {
    let (invoices, set_invoices) = signal(None::<Result<Vec<Invoice>, String>>);

    Effect::new(move |_| {
        refresh.track();
        leptos::task::spawn_local(async move {
            set_invoices.set(Some(api::list_invoices().await));
        });
    });

    view! {
        <section class="card">
            <h2>"Recent Invoices"</h2>

            {move || match invoices.get() {
                None => view! { <p class="muted">"Loading invoices..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="alert alert-error">{e}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="muted">"No invoices yet."</p> }.into_any()
                }
                Some(Ok(list)) => view! {
                    <table class="invoices">
                        <thead>
                            <tr>
                                <th>"Amount"</th>
                                <th>"Client"</th>
                                <th>"Status"</th>
                                <th>"Date"</th>
                                <th>"Link"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|invoice| view! { <InvoiceRow invoice=invoice /> })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </section>
    }
}
