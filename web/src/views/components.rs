use dioxus::prelude::*;
use types::{Lead, LeadStatus, NewLead, validate};

/// Hands `form` on only when it passes the lead checks; the errors are
/// returned for display either way.
pub fn submit_lead(form: NewLead, on_valid: impl FnOnce(NewLead)) -> validate::LeadFormErrors {
    let errors = validate::lead(&form);
    if errors.is_empty() {
        on_valid(form);
    }
    errors
}

/// Add/edit form for a single lead. `lead` is `None` when adding.
#[component]
pub fn LeadDialog(
    lead: Option<Lead>,
    on_close: EventHandler<()>,
    on_save: EventHandler<NewLead>,
) -> Element {
    let editing = lead.is_some();
    let initial = lead.as_ref().map(Lead::draft).unwrap_or_default();

    let mut name = use_signal(|| initial.name.clone());
    let mut email = use_signal(|| initial.email.clone());
    let mut phone = use_signal(|| initial.phone.clone());
    let mut status = use_signal(|| initial.status);
    let mut errors = use_signal(validate::LeadFormErrors::default);

    let submit = move |_: MouseEvent| {
        let form = NewLead {
            name: name.read().clone(),
            email: email.read().clone(),
            phone: phone.read().clone(),
            status: *status.read(),
        };
        errors.set(submit_lead(form, |form| on_save.call(form)));
    };

    let title = if editing { "Edit Lead" } else { "Add New Lead" };

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "lead-name", "Name" }
                        input {
                            id: "lead-name",
                            class: "form-input",
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                        if let Some(msg) = errors.read().name {
                            p { class: "form-error", "{msg}" }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "lead-email", "Email" }
                        input {
                            id: "lead-email",
                            class: "form-input",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        if let Some(msg) = errors.read().email {
                            p { class: "form-error", "{msg}" }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "lead-phone", "Phone" }
                        input {
                            id: "lead-phone",
                            class: "form-input",
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "lead-status", "Status" }
                        select {
                            id: "lead-status",
                            class: "form-input",
                            value: "{status}",
                            onchange: move |e| {
                                status.set(LeadStatus::parse(&e.value()).unwrap_or_default())
                            },
                            for choice in LeadStatus::ALL {
                                option {
                                    value: choice.as_str(),
                                    selected: *status.read() == choice,
                                    "{choice}"
                                }
                            }
                        }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: submit,
                        if editing { "Update" } else { "Add" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DeleteConfirmModal(
    deleting: bool,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| if !deleting { on_close.call(()) },
            div { class: "modal modal-sm",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Confirm Delete" }
                    if !deleting {
                        button {
                            class: "modal-close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                }
                div { class: "modal-body",
                    p { "Are you sure you want to delete this lead? This action cannot be undone." }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: deleting,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: deleting,
                        onclick: move |_| on_confirm.call(()),
                        if deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}

/// One of the dashboard's summary tiles. Missing values render as "N/A".
#[component]
pub fn MetricCard(title: &'static str, icon: &'static str, value: Option<u64>) -> Element {
    let shown = value.map_or_else(|| "N/A".to_string(), |v| v.to_string());

    rsx! {
        div { class: "metric-card",
            div { class: "metric-icon", "{icon}" }
            div { class: "metric-body",
                p { class: "metric-title", "{title}" }
                p { class: "metric-value", "{shown}" }
            }
        }
    }
}

#[cfg(test)]
#[path = "components_test.rs"]
mod tests;
