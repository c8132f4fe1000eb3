use super::components::{DeleteConfirmModal, LeadDialog};
use crate::{ToastState, use_api, use_toast};
use api::ApiClient;
use dioxus::prelude::*;
use types::{Ack, ApiResult, Lead, LeadId, NewLead, page::Pagination};

#[derive(Debug, Clone, PartialEq)]
pub enum LeadsState {
    Loading,
    Failed(String),
    Ready(Vec<Lead>),
}

impl LeadsState {
    pub fn from_result(result: ApiResult<Vec<Lead>>) -> Self {
        match result {
            Ok(leads) => LeadsState::Ready(leads),
            Err(err) => {
                tracing::warn!(%err, "failed to fetch leads");
                LeadsState::Failed("Error fetching leads".into())
            }
        }
    }

    pub fn leads(&self) -> &[Lead] {
        match self {
            LeadsState::Ready(leads) => leads,
            _ => &[],
        }
    }
}

/// Which modal, if any, is over the table.
#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Closed,
    Add,
    Edit(Lead),
    ConfirmDelete(LeadId),
}

/// A write the table sends to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    Create(NewLead),
    Update(Lead),
    Delete(LeadId),
}

impl Change {
    pub fn success_message(&self) -> &'static str {
        match self {
            Change::Create(_) => "Lead added successfully",
            Change::Update(_) => "Lead updated successfully",
            Change::Delete(_) => "Lead deleted successfully",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Change::Create(_) | Change::Update(_) => "An error occurred while saving the lead",
            Change::Delete(_) => "An error occurred while deleting the lead",
        }
    }

    async fn send(&self, api: &ApiClient) -> ApiResult<Ack> {
        match self {
            Change::Create(lead) => api.create_lead(lead).await,
            Change::Update(lead) => api.update_lead(lead).await,
            Change::Delete(id) => api.delete_lead(id).await,
        }
    }
}

/// Sends `change` and, once the backend has accepted it, reads the list back.
/// A rejected change leaves the list untouched and is not followed by a fetch.
pub async fn apply(api: &ApiClient, change: &Change) -> ApiResult<LeadsState> {
    change.send(api).await?;
    Ok(LeadsState::from_result(api.list_leads().await))
}

/// Installs a freshly fetched list, pulling the page back in range if it shrank.
fn show(mut state: Signal<LeadsState>, mut pager: Signal<Pagination>, next: LeadsState) {
    let clamped = pager.peek().clamped(next.leads().len());
    pager.set(clamped);
    state.set(next);
}

async fn reload(api: ApiClient, mut state: Signal<LeadsState>, pager: Signal<Pagination>) {
    state.set(LeadsState::Loading);
    let next = LeadsState::from_result(api.list_leads().await);
    show(state, pager, next);
}

async fn commit(
    api: ApiClient,
    change: Change,
    mut toast: ToastState,
    state: Signal<LeadsState>,
    pager: Signal<Pagination>,
) {
    match apply(&api, &change).await {
        Ok(next) => {
            toast.success(change.success_message());
            show(state, pager, next);
        }
        Err(e) => toast.api_error(change.failure_message(), &e),
    }
}

#[component]
pub fn Leads() -> Element {
    let api = use_api();
    let toast = use_toast();
    let state = use_signal(|| LeadsState::Loading);
    let mut pager = use_signal(Pagination::default);
    let mut dialog = use_signal(|| Dialog::Closed);
    let mut deleting = use_signal(|| false);

    let mount_api = api.clone();
    use_effect(move || {
        spawn(reload(mount_api.clone(), state, pager));
    });

    let save_api = api.clone();
    let save = move |form: NewLead| {
        let change = match &*dialog.peek() {
            Dialog::Edit(lead) => Change::Update(form.with_id(lead.id.clone())),
            _ => Change::Create(form),
        };
        dialog.set(Dialog::Closed);
        spawn(commit(save_api.clone(), change, toast, state, pager));
    };

    let delete_api = api.clone();
    let confirm_delete = move |_: ()| {
        let Dialog::ConfirmDelete(id) = dialog.peek().clone() else {
            return;
        };

        let api = delete_api.clone();
        spawn(async move {
            deleting.set(true);
            commit(api, Change::Delete(id), toast, state, pager).await;
            deleting.set(false);
            dialog.set(Dialog::Closed);
        });
    };

    let current = state.read().clone();
    let page = *pager.read();

    let body = match current {
        LeadsState::Loading => rsx! {
            div { class: "loading", "Loading leads..." }
        },
        LeadsState::Failed(message) => rsx! {
            div { class: "alert alert-error", "{message}" }
        },
        LeadsState::Ready(leads) => {
            let total = leads.len();
            let total_pages = page.total_pages(total);

            rsx! {
                div { class: "card",
                    if leads.is_empty() {
                        div { class: "empty-state",
                            "No leads found. Click \"Add New Lead\" to create one."
                        }
                    } else {
                        div { class: "table-container",
                            table {
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Email" }
                                        th { "Phone" }
                                        th { "Status" }
                                        th { "Actions" }
                                    }
                                }
                                tbody {
                                    for lead in page.window(leads.as_slice()).iter().cloned() {
                                        {
                                            let delete_id = lead.id.clone();
                                            let edit = lead.clone();
                                            rsx! {
                                                tr { key: "{lead.id}",
                                                    td { "{lead.name}" }
                                                    td { "{lead.email}" }
                                                    td { "{lead.phone}" }
                                                    td {
                                                        span { class: lead.status.badge_class(), "{lead.status}" }
                                                    }
                                                    td { class: "table-actions",
                                                        button {
                                                            class: "btn btn-link",
                                                            onclick: move |_| dialog.set(Dialog::Edit(edit.clone())),
                                                            "Edit"
                                                        }
                                                        button {
                                                            class: "btn btn-link btn-link-danger",
                                                            onclick: move |_| dialog.set(Dialog::ConfirmDelete(delete_id.clone())),
                                                            "Delete"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "pagination",
                        button {
                            class: "btn btn-secondary",
                            disabled: !page.has_previous(),
                            onclick: move |_| pager.set(page.previous()),
                            "Previous"
                        }
                        span { class: "pagination-info", "Page {page.page} of {total_pages}" }
                        button {
                            class: "btn btn-secondary",
                            disabled: !page.has_next(total),
                            onclick: move |_| pager.set(page.next(total)),
                            "Next"
                        }
                    }
                }
            }
        }
    };

    let modal = match dialog.read().clone() {
        Dialog::Add => rsx! {
            LeadDialog {
                lead: None,
                on_close: move |_| dialog.set(Dialog::Closed),
                on_save: save.clone(),
            }
        },
        Dialog::Edit(lead) => rsx! {
            LeadDialog {
                lead: Some(lead),
                on_close: move |_| dialog.set(Dialog::Closed),
                on_save: save.clone(),
            }
        },
        Dialog::ConfirmDelete(_) => rsx! {
            DeleteConfirmModal {
                deleting: *deleting.read(),
                on_close: move |_| dialog.set(Dialog::Closed),
                on_confirm: confirm_delete.clone(),
            }
        },
        Dialog::Closed => rsx! {},
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Leads Details" }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| dialog.set(Dialog::Add),
                        "Add New Lead"
                    }
                }
            }

            {modal}

            {body}
        }
    }
}

#[cfg(test)]
#[path = "leads_test.rs"]
mod tests;
