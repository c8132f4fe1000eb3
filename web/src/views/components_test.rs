use super::*;
use crate::testing::{self, Hits};
use crate::views::leads::{Change, apply};
use serde_json::json;

fn form(name: &str, email: &str) -> NewLead {
    NewLead {
        name: name.into(),
        email: email.into(),
        ..NewLead::default()
    }
}

#[test]
fn valid_form_is_handed_on_unchanged() {
    let mut accepted = None;
    let errors = submit_lead(form("Ada", "ada@example.com"), |f| accepted = Some(f));

    assert!(errors.is_empty());
    assert_eq!(accepted, Some(form("Ada", "ada@example.com")));
}

#[test]
fn blank_name_is_held_back_with_its_error() {
    let mut accepted = None;
    let errors = submit_lead(form("", "ada@example.com"), |f| accepted = Some(f));

    assert_eq!(errors.name, Some("Name is required"));
    assert_eq!(accepted, None);
}

#[tokio::test]
async fn invalid_forms_never_reach_the_backend() {
    let hits = Hits::default();
    let config = testing::serve(testing::lead_backend(&hits, json!([]))).await;
    let api = testing::client(&config);

    for invalid in [form("", "ada@example.com"), form("Ada", ""), form("Ada", "nope")] {
        let mut accepted = None;
        let errors = submit_lead(invalid, |f| accepted = Some(f));
        assert!(!errors.is_empty());

        if let Some(form) = accepted {
            apply(&api, &Change::Create(form)).await.unwrap();
        }
    }
    assert_eq!(hits.total(), 0);

    let mut accepted = None;
    submit_lead(form("Ada", "ada@example.com"), |f| accepted = Some(f));
    if let Some(form) = accepted {
        apply(&api, &Change::Create(form)).await.unwrap();
    }
    assert_eq!(hits.count("create"), 1);
    assert_eq!(hits.count("get"), 1);
}
