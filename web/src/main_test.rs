use super::*;
use crate::testing;
use dioxus::prelude::*;

const MESSAGE: &str = "Lead added successfully";

#[component]
fn ToastHost() -> Element {
    use_context_provider(|| ToastState::with_timeout(Duration::from_millis(200)));
    let mut page_open = use_signal(|| true);

    rsx! {
        if page_open() {
            RaisingPage { on_raised: move |_| page_open.set(false) }
        }
        Snackbar {}
    }
}

/// Raises a toast from its own task, then asks to be closed.
#[component]
fn RaisingPage(on_raised: EventHandler<()>) -> Element {
    let mut toast = use_toast();
    use_effect(move || {
        spawn(async move {
            toast.success(MESSAGE);
            on_raised.call(());
        });
    });

    rsx! { p { "lead page" } }
}

#[tokio::test]
async fn toast_hides_after_the_page_that_raised_it_is_gone() {
    let mut dom = VirtualDom::new(ToastHost);
    dom.rebuild_in_place();

    testing::render_until(&mut dom, |html| {
        html.contains(MESSAGE) && !html.contains("lead page")
    })
    .await;
    testing::render_until(&mut dom, |html| !html.contains(MESSAGE)).await;
}

#[test]
fn login_routes_carry_an_optional_notice() {
    assert_eq!(Route::login(), Route::Login { error: None });
    assert_eq!(
        Route::login_with("Failed"),
        Route::Login {
            error: Some("Failed".into())
        }
    );
}
