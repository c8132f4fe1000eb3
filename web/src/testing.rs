//! Mock backend and headless rendering shared by the view tests.

use api::{ApiClient, Config, LoginRedirect, SessionStore};
use axum::{
    Json, Router,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use dioxus::prelude::*;
use serde_json::Value;
use std::{
    future::Ready,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::net::TcpListener;

/// Endpoints the mock backend was called on, in order.
#[derive(Clone, Default)]
pub struct Hits(Arc<Mutex<Vec<&'static str>>>);

impl Hits {
    pub fn count(&self, endpoint: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|e| **e == endpoint).count()
    }

    pub fn total(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    /// A handler that records `endpoint` and answers with `status` and `body`.
    pub fn reply(
        &self,
        endpoint: &'static str,
        status: StatusCode,
        body: Value,
    ) -> impl FnOnce() -> Ready<(StatusCode, Json<Value>)> + Clone + Send + Sync + 'static {
        let hits = self.clone();
        move || {
            hits.0.lock().unwrap().push(endpoint);
            std::future::ready((status, Json(body)))
        }
    }
}

/// Every lead endpoint, all succeeding. `/leads/get` always answers `leads`.
pub fn lead_backend(hits: &Hits, leads: Value) -> Router {
    let ok = || serde_json::json!({ "message": "ok" });
    Router::new()
        .route("/leads/get", get(hits.reply("get", StatusCode::OK, leads)))
        .route("/leads/create", post(hits.reply("create", StatusCode::OK, ok())))
        .route("/leads/update", put(hits.reply("update", StatusCode::OK, ok())))
        .route("/leads/delete", delete(hits.reply("delete", StatusCode::OK, ok())))
}

struct StayPut;

impl LoginRedirect for StayPut {
    fn redirect_to_login(&self) {}
}

/// Serves `router` on an ephemeral local port for the rest of the test.
pub async fn serve(router: Router) -> Config {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("mock backend stopped");
    });

    Config::new(&format!("http://{addr}")).expect("mock backend url")
}

pub fn client(config: &Config) -> ApiClient {
    ApiClient::configure(config, SessionStore::memory(), StayPut).expect("configure client")
}

/// Drives `dom` until its rendered HTML satisfies `done`, failing after a few
/// seconds with the last render.
pub async fn render_until(dom: &mut VirtualDom, done: impl Fn(&str) -> bool) -> String {
    let settled = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let html = dioxus_ssr::render(dom);
            if done(&html) {
                return html;
            }
            dom.wait_for_work().await;
            dom.render_immediate_to_vec();
        }
    })
    .await;

    match settled {
        Ok(html) => html,
        Err(_) => panic!("view never settled, last render:\n{}", dioxus_ssr::render(dom)),
    }
}
