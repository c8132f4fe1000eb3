//! Throw-away backend and redirect recorder shared by the client tests.

use axum::Router;
use std::{cell::Cell, rc::Rc};
use tokio::net::TcpListener;

use crate::{ApiClient, Config, LoginRedirect, MemoryBackend, SessionBackend, SessionStore};
use types::Result;

#[derive(Clone, Default)]
pub struct RecordingRedirect {
    count: Rc<Cell<usize>>,
}

impl RecordingRedirect {
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl LoginRedirect for RecordingRedirect {
    fn redirect_to_login(&self) {
        self.count.set(self.count.get() + 1);
    }
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

pub fn client(config: &Config) -> (ApiClient, SessionStore, RecordingRedirect) {
    let session = SessionStore::memory();
    let redirect = RecordingRedirect::default();
    let client = ApiClient::configure(config, session.clone(), redirect.clone())
        .expect("configure client");
    (client, session, redirect)
}

/// A config pointing at a port nothing listens on.
pub fn unreachable() -> Config {
    Config::new("http://127.0.0.1:9").expect("unreachable url")
}

/// Session storage that keeps its record no matter what, like a browser
/// refusing `localStorage.removeItem`.
#[derive(Default)]
pub struct StickyBackend(MemoryBackend);

impl SessionBackend for StickyBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.0.load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.0.save(key, value)
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(types::Error::Storage("storage is read-only".into()))
    }
}
