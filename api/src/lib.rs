mod client;
mod config;
mod session;

#[cfg(test)]
mod testing;

pub use client::{ApiClient, LoginRedirect, RequestConfig};
pub use config::{API_URL_VAR, Config, DEFAULT_API_URL};
#[cfg(target_arch = "wasm32")]
pub use session::LocalStorageBackend;
pub use session::{MemoryBackend, SessionBackend, SessionStore};

use types::{Ack, ApiResult, Credentials, Lead, LeadId, LeadStats, LoginResponse, NewLead};

/// One method per backend endpoint, each a single HTTP call.
impl ApiClient {
    pub async fn register(&self, credentials: &Credentials) -> ApiResult<Ack> {
        self.send(RequestConfig::post("/users/register").json(credentials)?)
            .await
    }

    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        self.send(RequestConfig::post("/users/login").json(credentials)?)
            .await
    }

    pub async fn list_leads(&self) -> ApiResult<Vec<Lead>> {
        self.send(RequestConfig::get("/leads/get")).await
    }

    pub async fn lead_stats(&self) -> ApiResult<LeadStats> {
        self.send(RequestConfig::get("/leads/stats")).await
    }

    pub async fn create_lead(&self, lead: &NewLead) -> ApiResult<Ack> {
        self.send(RequestConfig::post("/leads/create").json(lead)?)
            .await
    }

    pub async fn update_lead(&self, lead: &Lead) -> ApiResult<Ack> {
        self.send(RequestConfig::put("/leads/update").json(lead)?)
            .await
    }

    pub async fn delete_lead(&self, id: &LeadId) -> ApiResult<Ack> {
        self.send(RequestConfig::delete("/leads/delete").query("_id", id.as_str()))
            .await
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
