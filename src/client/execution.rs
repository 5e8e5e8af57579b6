//! The single dispatch path shared by every endpoint method.

use crate::client::core::EvolutionClient;
use crate::client::endpoint::{ApiRequest, Auth};
use crate::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

impl EvolutionClient {
    /// Resolve `request` against the current instance, snapshot the
    /// credential and perform exactly one HTTP call.
    pub(crate) async fn dispatch(&self, request: ApiRequest) -> Result<Value> {
        let endpoint = request.endpoint();
        let instance = self.instance.load_full();
        let http = request.resolve(instance.as_deref().map(String::as_str))?;

        let credential: Arc<String> = match endpoint.auth {
            Auth::Active => self.credential.load_full(),
            Auth::Global => Arc::clone(&self.global_api_key),
        };

        let request_id = Uuid::new_v4();
        let path = http.path();
        debug!(
            %request_id,
            method = %http.method,
            %path,
            query_params = http.query.len(),
            has_body = http.body.is_some(),
            "dispatching gateway request"
        );

        match self.transport.execute(&http, &credential).await {
            Ok(response) => {
                debug!(%request_id, %path, status = response.status, "gateway request succeeded");
                Ok(response.body)
            }
            Err(e) => {
                debug!(%request_id, %path, status = ?e.status(), error = %e, "gateway request failed");
                Err(e)
            }
        }
    }
}
