//! Workflow integration tests library.
//!
//! Spawns the account service in-process and drives complete business
//! workflows over real HTTP, the way an external client would.

use account_service::config::{Config, ServerConfig};
use account_service::startup::Application;
use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Context for workflow tests: a freshly spawned service and an HTTP client.
///
/// Each test creates its own context, so every workflow starts from an empty
/// store.
pub struct WorkflowTestContext {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl WorkflowTestContext {
    /// Spawn the service on a random port and wait until it is healthy.
    pub async fn new() -> Result<Self> {
        init_tracing();

        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            service_name: "account-service-workflow".to_string(),
        };

        let app = Application::build(config)
            .await
            .map_err(|e| anyhow!("Failed to build application: {}", e))?;
        let base_url = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();
        wait_for_health(&client, &base_url).await?;

        Ok(Self { base_url, client })
    }

    /// Register a customer, returning its generated id.
    pub async fn create_customer(&self, cpf: &str, name: &str) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/customer", self.base_url))
            .json(&json!({ "cpf": cpf, "name": name }))
            .send()
            .await?;

        if response.status().as_u16() != 201 {
            return Err(anyhow!("Customer creation failed: {}", response.status()));
        }

        let body: Value = response.json().await?;
        body["id"]
            .as_str()
            .map(|id| id.to_string())
            .ok_or_else(|| anyhow!("Customer id missing from response"))
    }

    /// Record a deposit, returning the response status.
    pub async fn deposit(&self, id: &str, description: &str, amount: i64) -> Result<u16> {
        let response = self
            .client
            .post(format!("{}/deposit", self.base_url))
            .header("id", id)
            .json(&json!({ "description": description, "amount": amount }))
            .send()
            .await?;
        Ok(response.status().as_u16())
    }

    /// Attempt a withdrawal, returning the response status.
    pub async fn withdraw(&self, id: &str, description: &str, amount: i64) -> Result<u16> {
        let response = self
            .client
            .post(format!("{}/withdraw", self.base_url))
            .header("id", id)
            .json(&json!({ "description": description, "amount": amount }))
            .send()
            .await?;
        Ok(response.status().as_u16())
    }

    /// Fetch the statement view (balance plus history).
    pub async fn statement(&self, id: &str) -> Result<Value> {
        let response = self
            .client
            .get(format!("{}/statement", self.base_url))
            .header("id", id)
            .send()
            .await?;
        Ok(response.json().await?)
    }
}

/// Poll the health endpoint until the service responds.
async fn wait_for_health(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let health_url = format!("{}/health", base_url);
    for _ in 0..50 {
        if let Ok(response) = client.get(&health_url).send().await {
            if response.status().is_success() {
                tracing::info!("Service is healthy at {}", base_url);
                return Ok(());
            }
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
    Err(anyhow!("Timeout waiting for service health"))
}
