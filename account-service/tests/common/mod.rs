use account_service::config::{Config, ServerConfig};
use account_service::startup::{AppState, Application};
use serde_json::{json, Value};

pub struct TestApp {
    pub address: String,
    pub state: AppState,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            service_name: "account-service-test".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());
        let state = app.state();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            state,
            client,
        }
    }

    pub async fn post_customer(&self, cpf: &str, name: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/customer", self.address))
            .json(&json!({ "cpf": cpf, "name": name }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Create a customer and return its generated id.
    pub async fn register_customer(&self, cpf: &str, name: &str) -> String {
        let response = self.post_customer(cpf, name).await;
        assert_eq!(201, response.status().as_u16());
        let body: Value = response.json().await.expect("Customer body was not JSON");
        body["id"]
            .as_str()
            .expect("Customer id missing")
            .to_string()
    }

    pub async fn get_customer(&self, id: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/customer", self.address))
            .header("id", id)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put_customer(&self, id: &str, name: &str) -> reqwest::Response {
        self.client
            .put(format!("{}/customer", self.address))
            .header("id", id)
            .json(&json!({ "name": name }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_customer(&self, id: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}/customer", self.address))
            .header("id", id)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_statement(&self, id: &str, date: Option<&str>) -> reqwest::Response {
        let url = match date {
            Some(date) => format!("{}/statement?date={}", self.address, date),
            None => format!("{}/statement", self.address),
        };
        self.client
            .get(url)
            .header("id", id)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_deposit(&self, id: &str, description: &str, amount: i64) -> reqwest::Response {
        self.client
            .post(format!("{}/deposit", self.address))
            .header("id", id)
            .json(&json!({ "description": description, "amount": amount }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_withdraw(
        &self,
        id: &str,
        description: &str,
        amount: i64,
    ) -> reqwest::Response {
        self.client
            .post(format!("{}/withdraw", self.address))
            .header("id", id)
            .json(&json!({ "description": description, "amount": amount }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Current full-history balance, as the API serializes it.
    pub async fn balance(&self, id: &str) -> String {
        let response = self.get_statement(id, None).await;
        assert_eq!(200, response.status().as_u16());
        let body: Value = response.json().await.expect("Statement body was not JSON");
        body["balance"]
            .as_str()
            .expect("balance missing")
            .to_string()
    }
}

/// Extract the `error` field of a failure response.
pub async fn error_of(response: reqwest::Response) -> String {
    let body: Value = response.json().await.expect("Error body was not JSON");
    body["error"]
        .as_str()
        .expect("error field missing")
        .to_string()
}
