use greenmap::configuration::{ApplicationSettings, DatabaseSettings, Settings};
use greenmap::startup::Application;
use secrecy::Secret;
use serde_json::Value;
use sqlx::{Connection, PgConnection};

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.api_client
            .get(&self.address)
            .query(query)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, body: &Value) -> reqwest::Response {
        self.api_client
            .post(&self.address)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, query: &[(&str, &str)]) -> reqwest::Response {
        self.api_client
            .delete(&self.address)
            .query(query)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn options(&self) -> reqwest::Response {
        self.api_client
            .request(reqwest::Method::OPTIONS, &self.address)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn invoke(&self, event: &Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/invoke", &self.address))
            .json(event)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app(database_url: Option<String>) -> TestApp {
    let configuration = Settings {
        database: DatabaseSettings {
            url: database_url.map(Secret::new),
            require_ssl: false,
        },
        application: ApplicationSettings {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", application.port());
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        api_client: reqwest::Client::new(),
    }
}

/// Spawns an app backed by the database at `DATABASE_URL`, with the schema migrated.
pub async fn spawn_app_with_database() -> TestApp {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests.");

    let mut connection = PgConnection::connect(&database_url)
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&mut connection)
        .await
        .expect("Failed to migrate the database.");
    connection
        .close()
        .await
        .expect("Failed to close the migration connection.");

    spawn_app(Some(database_url)).await
}

pub async fn json_body(response: reqwest::Response) -> Value {
    response.json().await.expect("Response body is not JSON.")
}
