//! This module provides a client to connect to a remote task service

use std::error::Error;

use async_trait::async_trait;
use url::Url;

use crate::task::RemoteTask;
use crate::traits::TaskSource;

/// A task source that fetches its records from a REST endpoint.
///
/// The endpoint is expected to answer a `GET` with a JSON array of records, each carrying `title`,
/// `tag` and `done` fields. Authentication is HTTP basic.
pub struct Client {
    url: Url,
    username: String,
    password: String,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>, T: ToString, U: ToString>(url: S, username: T, password: U) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;

        Ok(Self {
            url,
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// The endpoint this client fetches from
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl TaskSource for Client {
    async fn fetch_tasks(&self) -> Result<Vec<RemoteTask>, Box<dyn Error>> {
        let res = reqwest::Client::new()
            .get(self.url.as_str())
            .basic_auth(self.username.clone(), Some(self.password.clone()))
            .send()
            .await?;

        if res.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {}", res.status()).into());
        }

        let text = res.text().await?;
        let records: Vec<RemoteTask> = serde_json::from_str(&text)?;
        log::debug!("Fetched {} task records from {}", records.len(), self.url);
        Ok(records)
    }
}
