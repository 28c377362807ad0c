//! Async client for the source API.

use crate::error::{Error, Result};
use crate::wire::{Envelope, WireEmployee, WireRecord};
use mailboard_core::{Employee, Record};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the external mail source API.
#[derive(Debug, Clone)]
pub struct SourceClient {
    base_url: Url,
    http_client: Client,
}

impl SourceClient {
    /// Creates a client for the given base URL.
    ///
    /// The base path is normalized to end with a slash so endpoint paths
    /// join underneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or the HTTP client cannot
    /// be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let http_client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            base_url: base,
            http_client,
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the full record collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server reports a failure,
    /// or the payload does not parse.
    pub async fn fetch_records(&self) -> Result<Vec<Record>> {
        let records: Vec<WireRecord> = self.get_envelope("api/emails").await?;
        Ok(records.into_iter().map(WireRecord::into_record).collect())
    }

    /// Fetches the records still awaiting classification.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server reports a failure,
    /// or the payload does not parse.
    pub async fn fetch_pending_records(&self) -> Result<Vec<Record>> {
        let records: Vec<WireRecord> = self.get_envelope("api/emails/pending").await?;
        Ok(records.into_iter().map(WireRecord::into_record).collect())
    }

    /// Fetches a single record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server reports a failure,
    /// or the payload does not parse.
    pub async fn fetch_record(&self, id: &str) -> Result<Record> {
        let record: WireRecord = self.get_envelope(&format!("api/emails/{id}")).await?;
        Ok(record.into_record())
    }

    /// Fetches the employee roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server reports a failure,
    /// or the payload does not parse.
    pub async fn fetch_employees(&self) -> Result<Vec<Employee>> {
        let employees: Vec<WireEmployee> = self.get_envelope("api/funcionarios").await?;
        Ok(employees
            .into_iter()
            .map(WireEmployee::into_employee)
            .collect())
    }

    async fn get_envelope<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let endpoint = self.base_url.join(path)?;
        let response = self.http_client.get(endpoint.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.error);
            return Err(Error::status(status, message));
        }

        let Envelope {
            success,
            data,
            error,
        } = serde_json::from_str::<Envelope<T>>(&body)?;
        if !success {
            return Err(Error::status(status, error));
        }
        tracing::debug!(endpoint = %endpoint, "Fetched source payload");

        data.ok_or_else(|| Error::status(status, error))
    }
}
