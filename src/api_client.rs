use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::types::Payload;

pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    // a zero timeout leaves reqwest's default (none) in place
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Client for HttpClient {
    async fn get(&self, path: &str) -> Result<Payload, Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        // the body of a failed response is never read
        if !status.is_success() {
            debug!("GET {} answered {}", url, status);
            return Ok(Payload {
                status: status.as_u16(),
                body: Vec::new(),
            });
        }

        Ok(Payload {
            status: status.as_u16(),
            body: resp.bytes().await?.to_vec(),
        })
    }
}
