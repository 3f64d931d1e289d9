// src/fetch/net.rs
use std::time::Duration;

use reqwest::blocking::Client;

use super::FetchError;
use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Status and raw body of one response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Page {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Where pages come from. Shared by every worker thread.
pub trait PageSource: Send + Sync {
    fn get(&self, url: &str) -> Result<Page, FetchError>;
}

/// Blocking HTTP(S) GET with a browser user agent.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn get(&self, url: &str) -> Result<Page, FetchError> {
        let resp = self.client.get(url.trim()).send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();
        Ok(Page { status, body })
    }
}
