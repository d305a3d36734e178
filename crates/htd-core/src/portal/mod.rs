//! Exam portal HTTP client.
//!
//! One curl easy handle is owned per batch run and reused for every request,
//! so libcurl keeps the connection alive between lookups and downloads.
//! Blocking; one request in flight at a time.

mod tickets;

pub use tickets::{parse_ticket_list, TicketDescriptor};

use curl::easy::Easy;
use std::time::Duration;
use url::Url;

use crate::config::HtdConfig;
use crate::fetch::FetchFailure;

const LIST_PATH: &str = "HallTicket/GetList";
const DOWNLOAD_PATH: &str = "HallTicket/Get";

/// Status and full body of a completed request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct PortalClient {
    easy: Easy,
    base: Url,
}

impl PortalClient {
    pub fn new(cfg: &HtdConfig) -> Result<Self, FetchFailure> {
        let base = base_url(&cfg.base_url)?;

        let mut easy = Easy::new();
        easy.useragent(&cfg.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
        easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

        Ok(Self { easy, base })
    }

    /// `GET {base}/HallTicket/GetList?id={identifier}`.
    pub fn list_tickets(&mut self, identifier: &str) -> Result<HttpResponse, FetchFailure> {
        let url = endpoint(&self.base, LIST_PATH, identifier)?;
        self.get(&url)
    }

    /// `GET {base}/HallTicket/Get?id={ticket_id}`.
    pub fn download(&mut self, ticket_id: &str) -> Result<HttpResponse, FetchFailure> {
        let url = endpoint(&self.base, DOWNLOAD_PATH, ticket_id)?;
        self.get(&url)
    }

    fn get(&mut self, url: &Url) -> Result<HttpResponse, FetchFailure> {
        let mut body = Vec::new();
        self.easy.url(url.as_str())?;
        self.easy.get(true)?;
        {
            let mut transfer = self.easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let status = self.easy.response_code()?;
        tracing::debug!(url = %url, status, bytes = body.len(), "GET");
        Ok(HttpResponse { status, body })
    }
}

/// Parses the configured base, ensuring a trailing slash so endpoint paths
/// resolve beneath it instead of replacing its last segment.
fn base_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut base = raw.trim().trim_end_matches('/').to_string();
    base.push('/');
    Url::parse(&base)
}

fn endpoint(base: &Url, path: &str, id: &str) -> Result<Url, url::ParseError> {
    let mut url = base.join(path)?;
    url.query_pairs_mut().clear().append_pair("id", id);
    Ok(url)
}
