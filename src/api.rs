//! Blocking HTTP client for the upstream card API.
//!
//! Used by the fetch stage to materialize `cards.json` and `sets.json`
//! locally; the update pipeline itself never talks to the network. Card and
//! set records are fetched and persisted verbatim as JSON so no upstream
//! field is lost between fetch and the site build.

use crate::config;
use crate::error::{PricedexError, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::thread;
use std::time::{Duration, Instant};

const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "PriceDex/1.0 (price-tracking bot)";

// ---------------------------------------------------------------------------
// RateLimiter
// ---------------------------------------------------------------------------

/// Minimum-interval spacing between requests.
///
/// Explicit state passed into the client rather than a module-level
/// variable, so callers (and tests) construct and own the bookkeeping.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Block until at least `min_interval` has passed since the previous
    /// call, then record this call. The first call never waits.
    pub fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                thread::sleep(self.min_interval - elapsed);
            }
        }
        self.last_request = Some(Instant::now());
    }
}

// ---------------------------------------------------------------------------
// Page envelope
// ---------------------------------------------------------------------------

/// One page of API results. Records are kept as raw JSON.
#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    data: Vec<serde_json::Value>,
    #[serde(default)]
    total_count: u32,
}

// ---------------------------------------------------------------------------
// CardApiClient
// ---------------------------------------------------------------------------

/// Client for the card data API.
pub struct CardApiClient {
    base_url: String,
    api_key: Option<String>,
    client: Option<Client>,
    limiter: RateLimiter,
}

impl CardApiClient {
    /// Create a client against `base_url`, rate-limited by `limiter`.
    ///
    /// The API key is read from `POKEMON_TCG_API_KEY` if set; the API works
    /// unauthenticated at a lower rate limit.
    pub fn new(base_url: impl Into<String>, limiter: RateLimiter) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: std::env::var("POKEMON_TCG_API_KEY").ok(),
            client: None,
            limiter,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> &Client {
        if self.client.is_none() {
            self.client = Some(
                Client::builder()
                    .timeout(REQUEST_TIMEOUT)
                    .user_agent(USER_AGENT)
                    .build()
                    .expect("failed to build HTTP client"),
            );
        }
        self.client.as_ref().unwrap()
    }

    /// GET a URL with retries: transport errors back off linearly, 429s
    /// back off exponentially. Gives up after [`MAX_RETRIES`] attempts.
    fn get_json(&mut self, url: &str) -> Result<serde_json::Value> {
        for attempt in 1..=MAX_RETRIES {
            self.limiter.wait();

            let mut request = self.client().get(url);
            if let Some(api_key) = &self.api_key {
                request = request.header("X-Api-Key", api_key.as_str());
            }

            let response = match request.send() {
                Ok(response) => response,
                Err(e) => {
                    if attempt == MAX_RETRIES {
                        return Err(e.into());
                    }
                    eprintln!("Attempt {attempt} failed for {url}: {e} -- retrying");
                    thread::sleep(Duration::from_secs(attempt as u64));
                    continue;
                }
            };

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                if attempt == MAX_RETRIES {
                    return Err(PricedexError::Api(format!(
                        "rate limit exceeded fetching {url}"
                    )));
                }
                let wait = Duration::from_secs(2u64.pow(attempt));
                eprintln!("Rate limited; waiting {}s before retry", wait.as_secs());
                thread::sleep(wait);
                continue;
            }

            return Ok(response.error_for_status()?.json()?);
        }

        Err(PricedexError::Api(format!(
            "failed to fetch {url} after {MAX_RETRIES} attempts"
        )))
    }

    /// Fetch all sets in one request.
    pub fn fetch_sets(&mut self) -> Result<Vec<serde_json::Value>> {
        let url = format!("{}/sets", self.base_url);
        let page: Page = serde_json::from_value(self.get_json(&url)?)?;
        Ok(page.data)
    }

    /// Fetch every card, paging from `start_page` until the reported total
    /// is covered. On a page failure the error is returned after printing a
    /// resume hint, so a long fetch can be restarted where it stopped.
    pub fn fetch_all_cards(&mut self, start_page: u32) -> Result<Vec<serde_json::Value>> {
        let mut all_cards = Vec::new();
        let mut page_num = start_page.max(1);

        loop {
            let url = format!(
                "{}/cards?page={}&pageSize={}",
                self.base_url,
                page_num,
                config::PAGE_SIZE
            );

            let value = match self.get_json(&url) {
                Ok(value) => value,
                Err(e) => {
                    eprintln!("Error fetching page {page_num}: {e}");
                    eprintln!("Resume from this page with: --page {page_num}");
                    return Err(e);
                }
            };
            let page: Page = serde_json::from_value(value)?;

            all_cards.extend(page.data);
            println!(
                "Fetched page {} ({} cards so far, total {})",
                page_num,
                all_cards.len(),
                page.total_count
            );

            if page_num * config::PAGE_SIZE >= page.total_count {
                break;
            }
            page_num += 1;
        }

        Ok(all_cards)
    }
}
