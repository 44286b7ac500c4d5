//! Sync engine
//!
//! Drives one stream at a time: computes the replication window, walks
//! pages until the paginator stops, reshapes each record and advances the
//! stream's bookmark. State is checkpointed to disk after every page, so
//! an interrupted run resumes from the last completed page rather than
//! the beginning.

mod types;

pub use types::{Message, SyncConfig, SyncStats};

use crate::auth::ApiKeyAuth;
use crate::config::ConnectorConfig;
use crate::decode::{JsonDecoder, RECORDS_JSONPATH};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{PageCountPaginator, PaginationState, Paginator};
use crate::state::StateManager;
use crate::streams::{self, StreamSpec};
use crate::window::window_params;
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};

pub struct SyncEngine {
    client: HttpClient,
    decoder: JsonDecoder,
    state: StateManager,
    start_date: NaiveDate,
    sync_config: SyncConfig,
}

impl SyncEngine {
    /// Build an engine from a validated config and a state handle
    pub fn new(config: &ConnectorConfig, state: StateManager) -> Result<Self> {
        let auth = ApiKeyAuth::from_config(config);
        let http_config = HttpClientConfig::new(&config.api_url)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .headers(auth.headers());

        Ok(Self {
            client: HttpClient::with_config(http_config)?,
            decoder: JsonDecoder::with_path(RECORDS_JSONPATH),
            state,
            start_date: config.start_date()?,
            sync_config: SyncConfig::default(),
        })
    }

    /// Override the sync tunables
    #[must_use]
    pub fn with_sync_config(mut self, sync_config: SyncConfig) -> Self {
        self.sync_config = sync_config;
        self
    }

    /// The state handle this engine checkpoints through
    pub fn state(&self) -> &StateManager {
        &self.state
    }

    /// Sync one stream to completion, returning the emitted messages and
    /// run counters.
    pub async fn sync_stream(&self, spec: &StreamSpec) -> Result<(Vec<Message>, SyncStats)> {
        let bookmark = match spec.replication_key {
            Some(_) => self.state.get_bookmark(spec.name).await,
            None => None,
        };
        let today = Utc::now().date_naive();
        let window = window_params(spec.window, bookmark.as_deref(), self.start_date, today)?;

        info!(
            stream = spec.name,
            bookmark = bookmark.as_deref().unwrap_or("<none>"),
            "starting sync"
        );

        let paginator = PageCountPaginator::new(spec.page_size);
        let mut page_state = PaginationState::new();
        let mut messages = Vec::new();
        let mut stats = SyncStats::default();

        loop {
            let mut query = window.clone();
            query.extend(paginator.page_params(&page_state));

            let body = self.client.get(spec.path, &query).await?;
            let value = self.decoder.parse(&body)?;
            stats.pages += 1;

            // A bare error envelope in place of the page array means the
            // request itself was rejected; stop the stream here.
            if let Some(message) = page_level_error(&value) {
                warn!(stream = spec.name, message, "vendor rejected page request");
                break;
            }

            let records = self.decoder.extract(&value)?;
            let page_count = records.len();
            stats.records_fetched += page_count as u64;

            let mut reached_max = false;
            for record in records {
                let Value::Object(map) = record else {
                    stats.records_skipped += 1;
                    continue;
                };

                let Some(flat) = streams::post_process(spec, map) else {
                    stats.records_skipped += 1;
                    continue;
                };

                if let Some(rk) = spec.replication_key {
                    if let Some(value) = flat.get(rk).and_then(Value::as_str) {
                        self.state.advance_bookmark(spec.name, value).await;
                    }
                }

                messages.push(Message::record(spec.name, Value::Object(flat)));
                stats.records_emitted += 1;

                if let Some(max) = self.sync_config.max_records {
                    if stats.records_emitted >= max {
                        reached_max = true;
                        break;
                    }
                }
            }

            self.state.checkpoint().await?;
            if self.sync_config.state_per_page {
                messages.push(self.state_message().await?);
            }

            if reached_max {
                info!(stream = spec.name, max = ?self.sync_config.max_records, "record cap reached");
                break;
            }

            let next = paginator.process_page(page_count, &mut page_state);
            if next.is_done() {
                break;
            }
        }

        if !self.sync_config.state_per_page {
            messages.push(self.state_message().await?);
        }

        info!(
            stream = spec.name,
            pages = stats.pages,
            emitted = stats.records_emitted,
            skipped = stats.records_skipped,
            "sync finished"
        );

        Ok((messages, stats))
    }

    async fn state_message(&self) -> Result<Message> {
        let snapshot = self.state.snapshot().await;
        Ok(Message::state(serde_json::to_value(snapshot)?))
    }
}

impl std::fmt::Debug for SyncEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncEngine")
            .field("client", &self.client)
            .field("start_date", &self.start_date)
            .finish_non_exhaustive()
    }
}

/// Detect a whole-page `{code, message}` error envelope
fn page_level_error(value: &Value) -> Option<&str> {
    let obj = value.as_object()?;
    if obj.contains_key("code") && obj.contains_key("message") {
        Some(obj.get("message")?.as_str().unwrap_or("<no message>"))
    } else {
        None
    }
}
