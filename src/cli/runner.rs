//! CLI runner - executes commands

use crate::auth::ApiKeyAuth;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ConnectorConfig;
use crate::engine::{Message, SyncConfig, SyncEngine};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::state::StateManager;
use crate::streams;
use serde_json::{json, Value};
use std::time::{Duration, Instant};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check { config_json } => self.check(config_json.as_deref()).await,
            Commands::Discover => self.discover(),
            Commands::Read {
                streams,
                config_json,
                max_records,
                state_per_page,
                fail_fast,
            } => {
                self.read(
                    streams.as_deref(),
                    config_json.as_deref(),
                    *max_records,
                    *state_per_page,
                    *fail_fast,
                )
                .await
            }
            Commands::Streams => self.streams(),
            Commands::Validate { config_json } => self.validate(config_json.as_deref()),
        }
    }

    /// Load configuration, inline JSON taking precedence over the file
    fn load_config(&self, inline: Option<&str>) -> Result<ConnectorConfig> {
        if let Some(json_str) = inline {
            return ConnectorConfig::from_json(json_str);
        }
        let path = self
            .cli
            .config
            .as_ref()
            .ok_or_else(|| Error::config("Config file not specified (use -C flag)"))?;
        ConnectorConfig::from_file(path)
    }

    /// Load state from the state file, or start in memory
    fn load_state(&self) -> Result<StateManager> {
        match &self.cli.state {
            Some(path) => StateManager::from_file(path),
            None => Ok(StateManager::in_memory()),
        }
    }

    /// Check connection by fetching a single-record page of the first stream
    async fn check(&self, config_json: Option<&str>) -> Result<()> {
        let config = self.load_config(config_json)?;

        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!("Checking connection to {}", config.api_url)
            }
        }));

        let auth = ApiKeyAuth::from_config(&config);
        let http_config = HttpClientConfig::new(&config.api_url)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .headers(auth.headers());
        let client = HttpClient::with_config(http_config)?;

        let probe = &streams::all()[0];
        let query = vec![
            ("dateFrom".to_string(), config.start_date.clone()),
            ("count".to_string(), "1".to_string()),
            ("page".to_string(), "1".to_string()),
        ];

        match client.get(probe.path, &query).await {
            Ok(_) => {
                self.output_message(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "SUCCEEDED",
                        "message": "Connection successful"
                    }
                }));
            }
            Err(e) => {
                self.output_message(&json!({
                    "type": "CONNECTION_STATUS",
                    "connectionStatus": {
                        "status": "FAILED",
                        "message": format!("Connection failed: {e}")
                    }
                }));
            }
        }

        Ok(())
    }

    /// Emit the stream catalog
    fn discover(&self) -> Result<()> {
        let catalog_streams: Vec<Value> = streams::all()
            .iter()
            .map(|spec| {
                let primary_key: Vec<Vec<&str>> =
                    spec.primary_keys.iter().map(|k| vec![*k]).collect();
                json!({
                    "name": spec.name,
                    "json_schema": spec.schema.to_json_schema(),
                    "supported_sync_modes": if spec.replication_key.is_some() {
                        vec!["full_refresh", "incremental"]
                    } else {
                        vec!["full_refresh"]
                    },
                    "source_defined_cursor": spec.replication_key.is_some(),
                    "default_cursor_field": spec.replication_key.map(|k| vec![k]),
                    "source_defined_primary_key": primary_key
                })
            })
            .collect();

        self.output_message(&json!({
            "type": "CATALOG",
            "catalog": {
                "streams": catalog_streams
            }
        }));

        Ok(())
    }

    /// Read data
    async fn read(
        &self,
        stream_filter: Option<&str>,
        config_json: Option<&str>,
        max_records: Option<u64>,
        state_per_page: bool,
        fail_fast: bool,
    ) -> Result<()> {
        let sync_start = Instant::now();
        let config = self.load_config(config_json)?;
        let state = self.load_state()?;

        let filter: Option<Vec<&str>> =
            stream_filter.map(|s| s.split(',').map(str::trim).collect());

        let sync_config = SyncConfig {
            max_records,
            state_per_page,
        };
        let engine = SyncEngine::new(&config, state)?.with_sync_config(sync_config);

        let mut stream_results: Vec<Value> = Vec::new();
        let mut total_records = 0u64;
        let mut first_error: Option<Error> = None;

        for spec in streams::all() {
            if let Some(ref filter) = filter {
                if !filter.contains(&spec.name) {
                    continue;
                }
            }

            let stream_start = Instant::now();

            self.output_message(&json!({
                "type": "LOG",
                "log": {
                    "level": "INFO",
                    "message": format!("Starting sync for stream: {}", spec.name)
                }
            }));

            match engine.sync_stream(spec).await {
                Ok((messages, stats)) => {
                    for msg in &messages {
                        self.output_engine_message(msg);
                    }
                    total_records += stats.records_emitted;
                    stream_results.push(json!({
                        "stream": spec.name,
                        "status": "SUCCESS",
                        "records_synced": stats.records_emitted,
                        "records_skipped": stats.records_skipped,
                        "pages": stats.pages,
                        "duration_ms": stream_start.elapsed().as_millis() as u64
                    }));
                }
                Err(e) => {
                    self.output_message(&json!({
                        "type": "LOG",
                        "log": {
                            "level": "ERROR",
                            "message": format!("Error syncing stream {}: {}", spec.name, e)
                        }
                    }));
                    stream_results.push(json!({
                        "stream": spec.name,
                        "status": "FAILED",
                        "error": e.to_string(),
                        "duration_ms": stream_start.elapsed().as_millis() as u64
                    }));
                    // Streams are isolated: one failure does not stop the
                    // others unless the caller asked for it. The first
                    // error still decides the exit code after the summary.
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                    if fail_fast {
                        break;
                    }
                }
            }
        }

        // Always emit final state so the caller can capture it
        engine.state().checkpoint().await?;
        let final_state = engine.state().snapshot().await;
        self.output_message(&json!({
            "type": "STATE",
            "state": serde_json::to_value(final_state)?
        }));

        let successful = stream_results
            .iter()
            .filter(|r| r["status"] == "SUCCESS")
            .count();
        let failed = stream_results.len() - successful;

        self.output_message(&json!({
            "type": "SYNC_SUMMARY",
            "summary": {
                "status": if failed == 0 { "SUCCEEDED" } else if successful == 0 { "FAILED" } else { "PARTIAL" },
                "total_records": total_records,
                "total_streams": stream_results.len(),
                "successful_streams": successful,
                "failed_streams": failed,
                "duration_ms": sync_start.elapsed().as_millis() as u64,
                "state_file": self.cli.state.as_ref().map(|p| p.to_string_lossy().to_string()),
                "streams": stream_results
            }
        }));

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// List stream names
    fn streams(&self) -> Result<()> {
        let names: Vec<&str> = streams::all().iter().map(|s| s.name).collect();

        self.output_message(&json!({
            "type": "STREAMS",
            "streams": names
        }));

        Ok(())
    }

    /// Validate the config without touching the network
    fn validate(&self, config_json: Option<&str>) -> Result<()> {
        let config = self.load_config(config_json)?;

        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!(
                    "Config is valid: api_url={}, start_date={}, {} streams available",
                    config.api_url,
                    config.start_date,
                    streams::all().len()
                )
            }
        }));

        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }

    /// Output an engine message
    fn output_engine_message(&self, msg: &Message) {
        match msg {
            Message::Record { stream, record } => {
                self.output_message(&json!({
                    "type": "RECORD",
                    "record": {
                        "stream": stream,
                        "data": record,
                        "emitted_at": chrono::Utc::now().timestamp_millis()
                    }
                }));
            }
            Message::State { value } => {
                self.output_message(&json!({
                    "type": "STATE",
                    "state": value
                }));
            }
        }
    }
}
