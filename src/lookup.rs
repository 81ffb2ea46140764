use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::cli::Cli;
use crate::errors::{BreachwatchError, Result};
use crate::records::{LookupFailure, LookupOutcome, NoDataKind};

/// Abstraction over environment / verbosity for lookup & batch operations.
/// This removes the direct dependency of the core lookup functions on the
/// concrete CLI type, so progress and error reporting can be redirected
/// without touching lookup or batching logic.
pub trait ProgressEnv {
    fn show_commands(&self) -> bool;
    fn is_trace(&self) -> bool;
    fn warn_enabled(&self) -> bool;
    fn error_enabled(&self) -> bool;
    fn progress_enabled(&self) -> bool;
}

impl ProgressEnv for Cli {
    fn show_commands(&self) -> bool {
        self.show_commands
    }
    fn is_trace(&self) -> bool {
        self.is_trace()
    }
    fn warn_enabled(&self) -> bool {
        self.warn_enabled()
    }
    fn error_enabled(&self) -> bool {
        self.error_enabled()
    }
    fn progress_enabled(&self) -> bool {
        self.progress_enabled()
    }
}

impl ProgressEnv for Arc<Cli> {
    fn show_commands(&self) -> bool {
        self.as_ref().show_commands()
    }
    fn is_trace(&self) -> bool {
        self.as_ref().is_trace()
    }
    fn warn_enabled(&self) -> bool {
        self.as_ref().warn_enabled()
    }
    fn error_enabled(&self) -> bool {
        self.as_ref().error_enabled()
    }
    fn progress_enabled(&self) -> bool {
        self.as_ref().progress_enabled()
    }
}

/// Mute environment for library use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentEnv;

impl ProgressEnv for SilentEnv {
    fn show_commands(&self) -> bool {
        false
    }
    fn is_trace(&self) -> bool {
        false
    }
    fn warn_enabled(&self) -> bool {
        false
    }
    fn error_enabled(&self) -> bool {
        false
    }
    fn progress_enabled(&self) -> bool {
        false
    }
}

/// Default breach-lookup endpoint (BreachDirectory via RapidAPI).
pub const DEFAULT_ENDPOINT: &str = "https://breachdirectory.p.rapidapi.com/";

/// RapidAPI product host. Sent verbatim in the host header even when the
/// endpoint URL is overridden; it identifies the API product, not the server.
pub const RAPIDAPI_HOST: &str = "breachdirectory.p.rapidapi.com";

const KEY_HEADER: &str = "X-RapidAPI-Key";
const HOST_HEADER: &str = "X-RapidAPI-Host";

/// Client for the breach-lookup service. Query string and headers follow the
/// BreachDirectory documentation.
pub struct BreachClient {
    client: Client,
    endpoint: String,
}

impl BreachClient {
    /// Build a client for `endpoint` with a per-request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BreachwatchError::HttpClient { source: e })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform one breach lookup for `email` and classify the response.
    ///
    /// Status mapping:
    ///   200 -> Found (parsed JSON body)
    ///   404 -> NoData (logged as a connectivity error)
    ///   500 -> NoData (no records found OR internal server error upstream)
    ///   any other status, transport failure, or undecodable 200 body -> Failed
    ///
    /// Never aborts the run: every problem is folded into the returned outcome
    /// and reported on the console through `env`.
    pub async fn lookup<E: ProgressEnv + ?Sized>(
        &self,
        email: &str,
        api_key: &str,
        env: &E,
    ) -> LookupOutcome {
        if env.show_commands() {
            eprintln!(
                "(cmd) curl -H '{KEY_HEADER}: ***' -H '{HOST_HEADER}: {RAPIDAPI_HOST}' '{}?func=auto&term={email}'",
                self.endpoint
            );
        }
        if env.progress_enabled() {
            println!("Checking breaches for {email}... Please wait.");
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("func", "auto"), ("term", email)])
            .header(KEY_HEADER, api_key)
            .header(HOST_HEADER, RAPIDAPI_HOST)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                if env.error_enabled() {
                    eprintln!("Request for {email} failed: {e}");
                }
                return LookupOutcome::Failed(LookupFailure::Transport {
                    message: e.to_string(),
                });
            }
        };

        match response.status().as_u16() {
            200 => match response.json::<serde_json::Value>().await {
                Ok(body) => {
                    if env.is_trace() {
                        eprintln!("  200 OK for {email}");
                    }
                    LookupOutcome::Found(body)
                }
                Err(e) => {
                    if env.error_enabled() {
                        eprintln!("Could not decode response body for {email}: {e}");
                    }
                    LookupOutcome::Failed(LookupFailure::Decode {
                        message: e.to_string(),
                    })
                }
            },
            404 => {
                if env.error_enabled() {
                    eprintln!("Error 404 when connecting to BreachDirectory!");
                }
                LookupOutcome::NoData(NoDataKind::EndpointMissing)
            }
            500 => {
                if env.error_enabled() {
                    eprintln!("Error 500: Either no records found or Internal Server Error.");
                }
                LookupOutcome::NoData(NoDataKind::NoRecordsOrServerError)
            }
            code => {
                if env.error_enabled() {
                    eprintln!(
                        "There was an error ({code}) connecting to BreachDirectory (e.g. invalid API key or exceeded number of requests)"
                    );
                }
                LookupOutcome::Failed(LookupFailure::Status { code })
            }
        }
    }
}
