//! HTTP transport for the print server
//!
//! Every public method is a single request/response exchange: no
//! retries, no backoff. Transport failures never surface as `Err` —
//! each call resolves to a plain result record with a `success` flag,
//! so remote operations can be handled uniformly.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::command::{LabelJob, RawJob, ReceiptCommand, ZplJob};
use crate::label::LabelBuilder;
use crate::receipt::ReceiptBuilder;

/// Default base URL for receipt (line printer) operations
pub const DEFAULT_RECEIPT_URL: &str = "http://localhost:8080";

/// Default base URL for label printer operations
pub const DEFAULT_LABEL_URL: &str = "http://localhost:5003";

/// Response envelope shared by all server endpoints
#[derive(Debug, Deserialize)]
struct ServerResponse {
    /// Missing on some success bodies; a 2xx without an explicit flag
    /// counts as success
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

fn default_success() -> bool {
    true
}

/// Outcome of a print request
#[derive(Debug, Clone, PartialEq)]
pub struct PrintOutcome {
    pub success: bool,
    pub message: String,
}

impl PrintOutcome {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Outcome of a printer discovery request
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterList {
    pub success: bool,
    pub printers: Vec<String>,
}

/// Outcome of a printer selection request
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOutcome {
    pub success: bool,
    pub message: String,
    pub printer: Option<String>,
}

/// Shared request plumbing for both clients
#[derive(Debug, Clone)]
struct Transport {
    client: Client,
    base_url: String,
}

impl Transport {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// POST a JSON body; `Err` carries the failure message for the
    /// caller's result record
    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ServerResponse, String> {
        let request = self.client.post(self.url(path)).json(body);
        Self::exchange(request).await
    }

    async fn get(&self, path: &str) -> Result<ServerResponse, String> {
        let request = self.client.get(self.url(path));
        Self::exchange(request).await
    }

    async fn exchange(request: reqwest::RequestBuilder) -> Result<ServerResponse, String> {
        let response = request
            .send()
            .await
            .map_err(|e| format!("Error: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "print server rejected request");
            return Err(format!("Error: {} - {}", status.as_u16(), body));
        }

        let parsed = response
            .json::<ServerResponse>()
            .await
            .map_err(|e| format!("Error: {e}"))?;
        debug!(success = parsed.success, "print server responded");
        Ok(parsed)
    }
}

fn data_as_strings(data: Option<serde_json::Value>) -> Vec<String> {
    data.and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

fn data_as_string(data: Option<serde_json::Value>) -> Option<String> {
    data.and_then(|value| serde_json::from_value(value).ok())
}

/// Client for the receipt (line printer) endpoints
#[derive(Debug, Clone)]
pub struct ReceiptClient {
    transport: Transport,
}

impl Default for ReceiptClient {
    fn default() -> Self {
        Self::new(DEFAULT_RECEIPT_URL)
    }
}

impl ReceiptClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            transport: Transport::new(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.transport.base_url
    }

    /// Build the receipt and send it in one call
    ///
    /// Build failures (validation, image resolution) are converted to a
    /// failure outcome at this boundary, like any transport failure.
    #[instrument(skip_all, fields(base_url = %self.transport.base_url))]
    pub async fn print(&self, builder: ReceiptBuilder) -> PrintOutcome {
        match builder.build().await {
            Ok(commands) => self.print_commands(&commands).await,
            Err(e) => PrintOutcome::failure(format!("Error: {e}")),
        }
    }

    /// Send an already-built command sequence
    #[instrument(skip_all, fields(commands = commands.len()))]
    pub async fn print_commands(&self, commands: &[ReceiptCommand]) -> PrintOutcome {
        match self.transport.post("/api/printer/print", &commands).await {
            Ok(response) => PrintOutcome {
                success: response.success,
                message: response
                    .message
                    .unwrap_or_else(|| "Print job sent successfully".to_string()),
            },
            Err(message) => PrintOutcome::failure(message),
        }
    }

    /// List available receipt printers
    #[instrument(skip(self))]
    pub async fn printers(&self) -> PrinterList {
        match self.transport.get("/api/printer/list").await {
            Ok(response) => PrinterList {
                success: response.success,
                printers: data_as_strings(response.data),
            },
            Err(_) => PrinterList {
                success: false,
                printers: Vec::new(),
            },
        }
    }

    /// Select the receipt printer the server should print to
    #[instrument(skip(self))]
    pub async fn select_printer(&self, printer_name: &str) -> SelectOutcome {
        let body = serde_json::json!({ "printerName": printer_name });
        match self.transport.post("/api/printer/select", &body).await {
            Ok(response) => SelectOutcome {
                success: response.success,
                message: response.message.unwrap_or_default(),
                printer: data_as_string(response.data),
            },
            Err(message) => SelectOutcome {
                success: false,
                message,
                printer: None,
            },
        }
    }

    /// Get the currently selected receipt printer
    #[instrument(skip(self))]
    pub async fn selected_printer(&self) -> SelectOutcome {
        match self.transport.get("/api/printer/selected").await {
            Ok(response) => SelectOutcome {
                success: response.success,
                message: response.message.unwrap_or_default(),
                printer: data_as_string(response.data),
            },
            Err(message) => SelectOutcome {
                success: false,
                message,
                printer: None,
            },
        }
    }
}

/// Client for the label printer endpoints
#[derive(Debug, Clone)]
pub struct LabelClient {
    transport: Transport,
}

impl Default for LabelClient {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_URL)
    }
}

impl LabelClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            transport: Transport::new(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.transport.base_url
    }

    /// Build the label and send it in one call
    #[instrument(skip_all, fields(base_url = %self.transport.base_url))]
    pub async fn print(&self, builder: LabelBuilder) -> PrintOutcome {
        match builder.build().await {
            Ok(job) => self.print_job(&job).await,
            Err(e) => PrintOutcome::failure(format!("Error: {e}")),
        }
    }

    /// Send an already-built label job
    #[instrument(skip_all, fields(commands = job.commands.len(), copies = job.copies))]
    pub async fn print_job(&self, job: &LabelJob) -> PrintOutcome {
        match self
            .transport
            .post("/api/labelprinter/print/label", job)
            .await
        {
            Ok(response) => PrintOutcome {
                success: response.success,
                message: response
                    .message
                    .unwrap_or_else(|| "Label job sent successfully".to_string()),
            },
            Err(message) => PrintOutcome::failure(message),
        }
    }

    /// Send pre-formed ZPL markup directly
    #[instrument(skip(self, zpl))]
    pub async fn print_zpl(&self, zpl: &str, printer_name: Option<&str>, copies: i32) -> PrintOutcome {
        let job = ZplJob::new(zpl, printer_name, copies);
        match self.transport.post("/api/labelprinter/print/zpl", &job).await {
            Ok(response) => PrintOutcome {
                success: response.success,
                message: response
                    .message
                    .unwrap_or_else(|| "ZPL sent successfully".to_string()),
            },
            Err(message) => PrintOutcome::failure(message),
        }
    }

    /// Send a raw base64 binary payload directly
    #[instrument(skip(self, data))]
    pub async fn print_raw(&self, data: &str, printer_name: Option<&str>, copies: i32) -> PrintOutcome {
        let job = RawJob::new(data, printer_name, copies);
        match self.transport.post("/api/labelprinter/print/raw", &job).await {
            Ok(response) => PrintOutcome {
                success: response.success,
                message: response
                    .message
                    .unwrap_or_else(|| "Raw data sent successfully".to_string()),
            },
            Err(message) => PrintOutcome::failure(message),
        }
    }

    /// List available label printers
    #[instrument(skip(self))]
    pub async fn printers(&self) -> PrinterList {
        match self.transport.get("/api/labelprinter/list").await {
            Ok(response) => PrinterList {
                success: response.success,
                printers: data_as_strings(response.data),
            },
            Err(_) => PrinterList {
                success: false,
                printers: Vec::new(),
            },
        }
    }

    /// Select the label printer the server should print to
    #[instrument(skip(self))]
    pub async fn select_printer(&self, printer_name: &str) -> SelectOutcome {
        let body = serde_json::json!({ "printerName": printer_name });
        match self.transport.post("/api/labelprinter/select", &body).await {
            Ok(response) => SelectOutcome {
                success: response.success,
                message: response.message.unwrap_or_default(),
                printer: data_as_string(response.data),
            },
            Err(message) => SelectOutcome {
                success: false,
                message,
                printer: None,
            },
        }
    }

    /// Get the currently selected label printer
    #[instrument(skip(self))]
    pub async fn selected_printer(&self) -> SelectOutcome {
        match self.transport.get("/api/labelprinter/selected").await {
            Ok(response) => SelectOutcome {
                success: response.success,
                message: response.message.unwrap_or_default(),
                printer: data_as_string(response.data),
            },
            Err(message) => SelectOutcome {
                success: false,
                message,
                printer: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_urls() {
        assert_eq!(ReceiptClient::default().base_url(), "http://localhost:8080");
        assert_eq!(LabelClient::default().base_url(), "http://localhost:5003");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ReceiptClient::new("http://localhost:8080/");
        assert_eq!(
            client.transport.url("/api/printer/print"),
            "http://localhost:8080/api/printer/print"
        );
    }

    #[test]
    fn envelope_defaults_success_on_missing_flag() {
        let parsed: ServerResponse = serde_json::from_str("{\"message\":\"ok\"}").unwrap();
        assert!(parsed.success);

        let parsed: ServerResponse =
            serde_json::from_str("{\"success\":false,\"message\":\"busy\"}").unwrap();
        assert!(!parsed.success);
    }
}
