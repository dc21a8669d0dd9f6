//! Command and job models
//!
//! Everything here serializes to the print server's JSON wire format.
//! Commands are internally tagged on `cmd`; order within a job is the
//! drawing/printing order on the device and must not be disturbed.

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, BuildResult};
use crate::types::{BarcodeType, CodePage, Orientation};

/// Sentinel payload for an image command whose resolution is in flight
pub const IMAGE_PLACEHOLDER: &str = "PLACEHOLDER";

/// One atomic instruction for the line (receipt) printer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd")]
pub enum ReceiptCommand {
    Initialize,
    PrintLine {
        value: String,
    },
    /// Feed count is carried as a string on the wire (server contract)
    FeedLines {
        value: String,
    },
    CodePage {
        value: CodePage,
    },
    SetStyles {
        value: String,
    },
    PrintQRCode {
        value: String,
    },
    PrintBarcode {
        value: String,
        #[serde(rename = "type")]
        kind: BarcodeType,
    },
    LeftAlign,
    CenterAlign,
    RightAlign,
    Clear,
    FullCut,
    PrintImage {
        value: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
    },
}

/// One positioned element on a label
///
/// Line and rectangle thickness travels under the `fontSize` wire key.
/// The server reuses that field for shape thickness; the model keeps an
/// explicit name on the Rust side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "lowercase")]
pub enum LabelCommand {
    Text {
        value: String,
        x: u32,
        y: u32,
        #[serde(rename = "fontSize")]
        font_size: u32,
        #[serde(default)]
        orientation: Orientation,
        #[serde(skip_serializing_if = "Option::is_none")]
        width: Option<u32>,
    },
    Barcode {
        value: String,
        x: u32,
        y: u32,
        height: u32,
        #[serde(rename = "type")]
        kind: String,
        width: u32,
        #[serde(default)]
        orientation: Orientation,
        #[serde(rename = "printText")]
        print_text: bool,
        #[serde(rename = "textAbove")]
        text_above: bool,
        #[serde(rename = "checkDigit")]
        check_digit: bool,
        mode: String,
    },
    Qrcode {
        value: String,
        x: u32,
        y: u32,
        width: u32,
    },
    Image {
        value: String,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    Line {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        #[serde(rename = "fontSize")]
        thickness: u32,
    },
    Rectangle {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        #[serde(rename = "fontSize")]
        thickness: u32,
    },
}

fn default_width() -> f64 {
    4.0
}

fn default_height() -> f64 {
    6.0
}

fn default_dpi() -> u32 {
    203
}

fn default_copies() -> u32 {
    1
}

/// A complete, validated label print request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printer_name: Option<String>,
    /// Physical width in inches
    #[serde(default = "default_width")]
    pub width: f64,
    /// Physical height in inches
    #[serde(default = "default_height")]
    pub height: f64,
    /// Print resolution in dots per inch
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    #[serde(default = "default_copies")]
    pub copies: u32,
    pub commands: Vec<LabelCommand>,
}

impl LabelJob {
    /// Check the job-level constraints before handing it to transport
    pub fn validate(&self) -> BuildResult<()> {
        if self.width <= 0.0 {
            return Err(BuildError::Validation(format!(
                "label width must be positive, got {}",
                self.width
            )));
        }
        if self.height <= 0.0 {
            return Err(BuildError::Validation(format!(
                "label height must be positive, got {}",
                self.height
            )));
        }
        if self.dpi == 0 {
            return Err(BuildError::Validation("label dpi must be positive".into()));
        }
        if self.copies == 0 {
            return Err(BuildError::Validation("copies must be at least 1".into()));
        }
        Ok(())
    }
}

/// Raw markup print request, bypassing the command builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZplJob {
    pub zpl: String,
    #[serde(rename = "printerName", skip_serializing_if = "Option::is_none")]
    pub printer_name: Option<String>,
    pub copies: u32,
}

impl ZplJob {
    pub fn new(zpl: impl Into<String>, printer_name: Option<&str>, copies: i32) -> Self {
        Self {
            zpl: zpl.into(),
            printer_name: printer_name.map(str::to_string),
            copies: copies.max(1) as u32,
        }
    }
}

/// Raw binary print request (payload is base64 encoded)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawJob {
    pub data: String,
    #[serde(rename = "printerName", skip_serializing_if = "Option::is_none")]
    pub printer_name: Option<String>,
    pub copies: u32,
}

impl RawJob {
    pub fn new(data: impl Into<String>, printer_name: Option<&str>, copies: i32) -> Self {
        Self {
            data: data.into(),
            printer_name: printer_name.map(str::to_string),
            copies: copies.max(1) as u32,
        }
    }
}
