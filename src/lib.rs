//! # posprint
//!
//! Client library for a remote POS print server: build receipt and
//! label jobs with fluent command builders, then POST them over HTTP.
//!
//! ## Scope
//!
//! This crate handles WHAT to send:
//! - Receipt command sequences (text, styles, barcodes, QR, images, cuts)
//! - Label jobs (positioned text, barcodes, QR, images, lines, rectangles)
//! - Async image resolution (path/URL/data URL → base64)
//! - Transport to the server's printer and labelprinter endpoints
//!
//! Rendering and hardware access stay on the print server. Each
//! transport call is a single best-effort attempt that resolves to a
//! result record — transport functions never return `Err`.
//!
//! ## Example
//!
//! ```ignore
//! use posprint::{BarcodeOptions, LabelBuilder, LabelClient};
//!
//! let mut label = LabelBuilder::new(4.0, 3.0, 203);
//! label
//!     .rectangle(10, 10, 785, 585, 2)
//!     .text("PRODUCT LABEL", 400, 50, 40)
//!     .barcode(BarcodeOptions::new("12345678901", 200, 270).with_height(100))
//!     .qr_code("https://example.com/p/123", 430, 85);
//! label.set_copies(2);
//!
//! let result = LabelClient::default().print(label).await;
//! assert!(result.success);
//! ```

pub mod client;
pub mod command;
pub mod error;
pub mod image;
pub mod label;
pub mod receipt;
pub mod types;

// Re-exports
pub use client::{
    DEFAULT_LABEL_URL, DEFAULT_RECEIPT_URL, LabelClient, PrintOutcome, PrinterList, ReceiptClient,
    SelectOutcome,
};
pub use command::{IMAGE_PLACEHOLDER, LabelCommand, LabelJob, RawJob, ReceiptCommand, ZplJob};
pub use error::{BuildError, BuildResult, ImageError};
pub use image::image_to_base64;
pub use label::{BarcodeOptions, LabelBuilder, TextOptions};
pub use receipt::ReceiptBuilder;
pub use types::{BarcodeType, CodePage, Orientation, PrintStyleOption};
