//! Receipt command builder
//!
//! Accumulates line-printer commands in call order. Image sources are
//! resolved concurrently: `image()` pushes a placeholder at the call
//! index and spawns the resolution task immediately; `build()` is the
//! single rendezvous point that awaits every task and overwrites the
//! placeholder slots.

use futures::future;
use tokio::task::JoinHandle;

use crate::command::{IMAGE_PLACEHOLDER, ReceiptCommand};
use crate::error::{BuildError, BuildResult, ImageError};
use crate::image::image_to_base64;
use crate::types::{BarcodeType, CodePage, PrintStyleOption};

/// Fluent builder for a receipt job
///
/// Mutating methods return `&mut Self` for chaining; `build()` consumes
/// the builder, so a failed build cannot leave a half-replaced sequence
/// in circulation.
#[derive(Debug, Default)]
pub struct ReceiptBuilder {
    commands: Vec<ReceiptCommand>,
    pending: Vec<(usize, JoinHandle<Result<String, ImageError>>)>,
}

impl ReceiptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a printer-initialize command
    pub fn initialize(&mut self) -> &mut Self {
        self.commands.push(ReceiptCommand::Initialize);
        self
    }

    /// Append a text line
    pub fn text(&mut self, value: impl Into<String>) -> &mut Self {
        self.commands.push(ReceiptCommand::PrintLine {
            value: value.into(),
        });
        self
    }

    /// Append a paper feed; `lines` must be in [1, 10]
    pub fn feed(&mut self, lines: u8) -> BuildResult<&mut Self> {
        if !(1..=10).contains(&lines) {
            return Err(BuildError::Validation(format!(
                "feed lines must be in [1, 10], got {lines}"
            )));
        }
        self.commands.push(ReceiptCommand::FeedLines {
            value: lines.to_string(),
        });
        Ok(self)
    }

    /// Append a code page selection
    pub fn code_page(&mut self, code: CodePage) -> &mut Self {
        self.commands.push(ReceiptCommand::CodePage { value: code });
        self
    }

    /// Append a style change; options are joined into one descriptor
    pub fn style(&mut self, styles: &[PrintStyleOption]) -> &mut Self {
        let value = styles
            .iter()
            .map(PrintStyleOption::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        self.commands.push(ReceiptCommand::SetStyles { value });
        self
    }

    pub fn left(&mut self) -> &mut Self {
        self.commands.push(ReceiptCommand::LeftAlign);
        self
    }

    pub fn center(&mut self) -> &mut Self {
        self.commands.push(ReceiptCommand::CenterAlign);
        self
    }

    pub fn right(&mut self) -> &mut Self {
        self.commands.push(ReceiptCommand::RightAlign);
        self
    }

    /// Append a QR code
    pub fn qr_code(&mut self, value: impl Into<String>) -> &mut Self {
        self.commands.push(ReceiptCommand::PrintQRCode {
            value: value.into(),
        });
        self
    }

    /// Append a barcode
    pub fn barcode(&mut self, value: impl Into<String>, kind: BarcodeType) -> &mut Self {
        self.commands.push(ReceiptCommand::PrintBarcode {
            value: value.into(),
            kind,
        });
        self
    }

    /// Append a buffer-clear command
    pub fn clear(&mut self) -> &mut Self {
        self.commands.push(ReceiptCommand::Clear);
        self
    }

    /// Append a full paper cut
    pub fn full_cut(&mut self) -> &mut Self {
        self.commands.push(ReceiptCommand::FullCut);
        self
    }

    /// Append an image by path or URL
    ///
    /// A placeholder holds the call-order position; resolution starts
    /// immediately and is awaited at `build()`. A resolution failure
    /// fails the whole build, not this call.
    ///
    /// Must be called from within a tokio runtime: the resolution task
    /// is spawned at call time, not at `build()`.
    pub fn image(&mut self, source: &str, width: Option<u32>) -> &mut Self {
        let index = self.commands.len();
        self.commands.push(ReceiptCommand::PrintImage {
            value: IMAGE_PLACEHOLDER.to_string(),
            width,
        });

        let source = source.to_string();
        let handle = tokio::spawn(async move { image_to_base64(&source).await });
        self.pending.push((index, handle));
        self
    }

    /// Number of commands accumulated so far
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Await all pending image resolutions and return the finished sequence
    ///
    /// Tasks are awaited as a group; the first failure aborts the build.
    /// Completion order is irrelevant because every task owns a fixed
    /// slot in the sequence.
    pub async fn build(self) -> BuildResult<Vec<ReceiptCommand>> {
        let Self { mut commands, pending } = self;

        let (indices, handles): (Vec<_>, Vec<_>) = pending.into_iter().unzip();
        let results = future::join_all(handles).await;

        for (index, joined) in indices.into_iter().zip(results) {
            let payload = joined??;
            if let ReceiptCommand::PrintImage { value, .. } = &mut commands[index] {
                *value = payload;
            }
        }

        Ok(commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn commands_keep_call_order() {
        let mut builder = ReceiptBuilder::new();
        builder
            .initialize()
            .center()
            .style(&[PrintStyleOption::Bold, PrintStyleOption::DoubleHeight])
            .text("STORE 42")
            .left()
            .barcode("12345678", BarcodeType::Code128)
            .full_cut();

        let commands = builder.build().await.unwrap();
        assert_eq!(commands.len(), 7);
        assert_eq!(commands[0], ReceiptCommand::Initialize);
        assert_eq!(
            commands[2],
            ReceiptCommand::SetStyles {
                value: "Bold, DoubleHeight".into()
            }
        );
        assert_eq!(commands[6], ReceiptCommand::FullCut);
    }

    #[tokio::test]
    async fn feed_rejects_out_of_range() {
        let mut builder = ReceiptBuilder::new();
        assert!(builder.feed(0).is_err());
        assert!(builder.feed(11).is_err());
        assert!(builder.is_empty());

        builder.feed(10).unwrap();
        let commands = builder.build().await.unwrap();
        assert_eq!(
            commands,
            vec![ReceiptCommand::FeedLines { value: "10".into() }]
        );
    }

    #[tokio::test]
    async fn single_style_has_no_separator() {
        let mut builder = ReceiptBuilder::new();
        builder.style(&[PrintStyleOption::Underline]);
        let commands = builder.build().await.unwrap();
        assert_eq!(
            commands[0],
            ReceiptCommand::SetStyles {
                value: "Underline".into()
            }
        );
    }

    #[tokio::test]
    async fn failed_image_fails_the_build() {
        let mut builder = ReceiptBuilder::new();
        builder
            .text("before")
            .image("/nonexistent/logo.png", Some(200))
            .text("after");

        assert!(matches!(
            builder.build().await,
            Err(BuildError::Image(_))
        ));
    }
}
