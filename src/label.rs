//! Label command builder
//!
//! Same accumulation pattern as the receipt builder, specialized to
//! positioned elements and physical label metadata. `build()` resolves
//! pending images, drops duplicate barcodes, and validates the job.

use std::collections::HashSet;

use futures::future;
use tokio::task::JoinHandle;

use crate::command::{IMAGE_PLACEHOLDER, LabelCommand, LabelJob};
use crate::error::{BuildError, BuildResult, ImageError};
use crate::image::image_to_base64;
use crate::types::Orientation;

/// Options for a label text element
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    pub value: String,
    pub x: u32,
    pub y: u32,
    pub font_size: u32,
    pub orientation: Orientation,
    /// Explicit font width in dots; the printer derives it from
    /// `font_size` when absent
    pub font_width: Option<u32>,
}

impl TextOptions {
    pub fn new(value: impl Into<String>, x: u32, y: u32) -> Self {
        Self {
            value: value.into(),
            x,
            y,
            font_size: 20,
            orientation: Orientation::N,
            font_width: None,
        }
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Legacy rotation in degrees; only 0/90/180/270 are accepted
    pub fn with_rotation(mut self, degrees: u32) -> BuildResult<Self> {
        self.orientation = Orientation::from_degrees(degrees).ok_or_else(|| {
            BuildError::Validation(format!(
                "rotation must be one of 0/90/180/270, got {degrees}"
            ))
        })?;
        Ok(self)
    }

    pub fn with_font_width(mut self, width: u32) -> Self {
        self.font_width = Some(width);
        self
    }
}

/// Options for a label barcode element
///
/// Defaults match the server's schema defaults: height 50, type "128",
/// width 2, orientation N, printText on, textAbove off, checkDigit off,
/// mode "A".
#[derive(Debug, Clone, PartialEq)]
pub struct BarcodeOptions {
    pub value: String,
    pub x: u32,
    pub y: u32,
    pub height: u32,
    pub kind: String,
    pub width: u32,
    pub orientation: Orientation,
    pub print_text: bool,
    pub text_above: bool,
    pub check_digit: bool,
    pub mode: String,
}

impl BarcodeOptions {
    pub fn new(value: impl Into<String>, x: u32, y: u32) -> Self {
        Self {
            value: value.into(),
            x,
            y,
            height: 50,
            kind: "128".to_string(),
            width: 2,
            orientation: Orientation::N,
            print_text: true,
            text_above: false,
            check_digit: false,
            mode: "A".to_string(),
        }
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_print_text(mut self, print_text: bool) -> Self {
        self.print_text = print_text;
        self
    }

    pub fn with_text_above(mut self, text_above: bool) -> Self {
        self.text_above = text_above;
        self
    }

    pub fn with_check_digit(mut self, check_digit: bool) -> Self {
        self.check_digit = check_digit;
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }
}

/// Fluent builder for a label job
///
/// Physical dimensions and resolution are fixed at construction and
/// apply to the whole job.
#[derive(Debug)]
pub struct LabelBuilder {
    printer_name: Option<String>,
    width: f64,
    height: f64,
    dpi: u32,
    copies: u32,
    commands: Vec<LabelCommand>,
    pending: Vec<(usize, JoinHandle<Result<String, ImageError>>)>,
}

impl Default for LabelBuilder {
    /// 4" x 6" at 203 dpi, one copy
    fn default() -> Self {
        Self::new(4.0, 6.0, 203)
    }
}

impl LabelBuilder {
    /// Create a builder for a label of `width` x `height` inches at `dpi`
    pub fn new(width: f64, height: f64, dpi: u32) -> Self {
        Self {
            printer_name: None,
            width,
            height,
            dpi,
            copies: 1,
            commands: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Set the target printer at construction time
    pub fn with_printer(mut self, name: impl Into<String>) -> Self {
        self.printer_name = Some(name.into());
        self
    }

    /// Override the target printer
    pub fn set_printer(&mut self, name: impl Into<String>) -> &mut Self {
        self.printer_name = Some(name.into());
        self
    }

    /// Set the copy count, clamped to a minimum of 1
    pub fn set_copies(&mut self, copies: i32) -> &mut Self {
        self.copies = copies.max(1) as u32;
        self
    }

    /// Add a text element with default orientation
    pub fn text(&mut self, value: impl Into<String>, x: u32, y: u32, font_size: u32) -> &mut Self {
        self.text_with(TextOptions::new(value, x, y).with_font_size(font_size))
    }

    /// Add a text element from full options
    pub fn text_with(&mut self, opts: TextOptions) -> &mut Self {
        self.commands.push(LabelCommand::Text {
            value: opts.value,
            x: opts.x,
            y: opts.y,
            font_size: opts.font_size,
            orientation: opts.orientation,
            width: opts.font_width,
        });
        self
    }

    /// Add a barcode element
    pub fn barcode(&mut self, opts: BarcodeOptions) -> &mut Self {
        self.commands.push(LabelCommand::Barcode {
            value: opts.value,
            x: opts.x,
            y: opts.y,
            height: opts.height,
            kind: opts.kind,
            width: opts.width,
            orientation: opts.orientation,
            print_text: opts.print_text,
            text_above: opts.text_above,
            check_digit: opts.check_digit,
            mode: opts.mode,
        });
        self
    }

    /// Add a barcode from the positional call form
    ///
    /// Normalizes into the same stored command as `barcode`, so both
    /// call styles produce identical output for identical input.
    #[allow(clippy::too_many_arguments)]
    pub fn barcode_legacy(
        &mut self,
        value: &str,
        x: u32,
        y: u32,
        height: u32,
        kind: &str,
        width: u32,
        orientation: Orientation,
        print_text: bool,
    ) -> &mut Self {
        self.barcode(
            BarcodeOptions::new(value, x, y)
                .with_height(height)
                .with_kind(kind)
                .with_width(width)
                .with_orientation(orientation)
                .with_print_text(print_text),
        )
    }

    /// Add a QR code with the default module size of 5
    pub fn qr_code(&mut self, value: impl Into<String>, x: u32, y: u32) -> &mut Self {
        self.qr_code_sized(value, x, y, 5)
    }

    /// Add a QR code; `size` is stored as the element width
    pub fn qr_code_sized(&mut self, value: impl Into<String>, x: u32, y: u32, size: u32) -> &mut Self {
        self.commands.push(LabelCommand::Qrcode {
            value: value.into(),
            x,
            y,
            width: size,
        });
        self
    }

    /// Add an image by path or URL; resolution is awaited at `build()`
    ///
    /// Must be called from within a tokio runtime: the resolution task
    /// is spawned at call time, not at `build()`.
    pub fn image(&mut self, source: &str, x: u32, y: u32, width: u32, height: u32) -> &mut Self {
        let index = self.commands.len();
        self.commands.push(LabelCommand::Image {
            value: IMAGE_PLACEHOLDER.to_string(),
            x,
            y,
            width,
            height,
        });

        let source = source.to_string();
        let handle = tokio::spawn(async move { image_to_base64(&source).await });
        self.pending.push((index, handle));
        self
    }

    /// Add an image whose payload is already base64 encoded
    pub fn image_base64(
        &mut self,
        data: impl Into<String>,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> &mut Self {
        self.commands.push(LabelCommand::Image {
            value: data.into(),
            x,
            y,
            width,
            height,
        });
        self
    }

    /// Add a line from (x1, y1) to (x2, y2)
    pub fn line(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, thickness: u32) -> &mut Self {
        self.commands.push(LabelCommand::Line {
            x: x1,
            y: y1,
            width: x2,
            height: y2,
            thickness,
        });
        self
    }

    /// Add a rectangle outline
    pub fn rectangle(&mut self, x: u32, y: u32, width: u32, height: u32, thickness: u32) -> &mut Self {
        self.commands.push(LabelCommand::Rectangle {
            x,
            y,
            width,
            height,
            thickness,
        });
        self
    }

    /// Number of commands accumulated so far
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Resolve images, drop duplicate barcodes, validate, and return the job
    pub async fn build(self) -> BuildResult<LabelJob> {
        let Self {
            printer_name,
            width,
            height,
            dpi,
            copies,
            mut commands,
            pending,
        } = self;

        let (indices, handles): (Vec<_>, Vec<_>) = pending.into_iter().unzip();
        let results = future::join_all(handles).await;

        for (index, joined) in indices.into_iter().zip(results) {
            let payload = joined??;
            if let LabelCommand::Image { value, .. } = &mut commands[index] {
                *value = payload;
            }
        }

        let job = LabelJob {
            printer_name,
            width,
            height,
            dpi,
            copies,
            commands: dedup_barcodes(commands),
        };
        job.validate()?;
        Ok(job)
    }
}

/// Drop barcodes that repeat an already-seen (value, x, y)
///
/// Stable first-seen-wins filter: a repeated barcode at the same spot
/// would print twice on the physical label. The key deliberately ignores
/// type/width/orientation. Non-barcode commands pass through untouched.
fn dedup_barcodes(commands: Vec<LabelCommand>) -> Vec<LabelCommand> {
    let mut seen: HashSet<(String, u32, u32)> = HashSet::new();
    commands
        .into_iter()
        .filter(|command| match command {
            LabelCommand::Barcode { value, x, y, .. } => seen.insert((value.clone(), *x, *y)),
            _ => true,
        })
        .collect()
}
