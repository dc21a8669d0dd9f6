//! Closed enumerations shared by the command model
//!
//! These mirror the print server's wire vocabulary exactly; the serde
//! rename on each variant is the string the server expects.

use serde::{Deserialize, Serialize};

/// Code page selection for the line printer
///
/// The server maps these onto the printer's character tables; the client
/// only guarantees membership in the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodePage {
    #[serde(rename = "PC437_USA_STANDARD_EUROPE_DEFAULT")]
    Pc437UsaStandardEuropeDefault,
    #[serde(rename = "KATAKANA")]
    Katakana,
    #[serde(rename = "PC850_MULTILINGUAL")]
    Pc850Multilingual,
    #[serde(rename = "PC860_PORTUGUESE")]
    Pc860Portuguese,
    #[serde(rename = "PC863_CANADIAN_FRENCH")]
    Pc863CanadianFrench,
    #[serde(rename = "PC865_NORDIC")]
    Pc865Nordic,
    #[serde(rename = "HIRAGANA")]
    Hiragana,
    #[serde(rename = "ONE_PASS_KANJI")]
    OnePassKanji,
    #[serde(rename = "ONE_PASS_KANJI2")]
    OnePassKanji2,
    #[serde(rename = "PC851_GREEK")]
    Pc851Greek,
    #[serde(rename = "PC853_TURKISH")]
    Pc853Turkish,
    #[serde(rename = "PC857_TURKISH")]
    Pc857Turkish,
    #[serde(rename = "PC737_GREEK")]
    Pc737Greek,
    #[serde(rename = "ISO8859_7_GREEK")]
    Iso8859_7Greek,
    #[serde(rename = "WPC1252")]
    Wpc1252,
    #[serde(rename = "PC866_CYRILLIC2")]
    Pc866Cyrillic2,
    #[serde(rename = "PC852_LATIN2")]
    Pc852Latin2,
    #[serde(rename = "PC858_EURO")]
    Pc858Euro,
    #[serde(rename = "KU42_THAI")]
    Ku42Thai,
    #[serde(rename = "TIS11_THAI")]
    Tis11Thai,
    #[serde(rename = "TIS13_THAI")]
    Tis13Thai,
    #[serde(rename = "TIS14_THAI")]
    Tis14Thai,
    #[serde(rename = "TIS16_THAI")]
    Tis16Thai,
    #[serde(rename = "TIS17_THAI")]
    Tis17Thai,
    #[serde(rename = "TIS18_THAI")]
    Tis18Thai,
    #[serde(rename = "TCVN3_VIETNAMESE_L")]
    Tcvn3VietnameseL,
    #[serde(rename = "TCVN3_VIETNAMESE_U")]
    Tcvn3VietnameseU,
    #[serde(rename = "PC720_ARABIC")]
    Pc720Arabic,
    #[serde(rename = "WPC775_BALTIC_RIM")]
    Wpc775BalticRim,
    #[serde(rename = "PC855_CYRILLIC")]
    Pc855Cyrillic,
    #[serde(rename = "PC861_ICELANDIC")]
    Pc861Icelandic,
    #[serde(rename = "PC862_HEBREW")]
    Pc862Hebrew,
    #[serde(rename = "PC864_ARABIC")]
    Pc864Arabic,
    #[serde(rename = "PC869_GREEK")]
    Pc869Greek,
    #[serde(rename = "ISO8859_2_LATIN2")]
    Iso8859_2Latin2,
    #[serde(rename = "ISO8859_15_LATIN9")]
    Iso8859_15Latin9,
    #[serde(rename = "PC1098_FARSI")]
    Pc1098Farsi,
    #[serde(rename = "PC1118_LITHUANIAN")]
    Pc1118Lithuanian,
    #[serde(rename = "PC1119_LITHUANIAN")]
    Pc1119Lithuanian,
    #[serde(rename = "PC1125_UKRANIAN")]
    Pc1125Ukranian,
    #[serde(rename = "WPC1250_LATIN2")]
    Wpc1250Latin2,
    #[serde(rename = "WPC1251_CYRILLIC")]
    Wpc1251Cyrillic,
    #[serde(rename = "WPC1253_GREEK")]
    Wpc1253Greek,
    #[serde(rename = "WPC1254_TURKISH")]
    Wpc1254Turkish,
    #[serde(rename = "WPC1255_HEBREW")]
    Wpc1255Hebrew,
    #[serde(rename = "WPC1256_ARABIC")]
    Wpc1256Arabic,
    #[serde(rename = "WPC1257_BALTIC_RIM")]
    Wpc1257BalticRim,
    #[serde(rename = "WPC1258_VIETNAMESE")]
    Wpc1258Vietnamese,
    #[serde(rename = "KZ1048_KAZAKHSTAN")]
    Kz1048Kazakhstan,
    #[serde(rename = "DEVANAGARI")]
    Devanagari,
    #[serde(rename = "BENGALI")]
    Bengali,
    #[serde(rename = "TAMIL")]
    Tamil,
    #[serde(rename = "TELUGU")]
    Telugu,
    #[serde(rename = "ASSAMESE")]
    Assamese,
    #[serde(rename = "ORIYA")]
    Oriya,
    #[serde(rename = "KANNADA")]
    Kannada,
    #[serde(rename = "MALAYALAM")]
    Malayalam,
    #[serde(rename = "GUJARATI")]
    Gujarati,
    #[serde(rename = "PUNJABI")]
    Punjabi,
    #[serde(rename = "MARATHI")]
    Marathi,
}

/// Barcode symbology for the line printer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarcodeType {
    #[serde(rename = "UPC_A")]
    UpcA,
    #[serde(rename = "UPC_E")]
    UpcE,
    #[serde(rename = "JAN13_EAN13")]
    Jan13Ean13,
    #[serde(rename = "JAN8_EAN8")]
    Jan8Ean8,
    #[serde(rename = "CODE39")]
    Code39,
    #[serde(rename = "ITF")]
    Itf,
    #[serde(rename = "CODABAR_NW_7")]
    CodabarNw7,
    #[serde(rename = "CODE93")]
    Code93,
    #[serde(rename = "CODE128")]
    Code128,
    #[serde(rename = "GS1_128")]
    Gs1_128,
    #[serde(rename = "GS1_DATABAR_OMNIDIRECTIONAL")]
    Gs1DatabarOmnidirectional,
    #[serde(rename = "GS1_DATABAR_TRUNCATED")]
    Gs1DatabarTruncated,
    #[serde(rename = "GS1_DATABAR_LIMITED")]
    Gs1DatabarLimited,
    #[serde(rename = "GS1_DATABAR_EXPANDED")]
    Gs1DatabarExpanded,
}

/// Printable text style for the line printer
///
/// Several options can be combined; the builder joins them into a single
/// comma-separated descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrintStyleOption {
    None,
    FontB,
    Proportional,
    Condensed,
    Bold,
    DoubleHeight,
    DoubleWidth,
    Italic,
    Underline,
}

impl PrintStyleOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::FontB => "FontB",
            Self::Proportional => "Proportional",
            Self::Condensed => "Condensed",
            Self::Bold => "Bold",
            Self::DoubleHeight => "DoubleHeight",
            Self::DoubleWidth => "DoubleWidth",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
        }
    }
}

/// Element orientation on a label
///
/// N = normal, R = rotated 90° clockwise, I = inverted 180°,
/// B = bottom-up 270°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    N,
    R,
    I,
    B,
}

impl Orientation {
    /// Map legacy rotation degrees to an orientation code
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Self::N),
            90 => Some(Self::R),
            180 => Some(Self::I),
            270 => Some(Self::B),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_page_wire_names() {
        let json = serde_json::to_string(&CodePage::Pc437UsaStandardEuropeDefault).unwrap();
        assert_eq!(json, "\"PC437_USA_STANDARD_EUROPE_DEFAULT\"");
        let json = serde_json::to_string(&CodePage::Iso8859_15Latin9).unwrap();
        assert_eq!(json, "\"ISO8859_15_LATIN9\"");
        let back: CodePage = serde_json::from_str("\"WPC1252\"").unwrap();
        assert_eq!(back, CodePage::Wpc1252);
    }

    #[test]
    fn barcode_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&BarcodeType::CodabarNw7).unwrap(),
            "\"CODABAR_NW_7\""
        );
        assert_eq!(
            serde_json::to_string(&BarcodeType::Gs1_128).unwrap(),
            "\"GS1_128\""
        );
    }

    #[test]
    fn unknown_code_page_is_rejected() {
        assert!(serde_json::from_str::<CodePage>("\"PC000_BOGUS\"").is_err());
    }

    #[test]
    fn orientation_from_degrees() {
        assert_eq!(Orientation::from_degrees(0), Some(Orientation::N));
        assert_eq!(Orientation::from_degrees(90), Some(Orientation::R));
        assert_eq!(Orientation::from_degrees(180), Some(Orientation::I));
        assert_eq!(Orientation::from_degrees(270), Some(Orientation::B));
        assert_eq!(Orientation::from_degrees(45), None);
    }
}
