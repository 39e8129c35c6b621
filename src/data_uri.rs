use std::borrow::Cow;
use std::fmt;

use anyhow::{Result, anyhow};
use base64::{Engine as _, engine::general_purpose};

use crate::encode_base64;

pub const SCHEME: &str = "data:";
pub const BASE64_MARKER: &str = ";base64,";
pub const SVG_MIME: &str = "image/svg+xml";

/// A `data:<mime>;base64,<payload>` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri<'a> {
    mime: Cow<'a, str>,
    encoded: String,
}

impl<'a> DataUri<'a> {
    pub fn new<T>(mime: Cow<'a, str>, payload: T) -> Self
    where
        T: AsRef<[u8]>,
    {
        DataUri {
            mime,
            encoded: encode_base64(payload),
        }
    }

    pub fn svg(markup: &str) -> DataUri<'static> {
        DataUri::new(Cow::Borrowed(SVG_MIME), markup)
    }

    /// Parse `data:<mime>;base64,<payload>`. The payload must be padded
    /// standard base64.
    pub fn parse(uri: &'a str) -> Result<Self> {
        let rest = uri
            .strip_prefix(SCHEME)
            .ok_or_else(|| anyhow!("missing '{SCHEME}' scheme"))?;
        let (mime, encoded) = rest
            .split_once(BASE64_MARKER)
            .ok_or_else(|| anyhow!("missing '{BASE64_MARKER}' marker"))?;
        if mime.is_empty() {
            return Err(anyhow!("empty media type"));
        }

        // Validation only; the payload is kept encoded and decoded on demand.
        general_purpose::STANDARD.decode(encoded)?;

        Ok(DataUri {
            mime: Cow::Borrowed(mime),
            encoded: encoded.to_string(),
        })
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(general_purpose::STANDARD.decode(&self.encoded)?)
    }
}

impl fmt::Display for DataUri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}{}{BASE64_MARKER}{}", self.mime, self.encoded)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::DataUri;

    #[test]
    fn test_svg_uri_format() {
        let uri = DataUri::svg("<svg/>");
        assert_eq!(uri.mime(), "image/svg+xml");
        assert_eq!(uri.encoded(), "PHN2Zy8+");
        assert_eq!(uri.to_string(), "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn test_empty_payload() {
        let uri = DataUri::svg("");
        assert_eq!(uri.to_string(), "data:image/svg+xml;base64,");
        assert_eq!(uri.decode().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_rendered_uri() {
        let rendered = DataUri::new(Cow::Borrowed("text/plain"), "ab").to_string();
        assert_eq!(rendered, "data:text/plain;base64,YWI=");

        let parsed = DataUri::parse(&rendered).unwrap();
        assert_eq!(parsed.mime(), "text/plain");
        assert_eq!(parsed.encoded(), "YWI=");
        assert_eq!(parsed.decode().unwrap(), b"ab");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let invalid_inputs = [
            "image/svg+xml;base64,PHN2Zy8+",
            "data:image/svg+xml,PHN2Zy8+",
            "data:;base64,PHN2Zy8+",
            "data:image/svg+xml;base64,PHN2Zy8",
            "data:image/svg+xml;base64,PHN2$y8+",
        ];

        for &input in &invalid_inputs {
            assert!(
                DataUri::parse(input).is_err(),
                "Invalid input '{input}' should error"
            );
        }
    }

    #[test]
    fn test_multibyte_utf8_payload() {
        let uri = DataUri::svg("é");
        assert_eq!(uri.encoded(), "w6k=");
        assert_eq!(String::from_utf8(uri.decode().unwrap()).unwrap(), "é");
    }
}
