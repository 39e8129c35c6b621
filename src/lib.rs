pub mod data_uri;
pub mod logger;

use std::fmt;
use std::io::Write;

use anyhow::Result;
use base64::{Engine as _, engine::general_purpose};

pub use data_uri::DataUri;

/// The payload the `debug-uri` binary reports on.
pub const SVG_MARKUP: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="500" height="500"><text x="0" y="15" fill="black">Hi! Your browser decoded this</text></svg>"#;

const SVG_LABEL: &str = "SVG:";
const ENCODED_LABEL: &str = "Base64 Encoded:";
const URI_LABEL: &str = "Expected URI:";

/// Standard alphabet, `=` padded.
pub fn encode_base64<T>(input: T) -> String
where
    T: AsRef<[u8]>,
{
    general_purpose::STANDARD.encode(input)
}

/// Length of the padded base64 form of `len` input bytes.
pub fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// The three labelled lines printed for a markup payload.
pub struct Report<'a> {
    markup: &'a str,
    uri: DataUri<'static>,
}

impl<'a> Report<'a> {
    pub fn new(markup: &'a str) -> Self {
        let uri = DataUri::svg(markup);
        log::debug!(
            "Encoded {} payload bytes into {} base64 chars.",
            markup.len(),
            uri.encoded().len()
        );
        Report { markup, uri }
    }

    pub fn markup(&self) -> &str {
        self.markup
    }

    pub fn encoded(&self) -> &str {
        self.uri.encoded()
    }

    pub fn uri(&self) -> &DataUri<'static> {
        &self.uri
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SVG_LABEL} {}", self.markup)?;
        writeln!(f, "{ENCODED_LABEL} {}", self.uri.encoded())?;
        writeln!(f, "{URI_LABEL} {}", self.uri)
    }
}
