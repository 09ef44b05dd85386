//! C source and header emission for packed frames.
//!
//! The `.c` file defines the frame as a flat `const unsigned char` array and
//! the `.h` file declares it `extern`, ready to be compiled into firmware.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use epd_dither::PackedBuffer;

use crate::error::AppError;
use crate::models::DisplaySpec;

/// Default suffix appended to the file stem to form the array name.
pub const DEFAULT_SYMBOL_SUFFIX: &str = "Image7colour";

/// Hex literals per line in the array body.
const BYTES_PER_LINE: usize = 16;

/// Replace anything that is not a valid C identifier character with `_`
/// and prefix a leading digit.
fn sanitize_identifier(stem: &str) -> String {
    let mut ident: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Array name for a file stem: `<stem><suffix>`.
///
/// ```
/// use epd_convert::rendering::c_source::symbol_name;
///
/// assert_eq!(symbol_name("sunset", "Image7colour"), "sunsetImage7colour");
/// assert_eq!(symbol_name("my photo-2", "Image7colour"), "my_photo_2Image7colour");
/// ```
pub fn symbol_name(stem: &str, suffix: &str) -> String {
    format!("{}{}", sanitize_identifier(stem), suffix)
}

/// Include guard for a file stem: `_<STEM>_H_`.
pub fn guard_name(stem: &str) -> String {
    format!("_{}_H_", sanitize_identifier(stem).to_uppercase())
}

/// Render the `.c` file defining `symbol` with `declared_len` bytes.
pub fn render_source(header_file: &str, symbol: &str, declared_len: usize, bytes: &[u8]) -> String {
    // "0x00," is five characters; one newline per line
    let mut out = String::with_capacity(bytes.len() * 5 + bytes.len() / BYTES_PER_LINE + 128);

    let _ = write!(
        out,
        "#include \"{header_file}\"\n\nconst unsigned char {symbol}[{declared_len}] = {{"
    );
    for (i, byte) in bytes.iter().enumerate() {
        if i % BYTES_PER_LINE == 0 {
            out.push('\n');
        }
        let _ = write!(out, "0x{byte:02x},");
    }
    out.push_str("\n};\n");
    out
}

/// Render the `.h` file declaring `symbol`.
pub fn render_header(stem: &str, symbol: &str) -> String {
    let guard = guard_name(stem);
    format!(
        "#ifndef {guard}\n#define {guard}\n\nextern const unsigned char {symbol}[];\n\n#endif\n"
    )
}

/// The pair of source artifacts generated for one image
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub stem: String,
    pub symbol: String,
    pub source: String,
    pub header: String,
}

impl Artifacts {
    /// Render both files for `packed`.
    ///
    /// Fails with [`AppError::LengthMismatch`] when the packed frame does
    /// not have exactly the length the array is declared with.
    pub fn render(
        stem: &str,
        suffix: &str,
        packed: &PackedBuffer,
        spec: &DisplaySpec,
    ) -> Result<Self, AppError> {
        spec.validate_size(packed.len())?;

        let symbol = symbol_name(stem, suffix);
        let header_file = format!("{stem}.h");
        Ok(Self {
            stem: stem.to_string(),
            source: render_source(&header_file, &symbol, spec.frame_bytes, packed.bytes()),
            header: render_header(stem, &symbol),
            symbol,
        })
    }

    /// Write `<stem>.c` and `<stem>.h` into `dir`, returning their paths
    pub fn write_to(&self, dir: &Path) -> Result<(PathBuf, PathBuf), AppError> {
        let source_path = dir.join(format!("{}.c", self.stem));
        let header_path = dir.join(format!("{}.h", self.stem));
        std::fs::write(&source_path, &self.source)?;
        std::fs::write(&header_path, &self.header)?;
        Ok((source_path, header_path))
    }
}
