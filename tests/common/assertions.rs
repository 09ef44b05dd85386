//! Assertions over generated C artifacts.

use std::path::Path;

use epd_convert::models::{AppConfig, DisplaySpec};
use epd_convert::services::load_image;

/// Parse the byte literals out of a generated `.c` file
pub fn c_array_bytes(source: &str) -> Vec<u8> {
    let body = source
        .split_once('{')
        .and_then(|(_, rest)| rest.split_once('}'))
        .map(|(body, _)| body)
        .expect("C source has no array body");

    body.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            let hex = t.strip_prefix("0x").expect("Byte literal without 0x prefix");
            u8::from_str_radix(hex, 16).expect("Invalid byte literal")
        })
        .collect()
}

/// Assert the `.c` file declares `symbol` with `len` bytes and holds that many
pub fn assert_c_source(path: &Path, symbol: &str, len: usize) -> Vec<u8> {
    let source = std::fs::read_to_string(path).expect("Failed to read C source");
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap();

    assert!(
        source.starts_with(&format!("#include \"{stem}.h\"\n\n")),
        "Missing include in {}",
        path.display()
    );
    assert!(
        source.contains(&format!("const unsigned char {symbol}[{len}] = {{")),
        "Missing declaration of {symbol}[{len}]"
    );
    assert!(source.ends_with("\n};\n"), "Array not closed");

    let bytes = c_array_bytes(&source);
    assert_eq!(bytes.len(), len, "Array holds {} bytes", bytes.len());
    bytes
}

/// Assert the `.h` file guards and declares `symbol`
pub fn assert_c_header(path: &Path, symbol: &str) {
    let header = std::fs::read_to_string(path).expect("Failed to read C header");
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap();
    let guard = format!("_{}_H_", stem.to_uppercase());

    assert!(header.starts_with(&format!("#ifndef {guard}\n#define {guard}\n")));
    assert!(header.contains(&format!("extern const unsigned char {symbol}[];")));
    assert!(header.ends_with("#endif\n"));
}

/// Packed frame the core produces for `path` under `config`
pub fn expected_frame(path: &Path, config: &AppConfig) -> Vec<u8> {
    let spec = DisplaySpec::from_dimensions(config.width, config.height).unwrap();
    let image = load_image(path, &spec).expect("Fixture failed to load");
    config
        .converter()
        .unwrap()
        .convert(image)
        .unwrap()
        .into_packed()
        .into_bytes()
}

/// Every nibble of a packed frame must address the eight-entry palette
pub fn assert_valid_nibbles(bytes: &[u8]) {
    for (i, byte) in bytes.iter().enumerate() {
        assert!(byte >> 4 < 8, "Byte {i} high nibble out of range: {byte:#04x}");
        assert!(byte & 0x0f < 8, "Byte {i} low nibble out of range: {byte:#04x}");
    }
}
