//! Test fixtures - known contents and their SHA-256 digests.

/// Four bytes `DE AD BE EF`
pub const ICON_BYTES: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

/// SHA-256 of [`ICON_BYTES`]
pub const ICON_DIGEST: &str = "5f78c33274e43fa9de5659265c1d917e25c03722dcb0b8d27db8d5feaa813953";

/// SHA-256 of `hello`
pub const HELLO_DIGEST: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

/// SHA-256 of the empty string
pub const EMPTY_DIGEST: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Entry lines of a manifest, in order
pub fn entry_lines(manifest: &str) -> Vec<&str> {
    manifest
        .lines()
        .filter(|line| line.starts_with("  \""))
        .collect()
}
