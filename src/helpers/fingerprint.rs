use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `text`, truncated to `len` characters.
pub fn content_fingerprint(text: &str, len: usize) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(len);
    encoded
}

/// Local wall-clock time used to stamp analysis results.
pub fn capture_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
