//! Content keys for contract binaries
//!
//! A key is the SHA256 of the normalized chain id followed by the file bytes,
//! so the same binary on two chains gets two entries.

use crate::error::{CodeCacheError, CodeCacheResult};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Read size when streaming a file into the hasher
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Strip `-` from a chain id before it is mixed into a key
pub fn normalize_chain_id(chain_id: &str) -> String {
    chain_id.replace('-', "")
}

/// Hash a file together with a chain id, returning lowercase hex
pub fn fingerprint_file(path: &Path, chain_id: &str) -> CodeCacheResult<String> {
    if !path.exists() {
        return Err(CodeCacheError::NotFound(path.to_path_buf()));
    }

    let mut file = File::open(path)
        .map_err(|e| CodeCacheError::io(format!("opening {}", path.display()), e))?;

    let mut hasher = Sha256::new();
    hasher.update(normalize_chain_id(chain_id).as_bytes());

    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(CodeCacheError::io(format!("reading {}", path.display()), e));
            }
        };
        hasher.update(&buf[..n]);
        total += n as u64;
    }

    let key = hex::encode(hasher.finalize());
    debug!(
        "Fingerprinted {} ({} bytes, chain {}): {}",
        path.display(),
        total,
        chain_id,
        key
    );
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn contract(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn normalize_strips_dashes() {
        assert_eq!(normalize_chain_id("local-juno-1"), "localjuno1");
        assert_eq!(normalize_chain_id("chain1"), "chain1");
    }

    #[test]
    fn fingerprint_deterministic() {
        let dir = TempDir::new().unwrap();
        let path = contract(&dir, "cw20.wasm", b"\0asm contract bytes");

        let a = fingerprint_file(&path, "testchain").unwrap();
        let b = fingerprint_file(&path, "testchain").unwrap();

        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn fingerprint_matches_manual_digest() {
        let dir = TempDir::new().unwrap();
        let path = contract(&dir, "a.wasm", b"payload");

        let mut hasher = Sha256::new();
        hasher.update(b"chain1payload");
        let expected = hex::encode(hasher.finalize());

        assert_eq!(fingerprint_file(&path, "chain-1").unwrap(), expected);
    }

    #[test]
    fn fingerprint_normalizes_chain_id() {
        let dir = TempDir::new().unwrap();
        let path = contract(&dir, "a.wasm", b"payload");

        assert_eq!(
            fingerprint_file(&path, "chain-1").unwrap(),
            fingerprint_file(&path, "chain1").unwrap()
        );
    }

    #[test]
    fn fingerprint_changes_with_content_or_chain() {
        let dir = TempDir::new().unwrap();
        let one = contract(&dir, "one.wasm", b"payload-a");
        let two = contract(&dir, "two.wasm", b"payload-b");

        let base = fingerprint_file(&one, "chain1").unwrap();
        assert_ne!(base, fingerprint_file(&two, "chain1").unwrap());
        assert_ne!(base, fingerprint_file(&one, "chain2").unwrap());
    }

    #[test]
    fn fingerprint_streams_multiple_chunks() {
        let dir = TempDir::new().unwrap();
        let bytes: Vec<u8> = (0..(CHUNK_SIZE * 2 + 17)).map(|i| (i % 251) as u8).collect();
        let path = contract(&dir, "big.wasm", &bytes);

        let mut hasher = Sha256::new();
        hasher.update(b"c");
        hasher.update(&bytes);
        let expected = hex::encode(hasher.finalize());

        assert_eq!(fingerprint_file(&path, "c").unwrap(), expected);
    }

    #[test]
    fn fingerprint_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = fingerprint_file(&dir.path().join("nope.wasm"), "c").unwrap_err();
        assert!(matches!(err, CodeCacheError::NotFound(_)));
    }
}
