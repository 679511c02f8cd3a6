//! Content hashing.
//!
//! Two tiers:
//! - `compute`/`fingerprint`: fast `FxHasher` 64-bit hashes for cheap
//!   change detection (config reload guard).
//! - [`ContentHash`]: blake3 hashes for content-based freshness detection
//!   in watch mode.

use rustc_hash::FxHasher;
use std::fs::File;
use std::hash::Hasher;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Compute hash and return as 8-char hex fingerprint.
#[inline]
#[allow(dead_code)]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    format!("{:016x}", compute(value))[..8].to_string()
}

// =============================================================================
// ContentHash (blake3)
// =============================================================================

/// A 256-bit content hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Create a new ContentHash from raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a hash representing "no content" (all zeros).
    #[inline]
    pub const fn empty() -> Self {
        Self([0; 32])
    }

    /// Check if this is the empty/zero hash.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == [0; 32]
    }

    /// Convert to hex string (for debugging/display).
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 16 hex chars for brevity
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// Compute blake3 hash of file contents.
///
/// Unreadable files hash to `ContentHash::empty()`, which never equals a
/// real hash, so a vanished file always reads as changed.
pub fn hash_file(path: &Path) -> ContentHash {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return ContentHash::empty(),
    };

    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buffer[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => return ContentHash::empty(),
        }
    }

    ContentHash::new(*hasher.finalize().as_bytes())
}
