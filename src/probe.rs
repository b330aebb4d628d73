//! Probe article identity generation
//!
//! Draws a random seed once per process and hashes it with a monotonic
//! counter (SHA-384, base64) to produce collision-free Message-ID
//! local-parts without needing a CSPRNG per call. The seed is mixed from
//! process start time and PID rather than an OS RNG — it only needs to be
//! unique to this run, not unpredictable.

use base64::Engine;
use sha2::{Digest, Sha384};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

fn process_seed() -> &'static [u8; 16] {
    static SEED: OnceLock<[u8; 16]> = OnceLock::new();
    SEED.get_or_init(|| {
        let pid = std::process::id() as u64;
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let mut seed = [0u8; 16];
        seed[..8].copy_from_slice(&pid.to_le_bytes());
        seed[8..].copy_from_slice(&nanos.to_le_bytes());
        seed
    })
}

fn next_counter() -> u64 {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Generate a process-unique, base64-encoded identity string: SHA-384 over
/// `seed || counter.to_le_bytes()`, base64 encoded.
pub fn unique() -> String {
    let mut hasher = Sha384::new();
    hasher.update(process_seed());
    hasher.update(next_counter().to_le_bytes());
    let digest = hasher.finalize();
    base64::engine::general_purpose::STANDARD.encode(digest)
}

/// Build a Message-ID for the given domain using [`unique`].
///
/// Base64 output can contain `/` and `+`, which are legal in a Message-ID
/// local-part but replaced here with `-`/`_` to keep the identity
/// filesystem- and log-friendly, matching the convention the loopback
/// peering server's `reject.<code>.<phase>@...` identities also follow.
pub fn next_message_id(domain: &str) -> String {
    let id = unique().replace('/', "_").replace('+', "-");
    format!("<{id}@{domain}>")
}

/// Canonical RFC-5322-style date string for probe articles: `%a, %d %b %Y
/// %H:%M:%S +0000`, always UTC, always the `+0000` spelling rather than
/// `Z`/`GMT`.
pub fn date_header() -> String {
    chrono::Utc::now().format("%a, %d %b %Y %H:%M:%S +0000").to_string()
}
