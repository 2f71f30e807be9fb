//! Minimal IPFS-style path handling
//!
//! Just enough to find the CID a path starts with: paths look like
//! `/ipfs/<cid>/rest`, `/ipld/<cid>`, or a bare `<cid>`.

use cid::Version;

use crate::error::{EncodingError, Result};

/// Split a path into its non-empty `/`-separated segments.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// The CID token a path starts with: its first segment, or its second
/// when the first is an `ipfs`/`ipld` namespace marker.
///
/// An empty path, or a namespace marker with nothing after it, is an
/// error.
pub fn leading_cid(path: &str) -> Result<&str> {
    let segs = segments(path);
    let token = match segs.first() {
        Some(&first) if first == "ipfs" || first == "ipld" => segs.get(1).copied(),
        Some(&first) => Some(first),
        None => None,
    };
    token.ok_or_else(|| EncodingError::MissingCid(path.to_string()))
}

/// Classify a CID token by its text shape alone. The version 0 text form
/// is always 46 characters starting with `Qm`; anything else is treated
/// as version 1. The token is not parsed or validated.
pub(crate) fn cid_version(token: &str) -> Version {
    if token.len() == 46 && token.starts_with("Qm") {
        Version::V0
    } else {
        Version::V1
    }
}
