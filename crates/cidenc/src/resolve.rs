//! Selecting an [`Encoder`] from user options and from paths
//!
//! Two sources feed the choice:
//!
//! - the `cid-base` / `upgrade-cidv0-in-output` options a user supplied
//!   ([`EncoderOptions`]), resolved at one of two tiers: general-purpose
//!   rendering upgrades version 0 CIDs once a base is chosen, low-level
//!   rendering preserves them unless explicitly told otherwise
//! - the CID embedded in a path the request refers to
//!   ([`encoder_from_path`]), which for a version 1 CID names its own
//!   base
//!
//! Either step can fail on an unknown multibase. Both return a
//! [`Resolution`] carrying a usable fallback encoder next to the error,
//! so each caller decides whether the failure is fatal.

use cid::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bases::{base_by_code, base_by_name};
use crate::encoder::Encoder;
use crate::error::{EncodingError, Result};
use crate::path;

/// The encoding options a user may supply, as command-line flags or
/// request options. Both are independently optional: absent means "not
/// specified", which is distinct from any explicit value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderOptions {
    /// Multibase name (or code character) used for version 1 CIDs in
    /// output.
    #[serde(rename = "cid-base", skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Upgrade version 0 to version 1 CIDs in output.
    #[serde(
        rename = "upgrade-cidv0-in-output",
        skip_serializing_if = "Option::is_none"
    )]
    pub upgrade: Option<bool>,
}

impl EncoderOptions {
    /// Resolve an [`Encoder`] for general-purpose rendering: choosing a
    /// base opts into upgrading version 0 CIDs, unless the upgrade
    /// option explicitly says otherwise.
    pub fn encoder(&self) -> Resolution {
        self.resolve(true)
    }

    /// Resolve an [`Encoder`] for low-level rendering: version 0 CIDs
    /// keep their stored form even when a base is chosen, so identifiers
    /// round-trip byte for byte. Only an explicit upgrade option
    /// rewrites them.
    pub fn low_level_encoder(&self) -> Resolution {
        self.resolve(false)
    }

    /// Whether a base was explicitly supplied (present and non-empty).
    pub fn base_defined(&self) -> bool {
        matches!(&self.base, Some(name) if !name.is_empty())
    }

    fn resolve(&self, auto_upgrade: bool) -> Resolution {
        let mut encoder = Encoder::default();

        if let Some(name) = &self.base
            && !name.is_empty()
        {
            match base_by_name(name) {
                Ok(base) => {
                    encoder.base = base;
                    encoder.upgrade = auto_upgrade;
                }
                // the explicit upgrade option is never applied on top of
                // a fallback
                Err(error) => return Resolution::Fallback { encoder, error },
            }
        }

        if let Some(upgrade) = self.upgrade {
            encoder.upgrade = upgrade;
        }

        debug!(
            "resolved encoder: base '{}', upgrade {}",
            encoder.base.code(),
            encoder.upgrade
        );
        Resolution::Complete(encoder)
    }
}

/// Outcome of an encoder resolution: the chosen encoder, or a usable
/// fallback paired with what went wrong.
///
/// A fallback is always safe to render with. Callers that do not care
/// about the failure take [`Resolution::encoder`] and move on; callers
/// that must surface it use [`Resolution::into_result`].
#[derive(Debug)]
pub enum Resolution {
    /// Every requested input was honored.
    Complete(Encoder),
    /// A lookup failed; `encoder` is the unchanged pre-failure value.
    Fallback {
        encoder: Encoder,
        error: EncodingError,
    },
}

impl Resolution {
    /// The resolved encoder, ignoring any failure.
    pub fn encoder(&self) -> Encoder {
        match self {
            Resolution::Complete(encoder) => *encoder,
            Resolution::Fallback { encoder, .. } => *encoder,
        }
    }

    /// The failure, when resolution fell back.
    pub fn error(&self) -> Option<&EncodingError> {
        match self {
            Resolution::Complete(_) => None,
            Resolution::Fallback { error, .. } => Some(error),
        }
    }

    /// Treat a fallback as fatal, keeping only fully honored encoders.
    pub fn into_result(self) -> Result<Encoder> {
        match self {
            Resolution::Complete(encoder) => Ok(encoder),
            Resolution::Fallback { error, .. } => Err(error),
        }
    }
}

/// Refine an encoder using the CID embedded in `path`, starting from the
/// caller's `encoder`.
///
/// A version 0 CID has no base to honor, so the caller's base is kept
/// and upgrading is switched off: rendering gives back exactly what the
/// path contained. A version 1 CID names its own base through its
/// leading multibase code, which is adopted along with upgrading.
///
/// On failure the caller's encoder comes back unchanged as the fallback,
/// and rendering with it is safe.
pub fn encoder_from_path(encoder: Encoder, path: &str) -> Resolution {
    let token = match path::leading_cid(path) {
        Ok(token) => token,
        Err(error) => return Resolution::Fallback { encoder, error },
    };

    match path::cid_version(token) {
        Version::V0 => Resolution::Complete(Encoder {
            base: encoder.base,
            upgrade: false,
        }),
        Version::V1 => {
            let Some(code) = token.chars().next() else {
                // unreachable: leading_cid never returns an empty token
                return Resolution::Fallback {
                    encoder,
                    error: EncodingError::MissingCid(path.to_string()),
                };
            };
            match base_by_code(code) {
                Ok(base) => Resolution::Complete(Encoder {
                    base,
                    upgrade: true,
                }),
                Err(error) => {
                    debug!("CID in path has unknown multibase code '{code}'");
                    Resolution::Fallback { encoder, error }
                }
            }
        }
    }
}
