//! Rendering CIDs as text
//!
//! An [`Encoder`] pairs the multibase to use for version 1 CIDs with an
//! upgrade policy for version 0 CIDs. Version 0 CIDs have exactly one
//! text form (base58btc, no multibase prefix), so the base only applies
//! to them once they are rewritten as version 1.

use cid::{Cid, Version};
use multibase::Base;

use crate::error::{EncodingError, Result};

/// How to render a CID as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoder {
    /// Multibase used for version 1 CIDs.
    pub base: Base,
    /// Rewrite version 0 CIDs to version 1 before rendering.
    pub upgrade: bool,
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder {
            base: Encoder::DEFAULT_BASE,
            upgrade: false,
        }
    }
}

impl Encoder {
    /// Base used when the caller expresses no preference.
    pub const DEFAULT_BASE: Base = Base::Base58Btc;

    /// Render a CID according to this encoder's parameters.
    pub fn encode(&self, cid: &Cid) -> String {
        if cid.version() == Version::V0 && !self.upgrade {
            return cid.to_string();
        }
        let cid = if cid.version() == Version::V0 {
            Cid::new_v1(cid.codec(), *cid.hash())
        } else {
            *cid
        };
        // A version 1 CID renders in any base; `to_string_of_base` only
        // fails for version 0 in a base other than base58btc.
        cid.to_string_of_base(self.base)
            .unwrap_or_else(|_| cid.to_string())
    }

    /// Re-encode the CID string `s` according to this encoder's
    /// parameters.
    ///
    /// Strings already in the requested form are returned unchanged
    /// without being parsed.
    pub fn recode(&self, s: &str) -> Result<String> {
        if self.recode_is_noop(s)? {
            return Ok(s.to_string());
        }
        let cid = Cid::try_from(s)?;
        Ok(self.encode(&cid))
    }

    fn recode_is_noop(&self, s: &str) -> Result<bool> {
        if s.len() < 2 {
            return Err(EncodingError::CidTooShort);
        }
        Ok(if self.upgrade {
            s.starts_with(self.base.code())
        } else {
            s.starts_with("Qm")
        })
    }
}
