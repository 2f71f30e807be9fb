//! Multibase encoder selection for content identifiers (CIDs)
//!
//! This crate decides how CIDs are rendered as text:
//! - Resolve the `cid-base` / `upgrade-cidv0-in-output` options a user
//!   supplied into an [`Encoder`], with defaults that depend on whether
//!   the rendering is general-purpose or low-level
//! - Refine an encoder from the CID embedded in an IPFS path, which for
//!   version 1 CIDs names its own base
//! - Re-encode CID strings in the chosen base, optionally upgrading
//!   version 0 CIDs to version 1
//!
//! Base encodings come from the `multibase` crate and CID parsing from
//! the `cid` crate; both are re-exported where they appear in this API.

pub mod bases;
pub mod encoder;
pub mod path;
pub mod resolve;

pub use bases::{SUPPORTED_BASES, base_by_code, base_by_name, base_name};
pub use encoder::Encoder;
pub use resolve::{EncoderOptions, Resolution, encoder_from_path};

pub use cid::Cid;
pub use multibase::Base;

mod error;
pub use error::{EncodingError, Result};
