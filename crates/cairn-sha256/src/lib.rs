// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming SHA-256 digest computation
//!
//! Implementation per FIPS 180-4 / RFC 6234 Section 6.2. Input is absorbed
//! incrementally through [`Sha256::update`]; [`Sha256::finalize`] consumes
//! the context and yields a [`Digest`], renderable as 32 raw bytes or a
//! 64-character lowercase hex string. All hashing state is zeroized on drop.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod digest;
mod error;
mod sha256;
mod word;

pub use consts::{BLOCK_LEN, HASH_LEN};
pub use digest::Digest;
pub use error::DigestParseError;
pub use sha256::Sha256;
