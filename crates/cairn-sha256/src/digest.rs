// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 digest value with hex encoding

use core::fmt;
use core::str::FromStr;

use alloc::format;
use alloc::string::String;

use crate::consts::HASH_LEN;
use crate::error::DigestParseError;

/// A 32-byte SHA-256 digest.
///
/// The digest is the big-endian concatenation of the eight final state
/// words. It renders as a 64-character lowercase hex string via
/// [`to_hex`](Self::to_hex) or [`Display`](core::fmt::Display) and parses
/// back with [`from_hex`](Self::from_hex); parsing accepts either case.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub(crate) [u8; HASH_LEN]);

impl Digest {
    /// Borrow the raw digest bytes
    pub const fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }

    /// Extract the raw digest bytes
    pub const fn into_bytes(self) -> [u8; HASH_LEN] {
        self.0
    }

    /// Render the digest as a lowercase hex string
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a digest from exactly 64 hex characters
    pub fn from_hex(hex: &str) -> Result<Self, DigestParseError> {
        if hex.len() != HASH_LEN * 2 {
            return Err(DigestParseError::InvalidLength(hex.len()));
        }

        let mut bytes = [0u8; HASH_LEN];
        for (byte, pair) in bytes.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
            let hi = hex_val(pair[0]).ok_or(DigestParseError::InvalidCharacter(pair[0] as char))?;
            let lo = hex_val(pair[1]).ok_or(DigestParseError::InvalidCharacter(pair[1] as char))?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

impl FromStr for Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_LEN]> for Digest {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; HASH_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}
