// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Digest hex parse error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestParseError {
    /// Input is not exactly 64 hexadecimal characters
    #[error("expected 64 hexadecimal characters, got {0}")]
    InvalidLength(usize),

    /// Input contains a character outside [0-9a-fA-F]
    #[error("invalid hexadecimal character {0:?}")]
    InvalidCharacter(char),
}
