/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use crate::error::*;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use num_bigint_dig::BigUint;
use std::str::FromStr;

/// Separator placed between the decimal elements before base64 encoding
pub const DELIMITER: &str = ":";

/// A Goldwasser-Micali ciphertext, one element modulo N per plaintext bit
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ciphertext(pub(crate) Vec<BigUint>);

impl Ciphertext {
    /// Wrap the per-bit elements
    pub fn new(elements: Vec<BigUint>) -> Self {
        Self(elements)
    }

    /// The per-bit elements in plaintext bit order
    pub fn elements(&self) -> &[BigUint] {
        &self.0
    }

    /// Number of encrypted bits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no bit is encrypted
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as base64 of the `:`-joined decimal elements
    pub fn serialize(&self) -> String {
        let joined = self
            .0
            .iter()
            .map(BigUint::to_string)
            .collect::<Vec<_>>()
            .join(DELIMITER);
        BASE64.encode(joined.as_bytes())
    }

    /// Parse the text produced by [`Ciphertext::serialize`]
    pub fn deserialize<S: AsRef<str>>(text: S) -> GmResult<Self> {
        let bytes = BASE64.decode(text.as_ref().trim())?;
        let joined = String::from_utf8(bytes)?;
        if joined.is_empty() {
            return Err(GmError::InvalidCiphertext);
        }
        let mut elements = Vec::new();
        for element in joined.split(DELIMITER) {
            // plain decimal only, no sign or separators
            if !element.bytes().all(|b| b.is_ascii_digit()) {
                return Err(GmError::InvalidCiphertext);
            }
            elements.push(BigUint::from_str(element)?);
        }
        Ok(Self(elements))
    }
}

impl From<Vec<BigUint>> for Ciphertext {
    fn from(elements: Vec<BigUint>) -> Self {
        Self(elements)
    }
}

impl FromStr for Ciphertext {
    type Err = GmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s)
    }
}
