/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
//! Message to bit string encoding, seven bits per ASCII character
use crate::error::*;
use bit_vec::BitVec;

/// Number of bits used for each message character
pub const FIELD_WIDTH: usize = 7;

/// Convert an ASCII message to its bit representation.
///
/// Every byte becomes a 7-bit field, most significant bit first. Bytes that
/// do not fit in 7 bits are rejected instead of being truncated.
pub fn encode(message: &str) -> GmResult<BitVec> {
    let bytes = message.as_bytes();
    let mut bits = BitVec::with_capacity(bytes.len() * FIELD_WIDTH);
    for (index, &byte) in bytes.iter().enumerate() {
        if !byte.is_ascii() {
            return Err(GmError::NonAsciiMessage { index, byte });
        }
        for shift in (0..FIELD_WIDTH).rev() {
            bits.push((byte >> shift) & 1 == 1);
        }
    }
    Ok(bits)
}

/// Convert a bit representation back to the message.
///
/// The length must be a whole number of 7-bit fields.
pub fn decode(bits: &BitVec) -> GmResult<String> {
    if bits.len() % FIELD_WIDTH != 0 {
        return Err(GmError::EncodingLength {
            len: bits.len(),
            width: FIELD_WIDTH,
        });
    }

    let mut message = String::with_capacity(bits.len() / FIELD_WIDTH);
    let mut code = 0u8;
    for (i, bit) in bits.iter().enumerate() {
        code = (code << 1) | u8::from(bit);
        if (i + 1) % FIELD_WIDTH == 0 {
            message.push(char::from(code));
            code = 0;
        }
    }
    Ok(message)
}
