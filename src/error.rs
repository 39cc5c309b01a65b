/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use thiserror::Error;

/// Errors produced by the Goldwasser-Micali scheme
#[derive(Debug, Error)]
pub enum GmError {
    /// Postcard deserialization error
    #[error("Invalid serialized bytes: {0}")]
    PostcardError(#[from] postcard::Error),
    /// Ciphertext is not valid base64
    #[error("Invalid ciphertext encoding: {0}")]
    Base64Error(#[from] base64::DecodeError),
    /// Ciphertext body is not valid UTF-8
    #[error("Invalid ciphertext text: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
    /// Ciphertext element is not a decimal integer
    #[error("Invalid ciphertext element: {0}")]
    ParseError(#[from] num_bigint_dig::ParseBigIntError),
    /// A bit sequence is not a whole number of character fields
    #[error("Invalid bit length {len}, expected a multiple of {width}")]
    EncodingLength {
        /// Number of bits received
        len: usize,
        /// Width of one character field
        width: usize,
    },
    /// Encryption requires at least one character
    #[error("Cannot encrypt an empty message")]
    EmptyMessage,
    /// The message contains a byte that does not fit in a 7-bit field
    #[error("Message byte {byte:#04x} at index {index} is not ASCII")]
    NonAsciiMessage {
        /// Position of the offending byte
        index: usize,
        /// The offending byte
        byte: u8,
    },
    /// The requested key size is too small
    #[error("Invalid key bit length: {0}")]
    InvalidBitLength(usize),
    /// Both primes kept colliding during key generation
    #[error("Key generation failed after {attempts} attempts to find distinct primes")]
    KeyGenerationFailed {
        /// Number of redraws performed
        attempts: usize,
    },
    /// The primality test cannot reject anything
    #[error("Invalid primality strategy: {0}")]
    InvalidPrimalityStrategy(&'static str),
    /// The supplied factors cannot form a key
    #[error("Invalid primes")]
    InvalidPrimes,
    /// Invalid encryption key
    #[error("Invalid encryption key")]
    InvalidEncryptionKey,
    /// Invalid ciphertext
    #[error("Invalid ciphertext, unable to decrypt")]
    InvalidCiphertext,
}

/// Goldwasser-Micali results
pub type GmResult<T> = Result<T, GmError>;
