//! Beacon chain validator key material passed to the deposit contract.

use std::{fmt, str::FromStr};

use alloy::{hex, primitives::Bytes};

use crate::error::AppError;

/// Length of a BLS12-381 public key in bytes.
pub const VALIDATOR_PUBKEY_LENGTH: usize = 48;

/// Length of a BLS12-381 signature in bytes.
pub const VALIDATOR_SIGNATURE_LENGTH: usize = 96;

macro_rules! fixed_bytes_type {
    ($(#[$meta:meta])* $name:ident, $len:expr, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Wrap raw bytes.
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Build from a slice, checking its length.
            pub fn from_slice(bytes: &[u8]) -> Result<Self, AppError> {
                let bytes: [u8; $len] = bytes.try_into().map_err(|_| {
                    AppError::Parse(format!(
                        "{} must be {} bytes, got {}",
                        $label,
                        $len,
                        bytes.len()
                    ))
                })?;
                Ok(Self(bytes))
            }

            /// Raw bytes.
            pub fn as_slice(&self) -> &[u8] {
                &self.0
            }

            /// Copy into ABI `bytes`.
            pub fn to_bytes(&self) -> Bytes {
                Bytes::copy_from_slice(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let decoded = hex::decode(s.trim())?;
                Self::from_slice(&decoded)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }
    };
}

fixed_bytes_type!(
    /// A validator's BLS public key.
    ValidatorPubkey,
    VALIDATOR_PUBKEY_LENGTH,
    "Validator pubkey"
);

fixed_bytes_type!(
    /// A validator's BLS deposit signature.
    ValidatorSignature,
    VALIDATOR_SIGNATURE_LENGTH,
    "Validator signature"
);
