/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

//! Conversion of domain names to their ASCII-compatible encoding.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::constants::{ACE_PREFIX, ASCII_PROFILE_PUNYCODE, ASCII_PROFILE_UTS46, LABEL_SEPARATOR};

/// Converts a wildcard-free domain name to its ASCII transport form.
///
/// Implementations must be pure: the same input always yields the same
/// output, with no shared state between calls. Already-ASCII, valid input
/// should map to itself.
pub trait ToAscii: Send + Sync {
    fn to_ascii(&self, stem: &str) -> Result<String, AsciiError>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AsciiError {
    #[error("could not punycode encode label '{0}'")]
    Encoding(String),
    #[error("label '{0}' is not valid punycode")]
    InvalidAceLabel(String),
    #[error("rejected by UTS #46 processing: {0}")]
    Rejected(String),
}

/// Built-in ASCII conversion profiles.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, Eq, PartialEq)]
#[serde(try_from = "String", into = "String")]
pub enum AsciiProfile {
    /// Encode non-ASCII labels with RFC 3492 punycode and leave ASCII labels
    /// untouched, case included.
    #[default]
    Punycode,
    /// Full UTS #46 processing with STD3 rules and DNS length limits. Output
    /// is lower case.
    Uts46,
}

impl Display for AsciiProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AsciiProfile::Punycode => ASCII_PROFILE_PUNYCODE,
            AsciiProfile::Uts46 => ASCII_PROFILE_UTS46,
        };
        write!(f, "{name}")
    }
}

impl TryFrom<&str> for AsciiProfile {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            ASCII_PROFILE_PUNYCODE => Ok(AsciiProfile::Punycode),
            ASCII_PROFILE_UTS46 => Ok(AsciiProfile::Uts46),
            _ => Err(format!("AsciiProfile {value} not supported")),
        }
    }
}

impl TryFrom<String> for AsciiProfile {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AsciiProfile::try_from(value.as_str())
    }
}

impl From<AsciiProfile> for String {
    fn from(value: AsciiProfile) -> Self {
        value.to_string()
    }
}

impl ToAscii for AsciiProfile {
    fn to_ascii(&self, stem: &str) -> Result<String, AsciiError> {
        match self {
            AsciiProfile::Punycode => punycode_labels(stem),
            AsciiProfile::Uts46 => idna::domain_to_ascii_strict(stem)
                .map_err(|e| AsciiError::Rejected(format!("{e:?}"))),
        }
    }
}

fn punycode_labels(stem: &str) -> Result<String, AsciiError> {
    let labels = stem
        .split(LABEL_SEPARATOR)
        .map(|label| {
            if label.is_ascii() {
                check_ace_label(label)?;
                return Ok(label.to_string());
            }
            idna::punycode::encode_str(label)
                .map(|encoded| format!("{ACE_PREFIX}{encoded}"))
                .ok_or_else(|| AsciiError::Encoding(label.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(labels.join(&LABEL_SEPARATOR.to_string()))
}

/// An ASCII label carrying the `xn--` prefix must decode as punycode.
fn check_ace_label(label: &str) -> Result<(), AsciiError> {
    let Some(encoded) = label
        .get(..ACE_PREFIX.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(ACE_PREFIX))
        .map(|_| &label[ACE_PREFIX.len()..])
    else {
        return Ok(());
    };
    match idna::punycode::decode_to_string(encoded) {
        Some(_) => Ok(()),
        None => Err(AsciiError::InvalidAceLabel(label.to_string())),
    }
}
