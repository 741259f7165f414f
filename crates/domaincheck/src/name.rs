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

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ascii::{AsciiError, ToAscii};
use crate::constants::{LABEL_SEPARATOR, WILDCARD_PREFIX};
use crate::rules::{Rejection, RuleSet};

/// A [`DomainName`] is a string that passed domain name validation, such as
/// `www.example.com` or `*.example.com`.
///
/// The original text is kept as-is; [`DomainName::stem`] and
/// [`DomainName::to_ascii`] derive the other forms on demand.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub struct DomainName(String);

impl DomainName {
    pub fn parse_with(rules: &RuleSet, name: &str) -> Result<Self, Rejection> {
        rules.check(name)?;
        Ok(DomainName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.0.starts_with(WILDCARD_PREFIX)
    }

    /// The name without its wildcard marker.
    pub fn stem(&self) -> &str {
        self.0.strip_prefix(WILDCARD_PREFIX).unwrap_or(&self.0)
    }

    /// Labels of the stem, most specific first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.stem().split(LABEL_SEPARATOR)
    }

    pub fn to_ascii(&self, converter: &impl ToAscii) -> Result<String, AsciiError> {
        let ascii = converter.to_ascii(self.stem())?;
        if self.is_wildcard() {
            Ok(format!("{WILDCARD_PREFIX}{ascii}"))
        } else {
            Ok(ascii)
        }
    }
}

impl FromStr for DomainName {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainName::parse_with(&RuleSet::strict(), s)
    }
}

impl TryFrom<&str> for DomainName {
    type Error = Rejection;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        DomainName::from_str(value)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<DomainName> for String {
    fn from(value: DomainName) -> Self {
        value.0
    }
}

impl Display for DomainName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for DomainName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DomainName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DomainNameVisitor)
    }
}

struct DomainNameVisitor;
impl Visitor<'_> for DomainNameVisitor {
    type Value = DomainName;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "A domain name string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::from_str(v)
            .map_err(|e| serde::de::Error::custom(format!("Invalid domain name '{v}': {e}")))
    }
}
