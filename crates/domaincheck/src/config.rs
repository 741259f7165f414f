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

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ascii::AsciiProfile;
use crate::rules::{RuleSet, Strictness};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Defaults::strictness")]
    pub strictness: Strictness,
    #[serde(default = "Defaults::ascii_profile")]
    pub ascii_profile: AsciiProfile,
}

pub struct Defaults;

impl Defaults {
    pub fn strictness() -> Strictness {
        Strictness::Strict
    }
    pub fn ascii_profile() -> AsciiProfile {
        AsciiProfile::Punycode
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file: {path}: {error}")]
    CouldNotRead { path: String, error: std::io::Error },
    #[error("Invalid TOML in config file: {path}: {error}")]
    InvalidToml {
        path: String,
        error: toml::de::Error,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strictness: Defaults::strictness(),
            ascii_profile: Defaults::ascii_profile(),
        }
    }
}

impl Config {
    pub fn rules(&self) -> RuleSet {
        RuleSet {
            strictness: self.strictness,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let cfg = std::fs::read_to_string(path).map_err(|error| ConfigError::CouldNotRead {
            path: path.to_string_lossy().to_string(),
            error,
        })?;
        Self::parse(&cfg, &path.to_string_lossy())
    }

    pub fn from_toml_str(cfg: &str) -> Result<Self, ConfigError> {
        Self::parse(cfg, "<inline>")
    }

    fn parse(cfg: &str, path: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<Self>(cfg).map_err(|error| ConfigError::InvalidToml {
            path: path.to_string(),
            error,
        })?;
        tracing::debug!(
            strictness = %config.strictness,
            ascii_profile = %config.ascii_profile,
            "Loaded domain check config from {path}"
        );
        Ok(config)
    }
}
