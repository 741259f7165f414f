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

//! Domain name validation for certificate and hostname matching.
//!
//! A candidate is accepted when it is a syntactically valid domain name with
//! at least two labels, optionally preceded by a single `*.` wildcard marker.
//! The free functions in this module use strict rules and the punycode
//! profile; build a [`DomainChecker`] to pick other settings.
//!
//! The string-returning functions signal failure with an empty string, never
//! a legitimate domain.

pub mod ascii;
pub mod checker;
pub mod config;
pub mod constants;
pub mod error;
mod name;
pub mod rules;

pub use ascii::{AsciiError, AsciiProfile, ToAscii};
pub use checker::DomainChecker;
pub use config::{Config, ConfigError};
pub use error::{DomainCheckError, DomainCheckResult};
pub use name::DomainName;
pub use rules::{Rejection, RuleSet, Strictness};

const DEFAULT_CHECKER: DomainChecker = DomainChecker::strict();

/// True if `name` is a valid domain name, wildcard or not.
pub fn valid(name: &str) -> bool {
    DEFAULT_CHECKER.valid(name)
}

/// True if `name` is a valid domain name starting with `*.`.
pub fn valid_wildcard(name: &str) -> bool {
    DEFAULT_CHECKER.valid_wildcard(name)
}

/// The name with any wildcard marker stripped, or `""` when invalid.
pub fn stem_domain(name: &str) -> String {
    DEFAULT_CHECKER.stem_domain(name)
}

/// The punycode form of the name with its wildcard marker kept, or `""` when
/// the name is invalid or cannot be encoded.
pub fn punycode_name(name: &str) -> String {
    DEFAULT_CHECKER.punycode_name(name)
}
