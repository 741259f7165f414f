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

//! Domain name syntax constants
//!
//! Character sets and markers used by the validation rules. The forbidden
//! character sets are the only place the strictness level is tuned.

/// Literal marker for a wildcard domain. Only recognized at position 0.
pub const WILDCARD_PREFIX: &str = "*.";
pub const LABEL_SEPARATOR: char = '.';
pub const LABEL_EDGE_FORBIDDEN: char = '-';
/// A domain must have at least this many labels once the wildcard is removed.
pub const MIN_LABELS: usize = 2;

/// Canonical forbidden special characters for strict validation.
pub const STRICT_FORBIDDEN_CHARS: &[char] = &[
    '_', '~', '`', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '=', '+', '{', '}', '[', ']',
    '|', '\\', ';', ':', '\'', '"', ',', '<', '>', '/', '?',
];

/// Forbidden characters for permissive validation.
pub const PERMISSIVE_FORBIDDEN_CHARS: &[char] = &['*', '@'];

// Strictness names used in configuration
pub const STRICTNESS_STRICT: &str = "strict";
pub const STRICTNESS_PERMISSIVE: &str = "permissive";

// ASCII profile names used in configuration
pub const ASCII_PROFILE_PUNYCODE: &str = "punycode";
pub const ASCII_PROFILE_UTS46: &str = "uts46";

/// Prefix of an ASCII-compatible encoded label.
pub const ACE_PREFIX: &str = "xn--";
