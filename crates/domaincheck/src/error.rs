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

use crate::ascii::AsciiError;
use crate::config::ConfigError;
use crate::rules::Rejection;

#[derive(thiserror::Error, Debug)]
pub enum DomainCheckError {
    #[error("Invalid domain name: {0}")]
    Invalid(#[from] Rejection),
    #[error("ASCII conversion failed: {0}")]
    Ascii(#[from] AsciiError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type DomainCheckResult<T> = Result<T, DomainCheckError>;
