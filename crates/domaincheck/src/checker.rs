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

use crate::ascii::{AsciiProfile, ToAscii};
use crate::config::Config;
use crate::constants::WILDCARD_PREFIX;
use crate::error::DomainCheckResult;
use crate::rules::RuleSet;

/// Validates domain names and converts them to their ASCII transport form.
///
/// A checker holds no mutable state and can be shared freely between
/// threads as long as its converter can.
///
/// # Example
///
/// ```rust
/// use domaincheck::DomainChecker;
/// let checker = DomainChecker::strict();
/// assert!(checker.valid_wildcard("*.good.example.com"));
/// assert_eq!(checker.stem_domain("*.good.example.com"), "good.example.com");
/// assert_eq!(checker.punycode_name("随便.com"), "xn--wtq493o.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DomainChecker<C = AsciiProfile> {
    rules: RuleSet,
    converter: C,
}

impl DomainChecker<AsciiProfile> {
    /// Strict rules with the punycode profile.
    pub const fn strict() -> Self {
        DomainChecker {
            rules: RuleSet::strict(),
            converter: AsciiProfile::Punycode,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        DomainChecker {
            rules: config.rules(),
            converter: config.ascii_profile,
        }
    }
}

impl<C: ToAscii> DomainChecker<C> {
    pub fn new(rules: RuleSet, converter: C) -> Self {
        DomainChecker { rules, converter }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn valid(&self, name: &str) -> bool {
        self.rules.valid(name)
    }

    pub fn valid_wildcard(&self, name: &str) -> bool {
        self.rules.valid_wildcard(name)
    }

    pub fn stem_domain(&self, name: &str) -> String {
        self.rules.stem_domain(name)
    }

    /// Converts `name` to ASCII, keeping its wildcard marker.
    ///
    /// Invalid names never reach the converter.
    pub fn try_punycode_name(&self, name: &str) -> DomainCheckResult<String> {
        self.rules.check(name)?;
        let (wildcard, stem) = match name.strip_prefix(WILDCARD_PREFIX) {
            Some(stem) => (true, stem),
            None => (false, name),
        };

        let ascii = self.converter.to_ascii(stem).inspect_err(|error| {
            tracing::debug!(candidate = name, %error, "ASCII conversion failed");
        })?;

        if wildcard {
            Ok(format!("{WILDCARD_PREFIX}{ascii}"))
        } else {
            Ok(ascii)
        }
    }

    /// Like [`DomainChecker::try_punycode_name`], with every failure mapped
    /// to an empty string.
    pub fn punycode_name(&self, name: &str) -> String {
        self.try_punycode_name(name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::AsciiError;
    use crate::error::DomainCheckError;
    use crate::rules::Rejection;

    struct FailingConverter;

    impl ToAscii for FailingConverter {
        fn to_ascii(&self, stem: &str) -> Result<String, AsciiError> {
            Err(AsciiError::Encoding(stem.to_string()))
        }
    }

    struct UppercaseConverter;

    impl ToAscii for UppercaseConverter {
        fn to_ascii(&self, stem: &str) -> Result<String, AsciiError> {
            Ok(stem.to_uppercase())
        }
    }

    #[test]
    fn test_punycode_name_keeps_wildcard() {
        let checker = DomainChecker::strict();
        assert_eq!(
            checker.punycode_name("*.сильныйцветок.рф"),
            "*.xn--b1aghehcoluq5b8cl.xn--p1ai"
        );
        assert_eq!(checker.punycode_name("example.com"), "example.com");
    }

    #[test]
    fn test_try_punycode_name_reports_rejection() {
        let checker = DomainChecker::strict();
        assert!(matches!(
            checker.try_punycode_name("*."),
            Err(DomainCheckError::Invalid(Rejection::TooFewLabels(1)))
        ));
        assert_eq!(checker.punycode_name("*."), "");
    }

    #[test]
    fn test_converter_failure_maps_to_empty() {
        let checker = DomainChecker::new(RuleSet::strict(), FailingConverter);
        assert!(matches!(
            checker.try_punycode_name("example.com"),
            Err(DomainCheckError::Ascii(AsciiError::Encoding(_)))
        ));
        assert_eq!(checker.punycode_name("example.com"), "");
    }

    #[test]
    fn test_converter_only_sees_stem() {
        let checker = DomainChecker::new(RuleSet::strict(), UppercaseConverter);
        assert_eq!(checker.punycode_name("*.good.example.com"), "*.GOOD.EXAMPLE.COM");
    }

    #[test]
    fn test_from_config() {
        let config = Config::from_toml_str(
            r#"
            strictness = "permissive"
            ascii_profile = "uts46"
            "#,
        )
        .unwrap();
        let checker = DomainChecker::from_config(&config);
        assert_eq!(checker.rules(), &RuleSet::permissive());
        assert!(checker.valid("*.under_score.example.com"));
        assert_eq!(
            checker.punycode_name("*.Good.Example.com"),
            "*.good.example.com"
        );
    }
}
