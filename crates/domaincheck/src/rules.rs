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

use std::fmt::Display;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::constants::{
    LABEL_EDGE_FORBIDDEN, LABEL_SEPARATOR, MIN_LABELS, PERMISSIVE_FORBIDDEN_CHARS,
    STRICT_FORBIDDEN_CHARS, STRICTNESS_PERMISSIVE, STRICTNESS_STRICT, WILDCARD_PREFIX,
};

/// Selects which special characters a domain name may not contain.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, Eq, PartialEq)]
#[serde(try_from = "String", into = "String")]
pub enum Strictness {
    /// Reject the full canonical set of special characters.
    #[default]
    Strict,
    /// Reject only `*` and `@`.
    Permissive,
}

impl Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strictness::Strict => STRICTNESS_STRICT,
            Strictness::Permissive => STRICTNESS_PERMISSIVE,
        };
        write!(f, "{name}")
    }
}

impl TryFrom<&str> for Strictness {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            STRICTNESS_STRICT => Ok(Strictness::Strict),
            STRICTNESS_PERMISSIVE => Ok(Strictness::Permissive),
            _ => Err(format!("Strictness {value} not supported")),
        }
    }
}

impl TryFrom<String> for Strictness {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Strictness::try_from(value.as_str())
    }
}

impl From<Strictness> for String {
    fn from(value: Strictness) -> Self {
        value.to_string()
    }
}

/// The reason a candidate is not a valid domain name.
///
/// Each variant corresponds to one validation rule, reported in the order the
/// rules are evaluated.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("leading or trailing whitespace")]
    SurroundingWhitespace,
    #[error("is an IP address literal")]
    IpLiteral,
    #[error("forbidden character '{0}'")]
    ForbiddenChar(char),
    #[error("contains a space")]
    EmbeddedSpace,
    #[error("needs at least two labels, found {0}")]
    TooFewLabels(usize),
    #[error("label padded with whitespace")]
    WhitespaceInLabel,
    #[error("empty label")]
    EmptyLabel,
    #[error("label '{0}' begins or ends with '-'")]
    HyphenAtLabelEdge(String),
    #[error("non-printable character {0:?}")]
    NonPrintable(char),
}

/// A configurable set of domain name validation rules.
///
/// Every rule except the forbidden character set is fixed; [`Strictness`]
/// picks the character set.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, Eq, PartialEq)]
pub struct RuleSet {
    #[serde(default)]
    pub strictness: Strictness,
}

impl RuleSet {
    pub const fn strict() -> Self {
        RuleSet {
            strictness: Strictness::Strict,
        }
    }

    pub const fn permissive() -> Self {
        RuleSet {
            strictness: Strictness::Permissive,
        }
    }

    pub fn forbidden_chars(&self) -> &'static [char] {
        match self.strictness {
            Strictness::Strict => STRICT_FORBIDDEN_CHARS,
            Strictness::Permissive => PERMISSIVE_FORBIDDEN_CHARS,
        }
    }

    /// Checks `name` against every rule and returns the first one it breaks.
    pub fn check(&self, name: &str) -> Result<(), Rejection> {
        let result = self.evaluate(name);
        if let Err(rejection) = &result {
            tracing::debug!(candidate = name, %rejection, "Rejected domain name");
        }
        result
    }

    fn evaluate(&self, name: &str) -> Result<(), Rejection> {
        if name.trim().len() < name.len() {
            return Err(Rejection::SurroundingWhitespace);
        }

        if name.parse::<IpAddr>().is_ok() {
            return Err(Rejection::IpLiteral);
        }

        // Only a single leading marker is removed; any other '*' is forbidden.
        let stem = name.strip_prefix(WILDCARD_PREFIX).unwrap_or(name);

        if let Some(c) = stem.chars().find(|c| self.forbidden_chars().contains(c)) {
            return Err(Rejection::ForbiddenChar(c));
        }

        if stem.contains(' ') {
            return Err(Rejection::EmbeddedSpace);
        }

        let labels: Vec<&str> = stem.split(LABEL_SEPARATOR).collect();
        if labels.len() < MIN_LABELS {
            return Err(Rejection::TooFewLabels(labels.len()));
        }

        for label in labels {
            if label.trim().len() < label.len() {
                return Err(Rejection::WhitespaceInLabel);
            }
            if label.is_empty() {
                return Err(Rejection::EmptyLabel);
            }
            if label.starts_with(LABEL_EDGE_FORBIDDEN) || label.ends_with(LABEL_EDGE_FORBIDDEN) {
                return Err(Rejection::HyphenAtLabelEdge(label.to_string()));
            }
        }

        if let Some(c) = stem.chars().find(|c| !is_printable(*c)) {
            return Err(Rejection::NonPrintable(c));
        }

        Ok(())
    }

    pub fn valid(&self, name: &str) -> bool {
        self.check(name).is_ok()
    }

    /// True for a valid name that begins with the wildcard marker.
    pub fn valid_wildcard(&self, name: &str) -> bool {
        name.starts_with(WILDCARD_PREFIX) && self.valid(name)
    }

    /// Borrowed form of [`RuleSet::stem_domain`]; `None` for invalid input.
    pub fn stem<'a>(&self, name: &'a str) -> Option<&'a str> {
        self.check(name).ok()?;
        Some(name.strip_prefix(WILDCARD_PREFIX).unwrap_or(name))
    }

    /// Returns `name` without its wildcard marker, or an empty string if
    /// `name` is not valid.
    pub fn stem_domain(&self, name: &str) -> String {
        self.stem(name).unwrap_or_default().to_string()
    }
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
pub(crate) fn is_printable(c: char) -> bool {
    use GeneralCategory::*;

    if c == ' ' {
        return true;
    }
    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | NonspacingMark
            | SpacingMark
            | EnclosingMark
            | DecimalNumber
            | LetterNumber
            | OtherNumber
            | ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictness_from_str() {
        assert_eq!(Strictness::try_from("strict"), Ok(Strictness::Strict));
        assert_eq!(
            Strictness::try_from("permissive"),
            Ok(Strictness::Permissive)
        );
        assert_eq!(
            Strictness::try_from("lenient"),
            Err("Strictness lenient not supported".to_string())
        );
    }

    #[test]
    fn test_strictness_to_string() {
        assert_eq!(Strictness::Strict.to_string(), "strict");
        assert_eq!(Strictness::Permissive.to_string(), "permissive");
    }

    #[test]
    fn test_rule_set_default_is_strict() {
        assert_eq!(RuleSet::default(), RuleSet::strict());
        assert_eq!(RuleSet::default().forbidden_chars(), STRICT_FORBIDDEN_CHARS);
    }

    #[test]
    fn test_check_reports_first_failing_rule() {
        let rules = RuleSet::strict();
        assert_eq!(
            rules.check(" example.com"),
            Err(Rejection::SurroundingWhitespace)
        );
        assert_eq!(
            rules.check("example.com\n"),
            Err(Rejection::SurroundingWhitespace)
        );
        assert_eq!(rules.check("192.168.0.1"), Err(Rejection::IpLiteral));
        assert_eq!(rules.check("::1"), Err(Rejection::IpLiteral));
        assert_eq!(rules.check("2001:db8::ff00:42:8329"), Err(Rejection::IpLiteral));
        assert_eq!(
            rules.check("bad.*.example.com"),
            Err(Rejection::ForbiddenChar('*'))
        );
        assert_eq!(
            rules.check("under_score.com"),
            Err(Rejection::ForbiddenChar('_'))
        );
        assert_eq!(rules.check("ex ample.com"), Err(Rejection::EmbeddedSpace));
        assert_eq!(rules.check("com"), Err(Rejection::TooFewLabels(1)));
        assert_eq!(rules.check("*."), Err(Rejection::TooFewLabels(1)));
        assert_eq!(
            rules.check("tab\t.example.com"),
            Err(Rejection::WhitespaceInLabel)
        );
        assert_eq!(rules.check("..invalid"), Err(Rejection::EmptyLabel));
        assert_eq!(
            rules.check("*.-bad-example.com"),
            Err(Rejection::HyphenAtLabelEdge("-bad-example".to_string()))
        );
        assert_eq!(
            rules.check("zero\u{200B}width.com"),
            Err(Rejection::NonPrintable('\u{200B}'))
        );
    }

    #[test]
    fn test_bare_star_is_never_stripped() {
        let rules = RuleSet::strict();
        assert_eq!(rules.check("*"), Err(Rejection::ForbiddenChar('*')));
        assert_eq!(
            rules.check("*.*.example.com"),
            Err(Rejection::ForbiddenChar('*'))
        );
    }

    #[test]
    fn test_permissive_rules_allow_punctuation() {
        let rules = RuleSet::permissive();
        assert!(rules.valid("under_score.example.com"));
        assert!(rules.valid("*.tilde~name.example.com"));
        assert!(!rules.valid("user@example.com"));
        assert!(!rules.valid("bad.*.example.com"));
        assert!(!RuleSet::strict().valid("under_score.example.com"));
    }

    #[test]
    fn test_permissive_rules_keep_structural_checks() {
        let rules = RuleSet::permissive();
        assert!(!rules.valid("com"));
        assert!(!rules.valid("10.0.0.1"));
        assert!(!rules.valid("a..b"));
        assert!(!rules.valid("-a.b"));
    }

    #[test]
    fn test_stem() {
        let rules = RuleSet::strict();
        assert_eq!(rules.stem("*.good.example.com"), Some("good.example.com"));
        assert_eq!(rules.stem("good.example.com"), Some("good.example.com"));
        assert_eq!(rules.stem("*.com"), None);
        assert_eq!(rules.stem_domain("*.com"), "");
    }

    #[test]
    fn test_is_printable() {
        assert!(is_printable('a'));
        assert!(is_printable(' '));
        assert!(is_printable('ф'));
        assert!(is_printable('随'));
        assert!(!is_printable('\u{0007}'));
        assert!(!is_printable('\u{0085}'));
        assert!(!is_printable('\u{00A0}'));
        assert!(!is_printable('\u{FEFF}'));
        assert!(!is_printable('\u{E000}'));
        assert!(!is_printable('\u{2003}'));
    }

    #[test]
    fn test_unassigned_code_points_are_not_printable() {
        for c in ['\u{0378}', '\u{D7FC}', '\u{E0000}', '\u{1FFFE}', '\u{2FFFF}'] {
            assert!(!is_printable(c), "{c:?}");
            assert_eq!(
                RuleSet::strict().check(&format!("a{c}b.com")),
                Err(Rejection::NonPrintable(c))
            );
        }
    }

    #[test]
    fn test_noncharacters_are_not_printable() {
        for c in '\u{FDD0}'..='\u{FDEF}' {
            assert!(!is_printable(c), "{c:?}");
            assert!(!RuleSet::strict().valid(&format!("a{c}b.com")));
        }
        assert!(!is_printable('\u{FFFE}'));
        assert!(!is_printable('\u{FFFF}'));
    }

    #[test]
    fn test_strictness_as_toml_value() {
        #[derive(Deserialize, Serialize)]
        struct Wrapper {
            strictness: Strictness,
        }

        let wrapper: Wrapper = toml::from_str(r#"strictness = "permissive""#).unwrap();
        assert_eq!(wrapper.strictness, Strictness::Permissive);
        assert_eq!(
            toml::to_string(&wrapper).unwrap().trim(),
            r#"strictness = "permissive""#
        );
        assert!(toml::from_str::<Wrapper>(r#"strictness = "lenient""#).is_err());
    }
}
