//! Host text and formatting utilities consumed by the markup interpreter.
//!
//! Splitting, pattern tests and slugs are implemented locally. ASCII folding,
//! word casing and locale-aware date/number formatting need host facilities
//! and go through a [`HostFormatter`].

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::error::{ComponentError, ComponentResult};
use crate::style::TriState;

/// Substitute for a value the host could not format
pub const FORMAT_FAILURE: &str = "?";

static SLUG_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}0-9]+").expect("invalid slug regex"));

// =============================================================================
// Host formatter
// =============================================================================

/// Failure reported by a [`HostFormatter`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostFormatError {
    #[error("invalid locale")]
    InvalidLocale,
    #[error("invalid time zone")]
    InvalidTimeZone,
    #[error("invalid rounding mode")]
    InvalidRoundingMode,
    #[error("{0}")]
    Other(String),
}

impl HostFormatError {
    fn warning(&self) -> Option<FormatWarning> {
        match self {
            Self::InvalidLocale => Some(FormatWarning::InvalidLocale),
            Self::InvalidTimeZone => Some(FormatWarning::InvalidTimeZone),
            Self::InvalidRoundingMode => Some(FormatWarning::InvalidRoundingMode),
            Self::Other(_) => None,
        }
    }
}

/// Locale facilities provided by the host
pub trait HostFormatter {
    /// Strip diacritics
    fn asciify(&self, input: &str) -> String;

    /// Uppercase the first character of every word and lowercase the rest.
    ///
    /// Hosts with a word segmenter should override this. The default keeps
    /// apostrophes, periods and colons between two letters or digits inside
    /// the word, as Unicode word boundaries do.
    fn to_title_case(&self, input: &str) -> String {
        title_case_words(input)
    }

    fn format_date(
        &self,
        format: &str,
        locale: Option<&str>,
        time_zone: Option<&str>,
        timestamp: i64,
    ) -> Result<String, HostFormatError>;

    fn format_number(
        &self,
        format: &str,
        rounding_mode: Option<&str>,
        locale: Option<&str>,
        number: f64,
    ) -> Result<String, HostFormatError>;
}

/// Argument that was dropped after the host rejected it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatWarning {
    InvalidLocale,
    InvalidTimeZone,
    InvalidRoundingMode,
}

/// Warnings collected over one interpretation run
pub type FormatWarnings = FxHashSet<FormatWarning>;

// =============================================================================
// InterpretationPlatform
// =============================================================================

/// Text utilities the interpreter calls while evaluating expressions
pub trait InterpretationPlatform {
    /// Split by a plain or regex delimiter; `None` if the regex is invalid
    fn split(&self, input: &str, delimiter: &str, regex: bool) -> Option<Vec<String>>;

    /// Test `input` against a regex; `Unset` if the regex is invalid
    fn matches_pattern(&self, input: &str, pattern: &str) -> TriState;

    fn asciify(&self, input: &str) -> String;

    fn slugify(&self, input: &str) -> String;

    fn to_title_case(&self, input: &str) -> String;

    /// Format a timestamp, dropping arguments the host rejects.
    ///
    /// Falls back to [`FORMAT_FAILURE`] when a warning repeats or the host
    /// fails for another reason.
    fn format_date(
        &self,
        format: &str,
        locale: Option<&str>,
        time_zone: Option<&str>,
        timestamp: i64,
        warnings: &mut FormatWarnings,
    ) -> String;

    /// Format a number, with the same retry rules as
    /// [`InterpretationPlatform::format_date`]
    fn format_number(
        &self,
        format: &str,
        rounding_mode: Option<&str>,
        locale: Option<&str>,
        number: f64,
        warnings: &mut FormatWarnings,
    ) -> String;
}

/// [`InterpretationPlatform`] backed by a host formatter
#[derive(Debug, Clone, Default)]
pub struct HostPlatform<F> {
    formatter: F,
}

impl<F: HostFormatter> HostPlatform<F> {
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// [`InterpretationPlatform::split`] that reports why a pattern failed
    pub fn try_split(&self, input: &str, delimiter: &str, regex: bool) -> ComponentResult<Vec<String>> {
        if !regex {
            return Ok(split_plain(input, delimiter));
        }

        Ok(split_regex(input, &compile(delimiter)?))
    }

    /// [`InterpretationPlatform::matches_pattern`] that reports why a pattern failed
    pub fn try_matches(&self, input: &str, pattern: &str) -> ComponentResult<bool> {
        Ok(compile(pattern)?.is_match(input))
    }
}

fn compile(pattern: &str) -> ComponentResult<Regex> {
    Regex::new(pattern).map_err(|err| ComponentError::invalid_pattern(pattern, err))
}

/// Split on a literal delimiter; an empty delimiter yields single characters
fn split_plain(input: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return input.chars().map(String::from).collect();
    }
    input.split(delimiter).map(str::to_string).collect()
}

/// Split on regex matches, interleaving captured groups between the pieces.
///
/// Groups that did not participate yield empty strings. Empty matches at the
/// start and end of the input do not split.
fn split_regex(input: &str, re: &Regex) -> Vec<String> {
    if input.is_empty() {
        return if re.is_match(input) { Vec::new() } else { vec![String::new()] };
    }

    let mut parts = Vec::new();
    let mut last = 0;

    for caps in re.captures_iter(input) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.is_empty() && (whole.start() == last || whole.end() == input.len()) {
            continue;
        }

        parts.push(input[last..whole.start()].to_string());
        parts.extend(
            caps.iter()
                .skip(1)
                .map(|group| group.map_or_else(String::new, |g| g.as_str().to_string())),
        );
        last = whole.end();
    }

    parts.push(input[last..].to_string());
    parts
}

/// Characters that stay inside a word when surrounded by letters or digits
fn is_mid_word(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '.' | ':' | '\u{00B7}')
}

fn title_case_words(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len());
    let mut in_word = false;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            if in_word {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            in_word = true;
            continue;
        }

        let joins = in_word
            && is_mid_word(c)
            && chars.get(i + 1).is_some_and(|next| next.is_alphanumeric());
        result.push(c);
        in_word = joins;
    }

    result
}

/// Record `err` as a warning; `false` if it cannot be retried
fn record_warning(err: &HostFormatError, warnings: &mut FormatWarnings) -> bool {
    match err.warning() {
        Some(warning) => warnings.insert(warning),
        None => {
            tracing::debug!(%err, "host formatter failed");
            false
        }
    }
}

impl<F: HostFormatter> InterpretationPlatform for HostPlatform<F> {
    fn split(&self, input: &str, delimiter: &str, regex: bool) -> Option<Vec<String>> {
        self.try_split(input, delimiter, regex)
            .inspect_err(|err| tracing::debug!(%err, "split failed"))
            .ok()
    }

    fn matches_pattern(&self, input: &str, pattern: &str) -> TriState {
        match self.try_matches(input, pattern) {
            Ok(matched) => matched.into(),
            Err(err) => {
                tracing::debug!(%err, "pattern test failed");
                TriState::Unset
            }
        }
    }

    fn asciify(&self, input: &str) -> String {
        self.formatter.asciify(input)
    }

    fn slugify(&self, input: &str) -> String {
        SLUG_SEPARATORS
            .replace_all(input, "-")
            .trim_matches('-')
            .to_lowercase()
    }

    fn to_title_case(&self, input: &str) -> String {
        self.formatter.to_title_case(input)
    }

    fn format_date(
        &self,
        format: &str,
        locale: Option<&str>,
        time_zone: Option<&str>,
        timestamp: i64,
        warnings: &mut FormatWarnings,
    ) -> String {
        loop {
            let locale = locale.filter(|_| !warnings.contains(&FormatWarning::InvalidLocale));
            let time_zone = time_zone.filter(|_| !warnings.contains(&FormatWarning::InvalidTimeZone));

            match self.formatter.format_date(format, locale, time_zone, timestamp) {
                Ok(formatted) => return formatted,
                Err(err) if record_warning(&err, warnings) => continue,
                Err(_) => return FORMAT_FAILURE.to_string(),
            }
        }
    }

    fn format_number(
        &self,
        format: &str,
        rounding_mode: Option<&str>,
        locale: Option<&str>,
        number: f64,
        warnings: &mut FormatWarnings,
    ) -> String {
        loop {
            let locale = locale.filter(|_| !warnings.contains(&FormatWarning::InvalidLocale));
            let rounding_mode =
                rounding_mode.filter(|_| !warnings.contains(&FormatWarning::InvalidRoundingMode));

            match self.formatter.format_number(format, rounding_mode, locale, number) {
                Ok(formatted) => return formatted,
                Err(err) if record_warning(&err, warnings) => continue,
                Err(_) => return FORMAT_FAILURE.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Rejects the `xx` locale, the `Mars/Base` zone and the `sideways`
    /// rounding mode, counting calls
    #[derive(Default)]
    struct FakeFormatter {
        calls: Cell<u32>,
    }

    impl HostFormatter for FakeFormatter {
        fn asciify(&self, input: &str) -> String {
            input.replace('é', "e")
        }

        fn format_date(
            &self,
            format: &str,
            locale: Option<&str>,
            time_zone: Option<&str>,
            timestamp: i64,
        ) -> Result<String, HostFormatError> {
            self.calls.set(self.calls.get() + 1);
            match (locale, time_zone) {
                (Some("xx"), _) => Err(HostFormatError::InvalidLocale),
                (_, Some("Mars/Base")) => Err(HostFormatError::InvalidTimeZone),
                _ if format == "broken" => Err(HostFormatError::Other("bad format".into())),
                _ => Ok(format!("{format}@{timestamp}:{locale:?}:{time_zone:?}")),
            }
        }

        fn format_number(
            &self,
            format: &str,
            rounding_mode: Option<&str>,
            locale: Option<&str>,
            number: f64,
        ) -> Result<String, HostFormatError> {
            self.calls.set(self.calls.get() + 1);
            match (rounding_mode, locale) {
                (Some("sideways"), _) => Err(HostFormatError::InvalidRoundingMode),
                (_, Some("xx")) => Err(HostFormatError::InvalidLocale),
                _ => Ok(format!("{format}:{number}:{rounding_mode:?}:{locale:?}")),
            }
        }
    }

    fn platform() -> HostPlatform<FakeFormatter> {
        HostPlatform::new(FakeFormatter::default())
    }

    #[test]
    fn test_plain_split() {
        let p = platform();
        assert_eq!(p.split("a,b,,c", ",", false).unwrap(), vec!["a", "b", "", "c"]);
        assert_eq!(p.split("abc", "", false).unwrap(), vec!["a", "b", "c"]);
        assert_eq!(p.split("a.b", ".", false).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_regex_split() {
        let p = platform();
        assert_eq!(p.split("a1b22c", r"\d+", true).unwrap(), vec!["a", "b", "c"]);
        assert_eq!(p.split("abc", "(", true), None);
        assert_eq!(p.split("", ",", true).unwrap(), vec![""]);
        assert!(matches!(
            p.try_split("abc", "(", true),
            Err(ComponentError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_regex_split_keeps_captures() {
        let p = platform();
        assert_eq!(p.try_split("a1b", r"(\d)", true).unwrap(), vec!["a", "1", "b"]);
        assert_eq!(
            p.try_split("a1b-c", r"(\d)|(-)", true).unwrap(),
            vec!["a", "1", "", "b", "", "-", "c"]
        );
        assert_eq!(p.try_split("abc", "", true).unwrap(), vec!["a", "b", "c"]);
        assert!(p.try_split("", "", true).unwrap().is_empty());
    }

    #[test]
    fn test_matches_pattern() {
        let p = platform();
        assert_eq!(p.matches_pattern("hello", "^h.*o$"), TriState::True);
        assert_eq!(p.matches_pattern("hello", "^x"), TriState::False);
        assert_eq!(p.matches_pattern("hello", "[a-"), TriState::Unset);
    }

    #[test]
    fn test_slugify() {
        let p = platform();
        assert_eq!(p.slugify("  Hello, World! 2024 "), "hello-world-2024");
        assert_eq!(p.slugify("Über Straße"), "über-straße");
        assert_eq!(p.slugify("---"), "");
    }

    #[test]
    fn test_title_case() {
        let p = platform();
        assert_eq!(p.to_title_case("hello wORLD"), "Hello World");
        assert_eq!(p.to_title_case("red-stone dust"), "Red-Stone Dust");
        assert_eq!(p.to_title_case(""), "");
    }

    #[test]
    fn test_title_case_keeps_mid_word_punctuation() {
        let p = platform();
        assert_eq!(p.to_title_case("don't stop"), "Don't Stop");
        assert_eq!(p.to_title_case("rock\u{2019}n\u{2019}roll"), "Rock\u{2019}n\u{2019}roll");
        assert_eq!(p.to_title_case("v1.2 released"), "V1.2 Released");
        assert_eq!(p.to_title_case("'quoted' words."), "'Quoted' Words.");
    }

    #[test]
    fn test_title_case_uses_host_override() {
        struct ShoutingFormatter;

        impl HostFormatter for ShoutingFormatter {
            fn asciify(&self, input: &str) -> String {
                input.to_string()
            }

            fn to_title_case(&self, input: &str) -> String {
                input.to_uppercase()
            }

            fn format_date(
                &self,
                _format: &str,
                _locale: Option<&str>,
                _time_zone: Option<&str>,
                _timestamp: i64,
            ) -> Result<String, HostFormatError> {
                Err(HostFormatError::Other("unused".into()))
            }

            fn format_number(
                &self,
                _format: &str,
                _rounding_mode: Option<&str>,
                _locale: Option<&str>,
                _number: f64,
            ) -> Result<String, HostFormatError> {
                Err(HostFormatError::Other("unused".into()))
            }
        }

        let p = HostPlatform::new(ShoutingFormatter);
        assert_eq!(p.to_title_case("don't stop"), "DON'T STOP");
    }

    #[test]
    fn test_asciify_delegates() {
        assert_eq!(platform().asciify("café"), "cafe");
    }

    #[test]
    fn test_format_date_drops_rejected_arguments() {
        let p = platform();
        let mut warnings = FormatWarnings::default();

        let formatted = p.format_date("d", Some("xx"), Some("Mars/Base"), 5, &mut warnings);
        assert_eq!(formatted, "d@5:None:None");
        assert!(warnings.contains(&FormatWarning::InvalidLocale));
        assert!(warnings.contains(&FormatWarning::InvalidTimeZone));
        assert_eq!(p.formatter().calls.get(), 3);

        // Known warnings are applied up front
        let formatted = p.format_date("d", Some("xx"), Some("UTC"), 5, &mut warnings);
        assert_eq!(formatted, "d@5:None:Some(\"UTC\")");
    }

    #[test]
    fn test_format_date_other_error() {
        let p = platform();
        let mut warnings = FormatWarnings::default();
        assert_eq!(p.format_date("broken", None, None, 0, &mut warnings), "?");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_format_number_retries() {
        let p = platform();
        let mut warnings = FormatWarnings::default();
        let formatted = p.format_number("#.#", Some("sideways"), Some("xx"), 1.5, &mut warnings);
        assert_eq!(formatted, "#.#:1.5:None:None");
        assert_eq!(warnings.len(), 2);
    }
}
