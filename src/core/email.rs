use serde::{Deserialize, Serialize};

/// Result of the `local@domain.tld` shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailShape {
    Valid,
    Empty,
    MissingAt,
    MultipleAt,
    ContainsWhitespace,
    EmptyLocalPart,
    MissingDomainDot,
}

impl EmailShape {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

/// Whitespace as browser form scripts see it: Unicode `White_Space` minus
/// NEL (U+0085), plus the byte order mark (U+FEFF).
#[must_use]
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Strips leading and trailing [`is_form_whitespace`] characters.
#[must_use]
pub fn trim_form_value(input: &str) -> &str {
    input.trim_matches(is_form_whitespace)
}

/// Classifies `input` against `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// The input is checked as given; callers trim form values first.
#[must_use]
pub fn classify_email(input: &str) -> EmailShape {
    if input.is_empty() {
        return EmailShape::Empty;
    }
    if input.chars().any(is_form_whitespace) {
        return EmailShape::ContainsWhitespace;
    }

    let mut parts = input.split('@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return EmailShape::MissingAt;
    };
    if parts.next().is_some() {
        return EmailShape::MultipleAt;
    }
    if local.is_empty() {
        return EmailShape::EmptyLocalPart;
    }

    // The dot needs at least one character on each side; other dots may sit anywhere.
    let chars: Vec<char> = domain.chars().collect();
    let has_inner_dot = chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.');
    if !has_inner_dot {
        return EmailShape::MissingDomainDot;
    }

    EmailShape::Valid
}

#[must_use]
pub fn validate_email(input: &str) -> bool {
    classify_email(input).is_valid()
}
