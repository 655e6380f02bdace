//! Field-level validation predicates.
//!
//! These are pure checks with no side effects: a value either has the right
//! shape or the predicate returns `false`. The domain value types in
//! [`crate::domain`] build their guards on top of them.

use std::sync::LazyLock;

use regex::Regex;

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const MINIMUM_AGE: i64 = 18;
pub const MAXIMUM_AGE: i64 = 120;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Returns true if `email` has a `local@domain.tld` shape.
///
/// Neither part may contain whitespace or a second `@`, and the domain must
/// contain at least one dot. No DNS lookup is performed.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns true if `password` is at least [`PASSWORD_MIN_LENGTH`] characters
/// long and contains an uppercase letter, a lowercase letter, a digit and one
/// of [`SPECIAL_CHARACTERS`].
pub fn is_valid_password(password: &str) -> bool {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return false;
    }

    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARACTERS.contains(c));

    has_uppercase && has_lowercase && has_digit && has_special
}

/// Returns true if `age` lies within `18..=120`.
pub fn is_valid_age(age: i64) -> bool {
    (MINIMUM_AGE..=MAXIMUM_AGE).contains(&age)
}
