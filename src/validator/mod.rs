//! # Student Validator
//!
//! Pure field-level validation for candidate student records.
//!
//! `validate` never fails and performs no I/O: it maps a candidate to the
//! full list of violated rules, accumulating every error rather than
//! stopping at the first. An empty list means the candidate may be handed
//! to the store.

use std::sync::OnceLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;

use crate::store::StudentInput;

/// Minimum accepted age, inclusive.
const MIN_AGE: i32 = 5;
/// Maximum accepted age, inclusive.
const MAX_AGE: i32 = 100;

fn name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z\s-]{2,50}$").expect("valid regex"))
}

fn phone_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[5-9]\d{9}$").expect("valid regex"))
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("valid regex"))
}

/// Validates a candidate student against all field rules.
///
/// Returns one message per violated rule; an empty vector signals the
/// candidate is acceptable to attempt persisting. Uniqueness of phone and
/// email is not checked here; that is the store's responsibility.
pub fn validate(candidate: &StudentInput) -> Vec<String> {
    validate_at(candidate, Local::now().date_naive())
}

/// Validation core with an injectable "today", so age-boundary behavior
/// is testable without depending on the wall clock.
pub fn validate_at(candidate: &StudentInput, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();

    if !name_pattern().is_match(&candidate.first_name) {
        errors.push(
            "Invalid first name. It should be 2-50 characters long and contains only letters, spaces, or hyphens."
                .to_string(),
        );
    }

    if !name_pattern().is_match(&candidate.last_name) {
        errors.push(
            "Invalid last name. It should be 2-50 characters long and contains only letters, spaces, or hyphens."
                .to_string(),
        );
    }

    if !phone_pattern().is_match(&candidate.phone) {
        errors.push(
            "Invalid phone number. It should be 10 digits and start with 5,6,7,8 or 9.".to_string(),
        );
    }

    match NaiveDate::parse_from_str(&candidate.birthdate, "%Y-%m-%d") {
        Ok(birth) => {
            if birth > today || !(MIN_AGE..=MAX_AGE).contains(&age_on(birth, today)) {
                errors.push("Invalid birthdate (age must be 5-100)".to_string());
            }
        }
        Err(_) => {
            errors.push("Invalid birthdate format (YYYY-MM-DD)".to_string());
        }
    }

    if !email_pattern().is_match(&candidate.email) {
        errors.push("Invalid email format".to_string());
    }

    errors
}

/// Age in whole years as of `today`.
///
/// Explicit month/day comparison: the year difference is reduced by one
/// when the birthday has not yet occurred this year. Never computed via
/// float year division.
fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
