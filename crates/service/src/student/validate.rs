use chrono::{NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

// Full-match patterns; the API has always required the whole field to match.
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+\d{2})? *\d{3} *\d{3} *\d{2} *\d{2}$").expect("phone pattern"));
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+@\w+\.\w+$").expect("email pattern"));

/// Check a candidate student and accumulate one message fragment per violated
/// rule. All five rules are evaluated; an empty string means the record is
/// valid. Message wording is part of the API contract and must not change.
pub fn check_student(
    first_name: &str,
    last_name: &str,
    birthday: NaiveDate,
    phone: &str,
    email: &str,
) -> String {
    let mut message = String::new();

    if !(3..=50).contains(&first_name.chars().count()) {
        message.push_str("Students first name don't situated between 3..50, ");
    }
    if !(3..=50).contains(&last_name.chars().count()) {
        message.push_str("Students last name don't situated between 3..50, ");
    }
    // A birthday equal to the current date is rejected as well.
    if birthday >= Utc::now().date_naive() {
        message.push_str("Student has a wrong birthday, ");
    }
    if !PHONE.is_match(phone) {
        message.push_str("Student has a wrong phone, ");
    }
    if !EMAIL.is_match(email) {
        message.push_str("Student has a wrong email");
    }

    if !message.is_empty() {
        tracing::debug!(%message, "student validation failed");
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn valid_record_produces_empty_message() {
        let msg = check_student("Alice", "Smith", date(2000, 1, 1), "+38 099 123 45 67", "a@b.co");
        assert_eq!(msg, "");
    }

    #[test]
    fn phone_without_country_code_is_valid() {
        let msg = check_student("Alice", "Smith", date(2000, 1, 1), "099 123 45 67", "a@b.co");
        assert_eq!(msg, "");
    }

    #[test]
    fn short_first_name_is_the_only_violation() {
        let msg = check_student("Al", "Smith", date(2000, 1, 1), "+38 099 123 45 67", "a@b.co");
        assert_eq!(msg, "Students first name don't situated between 3..50, ");
    }

    #[test]
    fn long_last_name_is_rejected() {
        let long = "x".repeat(51);
        let msg = check_student("Alice", &long, date(2000, 1, 1), "099 123 45 67", "a@b.co");
        assert_eq!(msg, "Students last name don't situated between 3..50, ");
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        let three = "abc";
        let fifty = "y".repeat(50);
        let msg = check_student(three, &fifty, date(2000, 1, 1), "099 123 45 67", "a@b.co");
        assert_eq!(msg, "");
    }

    #[test]
    fn future_birthday_is_the_only_violation() {
        let msg = check_student("Alice", "Smith", date(2999, 1, 1), "099 123 45 67", "a@b.co");
        assert_eq!(msg, "Student has a wrong birthday, ");
    }

    #[test]
    fn birthday_today_is_rejected() {
        let today = Utc::now().date_naive();
        let msg = check_student("Alice", "Smith", today, "099 123 45 67", "a@b.co");
        assert_eq!(msg, "Student has a wrong birthday, ");
    }

    #[test]
    fn malformed_phone_is_the_only_violation() {
        let msg = check_student("Alice", "Smith", date(2000, 1, 1), "12345", "a@b.co");
        assert_eq!(msg, "Student has a wrong phone, ");
    }

    #[test]
    fn phone_must_match_entirely() {
        // Trailing garbage after an otherwise valid number.
        let msg = check_student("Alice", "Smith", date(2000, 1, 1), "099 123 45 67 x", "a@b.co");
        assert_eq!(msg, "Student has a wrong phone, ");
    }

    #[test]
    fn malformed_email_is_the_only_violation() {
        let msg = check_student("Alice", "Smith", date(2000, 1, 1), "099 123 45 67", "not-an-email");
        assert_eq!(msg, "Student has a wrong email");
    }

    #[test]
    fn all_five_rules_accumulate() {
        let msg = check_student("Al", "Ng", date(2999, 1, 1), "12", "nope");
        assert!(msg.contains("Students first name don't situated between 3..50, "));
        assert!(msg.contains("Students last name don't situated between 3..50, "));
        assert!(msg.contains("Student has a wrong birthday, "));
        assert!(msg.contains("Student has a wrong phone, "));
        assert!(msg.contains("Student has a wrong email"));
    }

    #[test]
    fn validation_is_idempotent() {
        let first = check_student("Al", "Smith", date(2999, 1, 1), "12", "a@b.co");
        let second = check_student("Al", "Smith", date(2999, 1, 1), "12", "a@b.co");
        assert_eq!(first, second);
    }
}
