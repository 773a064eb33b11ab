use lazy_static::lazy_static;
use regex::Regex;

use crate::auth::dto::SignupRequest;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Collects every violation so the client can render all errors at once.
pub(crate) fn validate_signup(payload: &SignupRequest) -> Vec<String> {
    let mut errors = Vec::new();
    if payload.first_name.len() < 3 {
        errors.push("First name must be at least 3 chars long".to_string());
    }
    if payload.last_name.len() < 3 {
        errors.push("Last name must be at least 3 chars long".to_string());
    }
    if !is_valid_email(&payload.email) {
        errors.push("Invalid email".to_string());
    }
    if payload.password.len() < 6 {
        errors.push("Password must be at least 6 chars long".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> SignupRequest {
        SignupRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@x.com".into(),
            password: "secret1".into(),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(validate_signup(&valid_payload()).is_empty());
    }

    #[test]
    fn empty_payload_reports_every_violation() {
        let errors = validate_signup(&SignupRequest::default());
        assert_eq!(
            errors,
            vec![
                "First name must be at least 3 chars long",
                "Last name must be at least 3 chars long",
                "Invalid email",
                "Password must be at least 6 chars long",
            ]
        );
    }

    #[test]
    fn short_first_name_rejected() {
        let mut payload = valid_payload();
        payload.first_name = "Al".into();
        assert_eq!(
            validate_signup(&payload),
            vec!["First name must be at least 3 chars long"]
        );
    }

    #[test]
    fn short_last_name_rejected() {
        let mut payload = valid_payload();
        payload.last_name = "Wu".into();
        assert_eq!(
            validate_signup(&payload),
            vec!["Last name must be at least 3 chars long"]
        );
    }

    #[test]
    fn short_password_rejected() {
        let mut payload = valid_payload();
        payload.password = "12345".into();
        assert_eq!(
            validate_signup(&payload),
            vec!["Password must be at least 6 chars long"]
        );
    }

    #[test]
    fn email_syntax_enforced() {
        for bad in ["", "nope", "a@b", "a b@c.d", "@x.com"] {
            let mut payload = valid_payload();
            payload.email = bad.into();
            assert_eq!(validate_signup(&payload), vec!["Invalid email"], "{bad}");
        }
        assert!(is_valid_email("user.name@sub.example.org"));
    }
}
