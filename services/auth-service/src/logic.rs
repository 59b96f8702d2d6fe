use crate::models::AuthRequest;

const GMAIL_SUFFIX: &str = "@gmail.com";
const MIN_PASSWORD_LEN: usize = 8;

pub enum AuthOutcome {
    MalformedBody,
    MissingFields,
    InvalidEmail,
    InvalidPassword,
    Success,
}

/// Applies the credential format checks in fixed order, short-circuiting on
/// the first failure. Pure function of the two fields.
pub fn evaluate(request: &AuthRequest) -> AuthOutcome {
    let email = request.email.as_deref().unwrap_or("");
    let password = request.password.as_deref().unwrap_or("");

    if email.is_empty() || password.is_empty() {
        return AuthOutcome::MissingFields;
    }

    if !has_gmail_suffix(email) {
        return AuthOutcome::InvalidEmail;
    }

    if !meets_min_length(password) {
        return AuthOutcome::InvalidPassword;
    }

    AuthOutcome::Success
}

pub fn has_gmail_suffix(email: &str) -> bool {
    // The suffix must be preceded by at least one non-'@' character; anything
    // further left is not inspected.
    match email.strip_suffix(GMAIL_SUFFIX) {
        Some(local) => local.chars().next_back().is_some_and(|c| c != '@'),
        None => false,
    }
}

pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

impl AuthOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            AuthOutcome::MalformedBody => "Request must be a valid JSON.",
            AuthOutcome::MissingFields => "Email and password are required.",
            AuthOutcome::InvalidEmail => {
                "Invalid email format. Must be a valid @gmail.com address."
            }
            // Message kept verbatim even though the enforced rule is length
            // only, see DESIGN.md.
            AuthOutcome::InvalidPassword => "Invalid password format. Must be 8 digits.",
            AuthOutcome::Success => "Authentication successful",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthOutcome::MalformedBody => "malformed_body",
            AuthOutcome::MissingFields => "missing_fields",
            AuthOutcome::InvalidEmail => "invalid_email",
            AuthOutcome::InvalidPassword => "invalid_password",
            AuthOutcome::Success => "success",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, has_gmail_suffix, meets_min_length, AuthOutcome};
    use crate::models::AuthRequest;

    fn request(email: Option<&str>, password: Option<&str>) -> AuthRequest {
        AuthRequest {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn missing_or_empty_fields() {
        let cases = [
            request(None, None),
            request(Some("user@gmail.com"), None),
            request(None, Some("abcdefgh")),
            request(Some(""), Some("abcdefgh")),
            request(Some("user@gmail.com"), Some("")),
        ];
        for case in &cases {
            assert!(matches!(evaluate(case), AuthOutcome::MissingFields));
        }
    }

    #[test]
    fn rejects_non_gmail_address() {
        let result = evaluate(&request(Some("user@yahoo.com"), Some("abcdefgh")));
        assert!(matches!(result, AuthOutcome::InvalidEmail));
    }

    #[test]
    fn rejects_bare_suffix() {
        // "@gmail.com" with no local part fails the one-or-more requirement.
        assert!(!has_gmail_suffix("@gmail.com"));
        let result = evaluate(&request(Some("@gmail.com"), Some("abcdefgh")));
        assert!(matches!(result, AuthOutcome::InvalidEmail));
    }

    #[test]
    fn rejects_at_sign_directly_before_suffix() {
        assert!(!has_gmail_suffix("a@@gmail.com"));
    }

    #[test]
    fn tolerates_leading_content_before_match() {
        // Only the character directly before the suffix is constrained.
        assert!(has_gmail_suffix("a@b@gmail.com"));
        assert!(has_gmail_suffix("x@gmail.com@gmail.com"));
    }

    #[test]
    fn rejects_short_password() {
        let result = evaluate(&request(Some("user@gmail.com"), Some("1234567")));
        assert!(matches!(result, AuthOutcome::InvalidPassword));
    }

    #[test]
    fn password_length_counts_code_points() {
        assert!(meets_min_length("пароль78"));
        assert!(!meets_min_length("пароль7"));
    }

    #[test]
    fn accepts_valid_credentials() {
        let cases = [
            request(Some("user@gmail.com"), Some("abcdefgh")),
            request(Some("user@gmail.com"), Some("12345678")),
            request(Some("user@gmail.com"), Some("much longer than eight")),
        ];
        for case in &cases {
            assert!(matches!(evaluate(case), AuthOutcome::Success));
        }
    }

    #[test]
    fn evaluate_is_pure() {
        let case = request(Some("user@gmail.com"), Some("abcdefgh"));
        for _ in 0..3 {
            assert!(evaluate(&case).is_success());
        }
    }
}
