use super::*;

#[test]
fn validate_register_input_builds_trimmed_request() {
    let req = validate_register_input(" carol ", " carol@example.com ", "pw", "pw").unwrap();
    assert_eq!(req.username, "carol");
    assert_eq!(req.email, "carol@example.com");
    assert_eq!(req.password, "pw");
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(validate_register_input("", "a@b.com", "pw", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_register_input("carol", "  ", "pw", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_register_input("carol", "a@b.com", "", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_register_input_rejects_email_without_at() {
    assert_eq!(validate_register_input("carol", "carol.example.com", "pw", "pw"), Err(INVALID_EMAIL));
}

#[test]
fn validate_register_input_requires_matching_confirmation() {
    assert_eq!(validate_register_input("carol", "a@b.com", "pw", "pw2"), Err(PASSWORD_MISMATCH));
}
