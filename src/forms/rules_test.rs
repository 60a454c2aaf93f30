use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_common_addresses() {
    assert!(is_email("ada@example.com"));
    assert!(is_email("first.last+tag@mail.example.co.uk"));
    assert!(is_email("o'brien@example.ie"));
}

#[test]
fn email_rejects_missing_parts() {
    assert!(!is_email(""));
    assert!(!is_email("ada"));
    assert!(!is_email("ada@"));
    assert!(!is_email("@example.com"));
    assert!(!is_email("ada@example"));
}

#[test]
fn email_rejects_dot_placement() {
    assert!(!is_email(".ada@example.com"));
    assert!(!is_email("ada..lovelace@example.com"));
    assert!(!is_email("ada.@example.com"));
    assert!(!is_email("ada@example..com"));
}

#[test]
fn email_rejects_numeric_tld_and_spaces() {
    assert!(!is_email("ada@example.c0m"));
    assert!(!is_email("ada lovelace@example.com"));
    assert!(!is_email(" ada@example.com"));
}

// =============================================================
// Url
// =============================================================

#[test]
fn url_requires_scheme() {
    assert!(is_url("https://cdn.example.com/a.png"));
    assert!(!is_url("cdn.example.com/a.png"));
    assert!(!is_url(""));
}

// =============================================================
// Password strength
// =============================================================

#[test]
fn strong_password_has_no_failures() {
    assert!(password_strength_failures("Str0ng!pw").is_empty());
}

#[test]
fn short_password_reports_length_only_when_classes_present() {
    assert_eq!(password_strength_failures("Ab1!"), vec![PASSWORD_TOO_SHORT]);
}

#[test]
fn each_missing_class_reports_its_own_message() {
    assert_eq!(password_strength_failures("STRONG1!PW"), vec![PASSWORD_NEEDS_LOWERCASE]);
    assert_eq!(password_strength_failures("strong1!pw"), vec![PASSWORD_NEEDS_UPPERCASE]);
    assert_eq!(password_strength_failures("Strong!pw"), vec![PASSWORD_NEEDS_DIGIT]);
    assert_eq!(password_strength_failures("Strong1pw"), vec![PASSWORD_NEEDS_SYMBOL]);
}

#[test]
fn symbol_outside_allowed_set_does_not_count() {
    assert_eq!(password_strength_failures("Strong1#pw"), vec![PASSWORD_NEEDS_SYMBOL]);
}

#[test]
fn empty_password_fails_every_rule_in_order() {
    assert_eq!(
        password_strength_failures(""),
        vec![
            PASSWORD_TOO_SHORT,
            PASSWORD_NEEDS_LOWERCASE,
            PASSWORD_NEEDS_UPPERCASE,
            PASSWORD_NEEDS_DIGIT,
            PASSWORD_NEEDS_SYMBOL,
        ]
    );
}

#[test]
fn length_counts_characters_not_bytes() {
    // Seven characters, more than eight bytes.
    assert!(password_strength_failures("Aé1!ééé").contains(&PASSWORD_TOO_SHORT));
    assert!(!password_strength_failures("Aé1!éééé").contains(&PASSWORD_TOO_SHORT));
}
