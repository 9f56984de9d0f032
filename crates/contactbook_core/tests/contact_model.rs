use contactbook_core::{Contact, ContactDraft, ContactValidationError};

#[test]
fn draft_new_keeps_fields_verbatim() {
    let draft = ContactDraft::new("Alice", 30, "alice@x.com");

    assert_eq!(draft.name, "Alice");
    assert_eq!(draft.age, 30);
    assert_eq!(draft.email, "alice@x.com");
    assert!(draft.validate().is_ok());
}

#[test]
fn validate_rejects_empty_name_and_email() {
    let no_name = ContactDraft::new("   ", 30, "alice@x.com");
    assert_eq!(
        no_name.validate().unwrap_err(),
        ContactValidationError::EmptyName
    );

    let no_email = ContactDraft::new("Alice", 30, "");
    assert_eq!(
        no_email.validate().unwrap_err(),
        ContactValidationError::EmptyEmail
    );
}

#[test]
fn validate_is_permissive_about_age_and_email_shape() {
    // Intentional minimalism: no age range check, no email format check.
    let odd_age = ContactDraft::new("Methuselah", 969, "m@x.com");
    assert!(odd_age.validate().is_ok());

    let negative_age = ContactDraft::new("Unborn", -1, "soon@x.com");
    assert!(negative_age.validate().is_ok());

    let odd_email = ContactDraft::new("Alice", 30, "not-an-email");
    assert!(odd_email.validate().is_ok());
}

#[test]
fn into_contact_attaches_storage_assigned_id() {
    let contact = ContactDraft::new("Alice", 30, "alice@x.com").into_contact(7);

    assert_eq!(contact.id, 7);
    assert_eq!(contact.name, "Alice");
    assert_eq!(contact.age, 30);
    assert_eq!(contact.email, "alice@x.com");
}

#[test]
fn contact_serialization_uses_expected_wire_fields() {
    let contact = Contact {
        id: 1,
        name: "Alice".to_string(),
        age: 30,
        email: "alice@x.com".to_string(),
    };

    let json = serde_json::to_value(&contact).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["age"], 30);
    assert_eq!(json["email"], "alice@x.com");

    let decoded: Contact = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, contact);
}
