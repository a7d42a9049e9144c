/// End-to-end submission scenarios through the public API
use company_form::{
    validate_all, FieldName, Form, FormInput, FormRecord, FormState, MemorySink, ValidationResult,
};
use pretty_assertions::assert_eq;

#[test]
fn test_minimal_valid_submission_echoes_input() {
    let input = FormInput {
        name: Some("Acme".to_string()),
        company_type: Some(1),
        company_purpose: Some(1),
        client_phone_first: Some(String::new()),
        client_phone_second: Some(String::new()),
        client_email: Some(String::new()),
    };

    let mut form = Form::new();
    form.apply(input).unwrap();
    let mut sink = MemorySink::new();
    let result = form.submit(&mut sink);

    let expected = FormRecord {
        name: "Acme".to_string(),
        company_type: 1,
        company_purpose: 1,
        client_phone_first: String::new(),
        client_phone_second: String::new(),
        client_email: String::new(),
    };
    assert_eq!(result, ValidationResult::Valid(expected.clone()));
    assert_eq!(sink.records(), &[expected]);
    assert_eq!(form.state(), FormState::Submitted);
}

#[test]
fn test_placeholders_fail_required_fields_only() {
    let input = FormInput {
        name: Some(String::new()),
        company_type: Some(0),
        company_purpose: Some(0),
        client_phone_first: Some(String::new()),
        client_phone_second: Some(String::new()),
        client_email: Some(String::new()),
    };

    let mut form = Form::new();
    form.apply(input).unwrap();
    let mut sink = MemorySink::new();
    let result = form.submit(&mut sink);

    let errors = result.errors().expect("submission should fail");
    let failed: Vec<(FieldName, &str)> = errors.iter().collect();
    assert_eq!(
        failed,
        vec![
            (FieldName::Name, "Required"),
            (FieldName::CompanyType, "Required"),
            (FieldName::CompanyPurpose, "Required"),
        ]
    );
    assert!(result.record().is_none());
    assert!(sink.is_empty());
    assert!(form.submitted().is_none());
}

#[test]
fn test_bad_email_is_the_only_error() {
    let mut form = Form::new();
    form.set_text(FieldName::Name, "Acme").unwrap();
    form.select(FieldName::CompanyType, 3).unwrap();
    form.select(FieldName::CompanyPurpose, 4).unwrap();
    form.set_text(FieldName::ClientEmail, "bad-email").unwrap();

    let result = form.submit(&mut MemorySink::new());

    let errors = result.errors().expect("submission should fail");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(FieldName::ClientEmail), Some("Invalid format email"));
}

#[test]
fn test_untouched_optional_fields_normalize_to_empty() {
    let mut form = Form::new();
    form.set_text(FieldName::Name, "Acme").unwrap();
    form.select(FieldName::CompanyType, 2).unwrap();
    form.select(FieldName::CompanyPurpose, 3).unwrap();

    let result = form.submit(&mut MemorySink::new());
    let record = result.record().expect("submission should succeed");

    assert_eq!(record.client_phone_first, "");
    assert_eq!(record.client_phone_second, "");
    assert_eq!(record.client_email, "");
    assert_eq!(record.iter().count(), 6);
}

#[test]
fn test_untouched_form_reports_all_required_fields() {
    let result = validate_all(&FormInput::new());
    let errors = result.errors().expect("empty form should fail");
    let fields: Vec<FieldName> = errors.fields().collect();
    assert_eq!(
        fields,
        vec![FieldName::Name, FieldName::CompanyType, FieldName::CompanyPurpose]
    );
}

#[test]
fn test_every_failing_field_is_reported() {
    let input = FormInput {
        name: Some("x".repeat(101)),
        company_type: Some(7),
        company_purpose: Some(-1),
        client_phone_first: Some("12".to_string()),
        client_phone_second: Some("not a phone".to_string()),
        client_email: Some("nobody".to_string()),
    };

    let result = validate_all(&input);
    let errors = result.errors().expect("should fail");

    assert_eq!(errors.len(), 6);
    assert_eq!(errors.get(FieldName::Name), Some("Max 100 characters"));
    assert_eq!(errors.get(FieldName::CompanyType), Some("Required"));
    assert_eq!(errors.get(FieldName::CompanyPurpose), Some("Required"));
    assert_eq!(errors.get(FieldName::ClientPhoneFirst), Some("Invalid format phone number"));
    assert_eq!(errors.get(FieldName::ClientPhoneSecond), Some("Invalid format phone number"));
    assert_eq!(errors.get(FieldName::ClientEmail), Some("Invalid format email"));
}

#[test]
fn test_resubmission_produces_new_record_each_time() {
    let mut form = Form::new();
    let mut sink = MemorySink::new();
    form.set_text(FieldName::Name, "Acme").unwrap();
    form.select(FieldName::CompanyType, 1).unwrap();
    form.select(FieldName::CompanyPurpose, 1).unwrap();

    for _ in 0..3 {
        assert!(form.submit(&mut sink).is_valid());
    }
    assert_eq!(sink.len(), 3);
    assert_eq!(form.submit_count(), 3);
}
