use super::*;

#[test]
fn salary_edits_keep_digits_only() {
    assert_eq!(accept_salary_edit("500", "5000".to_owned()), "5000");
    assert_eq!(accept_salary_edit("500", "500k".to_owned()), "500");
    assert_eq!(accept_salary_edit("5", String::new()), "");
}

#[test]
fn validate_new_job_requires_text_fields() {
    assert_eq!(
        validate_new_job("Cook", "   ", "Paris", ""),
        Err("Please fill in title, description, and location.")
    );
}

#[test]
fn blank_salary_is_sent_as_null() {
    let job = validate_new_job(" Cook ", "Make food", "Paris", " ").unwrap();
    assert_eq!(job.title, "Cook");
    assert_eq!(job.salary, None);
    assert_eq!(serde_json::to_value(&job).unwrap()["salary"], serde_json::Value::Null);
    let paid = validate_new_job("Cook", "Make food", "Paris", "42000").unwrap();
    assert_eq!(paid.salary.as_deref(), Some("42000"));
}
