use super::*;

fn user(role: Role) -> UserProfile {
    UserProfile { id: "7".to_owned(), email: "a@b.com".to_owned(), role }
}

fn cv() -> CvFile {
    CvFile { file_name: "cv.pdf".to_owned(), content_type: "application/pdf".to_owned(), bytes: vec![1, 2, 3] }
}

fn filled() -> ApplyInput {
    ApplyInput {
        full_name: " Ada Lovelace ".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: "   ".to_owned(),
        cover_letter: "Hello".to_owned(),
    }
}

#[test]
fn anonymous_user_is_asked_to_login() {
    assert_eq!(validate_application(None, &filled(), Some(cv())), Err("Please login to apply"));
}

#[test]
fn hiring_manager_cannot_apply() {
    assert_eq!(
        validate_application(Some(&user(Role::HiringManager)), &filled(), Some(cv())),
        Err("Only applicants can apply to jobs. Please login with an applicant account.")
    );
}

#[test]
fn name_and_email_are_checked_before_cv() {
    let input = ApplyInput { full_name: "  ".to_owned(), ..filled() };
    assert_eq!(
        validate_application(Some(&user(Role::Applicant)), &input, None),
        Err("Full name and email are required.")
    );
    assert_eq!(
        validate_application(Some(&user(Role::Applicant)), &filled(), None),
        Err("Please attach a CV to apply.")
    );
}

#[test]
fn valid_input_is_trimmed_and_blank_optionals_dropped() {
    let form = validate_application(Some(&user(Role::Applicant)), &filled(), Some(cv())).unwrap();
    assert_eq!(form.full_name, "Ada Lovelace");
    assert_eq!(form.phone, None);
    assert_eq!(form.cover_letter.as_deref(), Some("Hello"));
    assert_eq!(form.cv.file_name, "cv.pdf");
}

#[test]
fn cv_read_started_before_removal_is_stale() {
    let picked = CvTicket::default().next();
    let removed = picked.next();
    assert!(picked.is_latest(picked));
    assert!(!picked.is_latest(removed));
}

#[test]
fn cv_ticket_wraps_without_overflow() {
    let last = CvTicket(u32::MAX);
    assert_eq!(last.next(), CvTicket(0));
    assert!(!last.is_latest(last.next()));
}
