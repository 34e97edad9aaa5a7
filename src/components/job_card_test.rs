use super::*;

fn job(has_applied: bool) -> Job {
    Job {
        id: "3f2a9c1e-0000-4000-8000-000000000000".to_owned(),
        title: "Cook".to_owned(),
        description: String::new(),
        location: None,
        salary: None,
        posted_at: None,
        has_applied,
    }
}

#[test]
fn hiring_manager_links_to_applications() {
    assert_eq!(
        job_action(Some(Role::HiringManager), &job(true)),
        JobAction::ViewApplications("/jobs/3f2a9c1e-0000-4000-8000-000000000000/applications".to_owned())
    );
}

#[test]
fn applicant_who_applied_links_to_existing_application() {
    assert_eq!(
        job_action(Some(Role::Applicant), &job(true)),
        JobAction::ViewMyApplication("/jobs/3f2a9c1e-0000-4000-8000-000000000000/application".to_owned())
    );
}

#[test]
fn applicant_who_has_not_applied_links_to_apply_form() {
    assert!(matches!(job_action(Some(Role::Applicant), &job(false)), JobAction::Apply(_)));
}

#[test]
fn short_id_truncates_to_eight_chars() {
    assert_eq!(short_id("3f2a9c1e-0000"), "3f2a9c1e");
    assert_eq!(short_id("12"), "12");
}
