use super::*;

#[test]
fn learner_profile_matches_dashboard_figures() {
    let profile = learner_profile("Thandi");
    assert_eq!(profile.learner_name, "Thandi");
    assert_eq!(profile.subjects, vec!["Mathematics", "English Literature", "Biology", "History"]);
    assert_eq!(profile.weak_subjects, vec!["Mathematics", "Biology"]);
    assert_eq!(profile.current_marks, 72);
    assert_eq!(profile.target_marks, 82);
}

#[test]
fn learner_view_greets_and_tags_role() {
    let view = build(&SessionMarker::learner("Thandi"));
    assert_eq!(view.greeting, "Welcome back, Thandi!");
    assert_eq!(view.tagline, "Continue your personalized learning journey");

    let DashboardBody::Learner(body) = &view.body else {
        panic!("expected learner dashboard");
    };
    assert_eq!(body.learning_paths.len(), 4);
    assert_eq!(body.recommendations.len(), 3);
    assert_eq!(body.stats[0].value, "72%");
    assert_eq!(body.profile.learner_name, "Thandi");
}

#[test]
fn teacher_view_reports_subject() {
    let view = build(&SessionMarker::teacher("Sipho", "History"));
    assert_eq!(view.tagline, "Teaching History");

    let DashboardBody::Teacher(body) = &view.body else {
        panic!("expected teacher dashboard");
    };
    assert_eq!(body.subject, "History");
    assert_eq!(body.stats[0].value, "28");
    assert_eq!(body.uploaded_videos.len(), 2);
}

#[test]
fn teacher_without_subject_gets_blank_subject() {
    let marker = SessionMarker { user_type: UserType::Teacher, username: "Sipho".into(), subject: None };
    let view = build(&marker);
    assert_eq!(view.tagline, "Teaching ");
}

#[test]
fn view_serializes_with_flattened_role_tag() {
    let json = serde_json::to_value(build(&SessionMarker::teacher("Sipho", "Geography"))).unwrap();
    assert_eq!(json["user_type"], "teacher");
    assert_eq!(json["subject"], "Geography");
    assert_eq!(json["greeting"], "Welcome back, Sipho!");
    assert_eq!(json["uploaded_videos"][1]["views"], 203);
}
