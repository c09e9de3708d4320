
use portfolio_admin::entities::RecordCategory;
use portfolio_admin::entities::contact_message::{InquiryKind, SenderRole};
use portfolio_admin::errors::AppError;
use portfolio_admin::repositories::records::RecordStore;
use portfolio_admin::use_cases::dashboard::{Confirmation, message_priority};
use test_utils::{TestApp, at_hour, sample_message};

#[test]
fn overview_counts_reflect_every_partition() {
    let app = TestApp::spawn();
    app.store
        .append_message(&sample_message("m1", "Ada", SenderRole::Other, InquiryKind::Connect, at_hour(9)))
        .unwrap();

    let counts = app.dashboard.overview().unwrap();
    assert_eq!(counts.projects, 3);
    assert_eq!(counts.certs, 3);
    assert_eq!(counts.blogs, 3);
    assert_eq!(counts.messages, 1);
}

#[test]
fn inbox_sorts_by_priority_then_recency() {
    let app = TestApp::spawn();
    // M1: no boost, submitted at T1.
    // M2: role boost (+2), submitted earlier at T0.
    // M3: inquiry boost (+1), submitted latest at T2.
    let m1 = sample_message("m1", "Mallory", SenderRole::Other, InquiryKind::Connect, at_hour(10));
    let m2 = sample_message("m2", "Frida", SenderRole::Founder, InquiryKind::Connect, at_hour(9));
    let m3 = sample_message("m3", "Oscar", SenderRole::Other, InquiryKind::JobOffer, at_hour(11));

    for msg in [&m1, &m2, &m3] {
        app.store.append_message(msg).unwrap();
    }

    let sorted = app.dashboard.sorted_messages().unwrap();
    let ids: Vec<&str> = sorted.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m2", "m3", "m1"]);
}

#[test]
fn recency_breaks_priority_ties() {
    let app = TestApp::spawn();
    let early = sample_message("early", "Ada", SenderRole::HR, InquiryKind::Connect, at_hour(8));
    let late = sample_message("late", "Bea", SenderRole::Founder, InquiryKind::Connect, at_hour(12));
    assert_eq!(message_priority(&early), message_priority(&late));

    app.store.append_message(&early).unwrap();
    app.store.append_message(&late).unwrap();

    let sorted = app.dashboard.sorted_messages().unwrap();
    assert_eq!(sorted[0].id, "late");
}

#[test]
fn toggle_published_round_trips_through_the_store() {
    let app = TestApp::spawn();
    assert!(app.store.project("1").unwrap().unwrap().published);

    let now = app.dashboard.toggle_published(RecordCategory::Project, "1").unwrap();
    assert!(!now);
    assert!(!app.store.project("1").unwrap().unwrap().published);

    let again = app.dashboard.toggle_published(RecordCategory::Project, "1").unwrap();
    assert!(again);
}

#[test]
fn messages_have_no_publish_flag() {
    let app = TestApp::spawn();
    let err = app.dashboard.toggle_published(RecordCategory::Message, "m1").unwrap_err();
    assert!(matches!(err, AppError::InvalidRoute(_)));
}

#[test]
fn declined_confirmation_deletes_nothing() {
    let app = TestApp::spawn();

    let deleted = app
        .dashboard
        .delete(RecordCategory::Blog, "1", Confirmation::Declined)
        .unwrap();

    assert!(!deleted);
    assert!(app.store.blog("1").unwrap().is_some());
}

#[test]
fn confirmed_delete_removes_the_record() {
    let app = TestApp::spawn();

    let deleted = app
        .dashboard
        .delete(RecordCategory::Blog, "1", Confirmation::Confirmed)
        .unwrap();

    assert!(deleted);
    assert!(app.store.blog("1").unwrap().is_none());
}

#[test]
fn confirm_template_fills_in_the_meeting_details() {
    let app = TestApp::spawn();
    let msg = sample_message("m1", "Ada", SenderRole::Founder, InquiryKind::JobOffer, at_hour(9));

    let template = app.dashboard.confirm_template(&msg);
    assert_eq!(template.to, "ada@example.com");
    assert_eq!(template.subject, "Meeting Confirmation: Platform rebuild");
    assert!(template.body.contains("December 1, 2025"));
    assert!(template.body.contains("10:30 AM"));
    assert!(template.body.contains("Google Meet"));
    assert!(template.body.ends_with("Best,\nShaany"));
}

#[test]
fn decline_template_asks_for_another_slot() {
    let app = TestApp::spawn();
    let msg = sample_message("m1", "Ada", SenderRole::Other, InquiryKind::Freelance, at_hour(9));

    let template = app.dashboard.decline_template(&msg);
    assert_eq!(template.subject, "Regarding our meeting: Platform rebuild");
    assert!(template.body.contains("different time"));
}

#[test]
fn mailto_links_escape_subject_and_body() {
    let app = TestApp::spawn();
    let msg = sample_message("m1", "Ada", SenderRole::Other, InquiryKind::Connect, at_hour(9));

    let link = app.dashboard.confirm_template(&msg).mailto_link();
    assert!(link.starts_with("mailto:ada@example.com?subject="));
    assert!(link.contains("Meeting%20Confirmation"));
    assert!(!link.contains('\n'));
}
