
use portfolio_admin::entities::RecordCategory;
use portfolio_admin::errors::AppError;
use portfolio_admin::ids::{IdProvider, ShortIdProvider};
use portfolio_admin::repositories::records::RecordStore;
use portfolio_admin::use_cases::editor::{EditorDraft, EditorSession, EditorState};
use portfolio_admin::use_cases::preview::PreviewMode;
use test_utils::TestApp;

struct FixedIds(&'static str);

impl IdProvider for FixedIds {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

#[test]
fn new_drafts_get_an_id_immediately_but_stay_out_of_the_store() {
    let app = TestApp::spawn();
    let ids = FixedIds("draft-id1");

    let session =
        EditorSession::open(&app.store, &ids, RecordCategory::Project, "new").unwrap();

    assert!(session.is_new());
    assert_eq!(session.id(), "draft-id1");
    assert!(session.published());
    assert_eq!(session.state(), EditorState::Editing);
    assert!(app.store.project("draft-id1").unwrap().is_none());
}

#[test]
fn editing_an_existing_record_works_on_a_copy() {
    let app = TestApp::spawn();
    let ids = ShortIdProvider;

    let mut session =
        EditorSession::open(&app.store, &ids, RecordCategory::Project, "1").unwrap();
    assert!(!session.is_new());

    session.set_field("title", "Edited Title").unwrap();

    // Unsaved edits never leak into the store.
    assert_eq!(app.store.project("1").unwrap().unwrap().title, "Orbit");
}

#[test]
fn derived_fields_round_trip_through_their_flat_form() {
    let app = TestApp::spawn();
    let ids = ShortIdProvider;
    let mut session =
        EditorSession::open(&app.store, &ids, RecordCategory::Project, "new").unwrap();

    session.set_field("tags", "Rust, Axum , ,Tokio").unwrap();
    assert_eq!(session.field("tags").unwrap(), "Rust, Axum, Tokio");

    session.set_field("images", "/a.png\n\n /b.png \n").unwrap();
    assert_eq!(session.field("images").unwrap(), "/a.png\n/b.png");

    session.set_field("techStack", "Rust,PostgreSQL").unwrap();
    assert_eq!(session.field("techStack").unwrap(), "Rust, PostgreSQL");
}

#[test]
fn clearing_metrics_stores_absence_not_an_empty_list() {
    let app = TestApp::spawn();
    let ids = ShortIdProvider;
    let mut session =
        EditorSession::open(&app.store, &ids, RecordCategory::Project, "new").unwrap();

    session.set_field("metrics", "50ms p99\n1k users").unwrap();
    assert_eq!(session.field("metrics").unwrap(), "50ms p99\n1k users");

    session.set_field("metrics", "  \n ").unwrap();
    assert_eq!(session.field("metrics").unwrap(), "");
    match session.draft() {
        EditorDraft::Project(p) => assert_eq!(p.details.metrics, None),
        other => panic!("expected project draft, got {other:?}"),
    }
}

#[test]
fn nested_paths_reach_links_and_details() {
    let app = TestApp::spawn();
    let ids = ShortIdProvider;
    let mut session =
        EditorSession::open(&app.store, &ids, RecordCategory::Project, "new").unwrap();

    session.set_field("links.live", "https://example.com").unwrap();
    session.set_field("links.repo", "   ").unwrap();
    session.set_field("details.problem", "It was slow.").unwrap();

    match session.draft() {
        EditorDraft::Project(p) => {
            assert_eq!(p.links.live.as_deref(), Some("https://example.com"));
            assert_eq!(p.links.repo, None);
            assert_eq!(p.details.problem, "It was slow.");
        }
        other => panic!("expected project draft, got {other:?}"),
    }
}

#[test]
fn unknown_field_paths_are_rejected() {
    let app = TestApp::spawn();
    let ids = ShortIdProvider;
    let mut session =
        EditorSession::open(&app.store, &ids, RecordCategory::Cert, "new").unwrap();

    assert!(matches!(session.field("tags"), Err(AppError::InvalidRoute(_))));
    assert!(matches!(session.set_field("tags", "x"), Err(AppError::InvalidRoute(_))));
}

#[test]
fn saving_a_new_draft_head_inserts_and_ends_the_session() {
    let app = TestApp::spawn();
    let ids = FixedIds("savedblog");
    let mut session =
        EditorSession::open(&app.store, &ids, RecordCategory::Blog, "new").unwrap();

    session.set_field("title", "Fresh Post").unwrap();
    session.set_field("excerpt", "Short.").unwrap();
    session.set_field("content", "## Body").unwrap();
    session.set_field("thumbnail", "/new.png").unwrap();
    session.save(&app.store).unwrap();

    assert_eq!(session.state(), EditorState::Saved);
    let blogs = app.store.load_all().unwrap().blogs;
    assert_eq!(blogs[0].id, "savedblog");
    assert_eq!(blogs.len(), 4);
}

#[test]
fn saving_an_edited_record_replaces_it_in_place() {
    let app = TestApp::spawn();
    let ids = ShortIdProvider;
    let mut session =
        EditorSession::open(&app.store, &ids, RecordCategory::Cert, "2").unwrap();

    session.set_field("issuer", "New Issuer").unwrap();
    session.save(&app.store).unwrap();

    let certs = app.store.load_all().unwrap().certs;
    assert_eq!(certs.len(), 3);
    assert_eq!(certs[1].id, "2");
    assert_eq!(certs[1].issuer, "New Issuer");
}

#[test]
fn blank_titles_fail_validation_at_save() {
    let app = TestApp::spawn();
    let ids = ShortIdProvider;
    let mut session =
        EditorSession::open(&app.store, &ids, RecordCategory::Blog, "new").unwrap();

    session.set_field("title", "   ").unwrap();
    let err = session.save(&app.store).unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
    assert_eq!(session.state(), EditorState::Editing);
}

#[test]
fn opening_an_unknown_id_is_not_found() {
    let app = TestApp::spawn();
    let ids = ShortIdProvider;

    let err = EditorSession::open(&app.store, &ids, RecordCategory::Project, "nope").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(err.is_redirectable());
}

#[test]
fn messages_cannot_be_opened_in_the_editor() {
    let app = TestApp::spawn();
    let ids = ShortIdProvider;

    let err = EditorSession::open(&app.store, &ids, RecordCategory::Message, "new").unwrap_err();
    assert!(matches!(err, AppError::InvalidRoute(_)));
}

#[test]
fn preview_tracks_unsaved_edits() {
    let app = TestApp::spawn();
    let ids = ShortIdProvider;
    let mut session =
        EditorSession::open(&app.store, &ids, RecordCategory::Blog, "1").unwrap();

    session.set_field("title", "Live Preview Title").unwrap();

    let card = session.preview(PreviewMode::Card);
    assert!(card.contains("Live Preview Title"));
    let detail = session.preview(PreviewMode::Detail);
    assert!(detail.starts_with("# Live Preview Title"));
}
