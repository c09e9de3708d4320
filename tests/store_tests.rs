
use portfolio_admin::constants::{BLOGS_KEY, MESSAGES_KEY, PROJECTS_KEY};
use portfolio_admin::entities::RecordCategory;
use portfolio_admin::errors::AppError;
use portfolio_admin::repositories::backend::KeyValueBackend;
use portfolio_admin::repositories::local_store::LocalRecordStore;
use portfolio_admin::repositories::records::RecordStore;
use portfolio_admin::storage::file::FileBackend;
use test_utils::{TestApp, sample_blog, sample_project};

#[test]
fn empty_partitions_seed_defaults_without_writing() {
    let app = TestApp::spawn();

    let first = app.store.load_all().unwrap();
    let second = app.store.load_all().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.projects.len(), 3);
    assert_eq!(first.certs.len(), 3);
    assert_eq!(first.blogs.len(), 3);
    assert!(first.projects.iter().all(|p| p.published));
    assert!(first.blogs.iter().all(|b| b.published));

    // Reads are pure: seeding never touches the substrate.
    assert_eq!(app.backend.get(PROJECTS_KEY).unwrap(), None);
    assert_eq!(app.backend.get(BLOGS_KEY).unwrap(), None);
}

#[test]
fn messages_partition_seeds_empty() {
    let app = TestApp::spawn();
    assert!(app.store.load_all().unwrap().messages.is_empty());
    assert_eq!(app.backend.get(MESSAGES_KEY).unwrap(), None);
}

#[test]
fn saving_an_existing_id_replaces_in_place() {
    let app = TestApp::spawn();

    let mut target = app.store.project("2").unwrap().unwrap();
    target.title = "Renamed".into();
    app.store.save_project(&target).unwrap();

    let projects = app.store.load_all().unwrap().projects;
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[1].id, "2");
    assert_eq!(projects[1].title, "Renamed");
}

#[test]
fn saving_a_new_id_head_inserts() {
    let app = TestApp::spawn();

    app.store.save_project(&sample_project("p-new", "Fresh")).unwrap();

    let projects = app.store.load_all().unwrap().projects;
    assert_eq!(projects.len(), 4);
    assert_eq!(projects[0].id, "p-new");
    // The seeded records keep their order behind the insert.
    assert_eq!(projects[1].id, "1");
}

#[test]
fn saved_records_round_trip_deep_equal() {
    let app = TestApp::spawn();

    let project = sample_project("rt", "Round Trip");
    app.store.save_project(&project).unwrap();
    assert_eq!(app.store.project("rt").unwrap().unwrap(), project);

    let blog = sample_blog("rt-b", "Round Trip Post");
    app.store.save_blog(&blog).unwrap();
    assert_eq!(app.store.blog("rt-b").unwrap().unwrap(), blog);
}

#[test]
fn deleting_an_unknown_id_is_a_noop() {
    let app = TestApp::spawn();

    app.store.delete(RecordCategory::Project, "does-not-exist").unwrap();

    assert_eq!(app.store.load_all().unwrap().projects.len(), 3);
}

#[test]
fn delete_removes_only_the_matching_record() {
    let app = TestApp::spawn();

    app.store.delete(RecordCategory::Cert, "2").unwrap();

    let certs = app.store.load_all().unwrap().certs;
    assert_eq!(certs.len(), 2);
    assert!(certs.iter().all(|c| c.id != "2"));
}

#[test]
fn corrupt_partition_surfaces_a_storage_error() {
    let app = TestApp::spawn();
    app.backend.set(PROJECTS_KEY, "{ not json").unwrap();

    let err = app.store.load_all().unwrap_err();
    assert!(matches!(err, AppError::StorageUnavailable(_)));
}

#[test]
fn file_backend_persists_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = LocalRecordStore::new(FileBackend::new(dir.path()));
        store.save_project(&sample_project("durable", "Survives Restart")).unwrap();
    }

    let reopened = LocalRecordStore::new(FileBackend::new(dir.path()));
    let found = reopened.project("durable").unwrap().unwrap();
    assert_eq!(found.title, "Survives Restart");
}
