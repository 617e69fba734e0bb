
use actix_web::{http::StatusCode, test};
use portfolio_api::{
    entities::{
        certification::Certification,
        experience::Experience,
        project::Project,
        skill::Skill,
    },
    fixtures::FixtureSet,
    use_cases::seed::{SeedHandler, SeedOutcome},
};
use serde_json::Value;
use test_utils::{InMemoryStore, TestApp};

#[actix_web::test]
async fn list_endpoints_return_empty_arrays_before_seeding() {
    let app = TestApp::spawn();

    for path in ["/api/projects", "/api/skills", "/api/experience", "/api/certifications"] {
        let body: Value = app.get_json(path).await;
        assert_eq!(body, Value::Array(vec![]), "{path}");
    }
}

#[actix_web::test]
async fn seeded_store_returns_every_fixture() {
    let app = TestApp::spawn();
    let outcome = SeedHandler::new(app.store.clone()).seed_if_empty().await.unwrap();
    assert!(matches!(outcome, SeedOutcome::Seeded(_)));

    let fixtures = FixtureSet::portfolio();

    let projects: Vec<Project> = app.get_json("/api/projects").await;
    assert_eq!(projects.len(), fixtures.projects.len());

    let skills: Vec<Skill> = app.get_json("/api/skills").await;
    assert_eq!(skills.len(), fixtures.skills.len());
    assert!(skills.iter().all(|s| (0..=100).contains(&s.proficiency)));

    let experience: Vec<Experience> = app.get_json("/api/experience").await;
    assert_eq!(experience.len(), fixtures.experience.len());

    let certifications: Vec<Certification> = app.get_json("/api/certifications").await;
    assert_eq!(certifications.len(), fixtures.certifications.len());
}

#[actix_web::test]
async fn seeding_twice_does_not_duplicate_rows() {
    let app = TestApp::spawn();
    let seeder = SeedHandler::new(app.store.clone());

    seeder.seed_if_empty().await.unwrap();
    let second = seeder.seed_if_empty().await.unwrap();
    assert_eq!(second, SeedOutcome::AlreadySeeded);
    assert!(seeder.is_seeded().await.unwrap());

    let projects: Vec<Project> = app.get_json("/api/projects").await;
    assert_eq!(projects.len(), FixtureSet::portfolio().projects.len());

    let skills: Vec<Skill> = app.get_json("/api/skills").await;
    assert_eq!(skills.len(), FixtureSet::portfolio().skills.len());
}

#[actix_web::test]
async fn ordered_lists_keep_insertion_order() {
    let app = TestApp::seeded().await;
    let fixtures = FixtureSet::portfolio();

    let projects: Vec<Project> = app.get_json("/api/projects").await;
    for (served, fixture) in projects.iter().zip(&fixtures.projects) {
        assert_eq!(served.title, fixture.title);
        assert_eq!(served.tech_stack, fixture.tech_stack);
        assert_eq!(served.highlights, fixture.highlights);
    }

    let experience: Vec<Experience> = app.get_json("/api/experience").await;
    for (served, fixture) in experience.iter().zip(&fixtures.experience) {
        assert_eq!(served.description, fixture.description);
    }
}

#[actix_web::test]
async fn project_json_uses_client_field_names() {
    let app = TestApp::seeded().await;

    let body: Value = app.get_json("/api/projects").await;
    let first = &body[0];

    assert!(first["id"].is_number());
    assert!(first["techStack"].is_array());
    assert!(first["imageUrl"].is_string());
    assert!(first.get("tech_stack").is_none());
}

#[actix_web::test]
async fn trailing_slash_is_normalized() {
    let app = TestApp::seeded().await;

    let projects: Vec<Project> = app.get_json("/api/projects/").await;
    assert_eq!(projects.len(), FixtureSet::portfolio().projects.len());

    let body: Value = app.get_json("/health/").await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn store_outage_is_an_opaque_server_error() {
    let app = TestApp::with_store(InMemoryStore::unavailable());

    let resp = app.send(test::TestRequest::get().uri("/api/skills")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Internal server error");
}

#[actix_web::test]
async fn health_reports_database_status() {
    let body: Value = TestApp::spawn().get_json("/health").await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "OK");

    let body: Value = TestApp::with_store(InMemoryStore::unavailable())
        .get_json("/health")
        .await;
    assert_eq!(body["database"], "Unavailable");
}
