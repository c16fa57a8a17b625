use anyhow::Result;
use httpmock::prelude::*;
use resume_match::config::cli::pick_file;
use resume_match::{FormSession, FormState, LocalStorage, SubmissionEngine, WebhookAnalyzer};
use std::fs;
use tempfile::TempDir;

fn setup_session(temp_dir: &TempDir) -> Result<FormSession> {
    let path = temp_dir.path().join("resume.pdf");
    fs::write(&path, b"%PDF-1.4 fake resume")?;

    let mut session = FormSession::new();
    assert!(session.select_file(pick_file(path.to_str().unwrap())?));
    session.set_job_description("Looking for a Go developer with 5 years experience");
    Ok(session)
}

fn engine_for(
    temp_dir: &TempDir,
    url: String,
) -> SubmissionEngine<LocalStorage, WebhookAnalyzer> {
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    SubmissionEngine::new(storage, WebhookAnalyzer::new(url))
}

/// A failed webhook call leaves the form populated for a manual retry.
#[tokio::test]
async fn test_server_error_keeps_form_populated() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/analyze");
        then.status(500);
    });

    let mut session = setup_session(&temp_dir)?;
    let engine = engine_for(&temp_dir, server.url("/analyze"));

    assert!(!engine.submit(&mut session).await);
    api_mock.assert();

    assert_eq!(session.state(), FormState::FileSelected);
    assert!(session.result().is_none());
    assert_eq!(
        session.error().unwrap(),
        "Failed to analyze resume. Please try again."
    );
    assert_eq!(
        session.job_description(),
        "Looking for a Go developer with 5 years experience"
    );
    Ok(())
}

/// The user can resubmit after a failure; the retry is a fresh single call.
#[tokio::test]
async fn test_resubmit_after_failure_succeeds() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let failing = server.mock(|when, then| {
        when.method(POST).path("/broken");
        then.status(503);
    });
    let working = server.mock(|when, then| {
        when.method(POST).path("/analyze");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "match_score": "72%",
                "missing_skills": ["SQL"],
                "analysis": "Good fit"
            }));
    });

    let mut session = setup_session(&temp_dir)?;

    let broken_engine = engine_for(&temp_dir, server.url("/broken"));
    assert!(!broken_engine.submit(&mut session).await);
    failing.assert();
    assert_eq!(session.state(), FormState::FileSelected);

    let engine = engine_for(&temp_dir, server.url("/analyze"));
    assert!(engine.submit(&mut session).await);
    working.assert();

    let result = session.result().unwrap();
    assert_eq!(result.match_score, "72%");
    assert_eq!(result.missing_skills, vec!["SQL"]);
    assert_eq!(result.feedback, "Good fit");
    assert!(session.error().is_none());
    Ok(())
}

/// Validation failures never reach the webhook.
#[tokio::test]
async fn test_blank_job_description_issues_no_request() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/analyze");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"matchScore": "45%"}));
    });

    let mut session = setup_session(&temp_dir)?;
    session.set_job_description("   \n\t  ");

    let engine = engine_for(&temp_dir, server.url("/analyze"));
    assert!(!engine.submit(&mut session).await);

    assert_eq!(api_mock.hits(), 0);
    assert_eq!(session.error().unwrap(), "Please paste a job description.");
    assert_eq!(session.state(), FormState::FileSelected);
    Ok(())
}

/// No file selected: same story, no network traffic.
#[tokio::test]
async fn test_missing_file_issues_no_request() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/analyze");
        then.status(200);
    });

    let mut session = FormSession::new();
    session.set_job_description("Rust developer");

    let engine = engine_for(&temp_dir, server.url("/analyze"));
    assert!(!engine.submit(&mut session).await);

    assert_eq!(api_mock.hits(), 0);
    assert_eq!(session.error().unwrap(), "Please select a resume file.");
    assert_eq!(session.state(), FormState::Idle);
    Ok(())
}
