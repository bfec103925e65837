//! End-to-end tests for the AI tools flow: effective-text resolution,
//! catalog argument assembly, dispatch, and result-map behavior.

mod common;

use common::MockBackend;

use draftsmith::catalog::{Operation, OperationRequest, ResultKey};
use draftsmith::dispatcher::{Dispatcher, ToolState};
use draftsmith::error::DraftError;
use draftsmith::preferences::{Audience, Tone, WritingPreferences};
use draftsmith::results::ToolOutput;
use draftsmith::selection::SelectionTracker;
use draftsmith::service::{self, AiBackend};

const DRAFT: &str = "Title line\nBody text here.";

/// Drive one operation the way the shell does: resolve text, build the
/// argument record, begin, execute, settle.
async fn run_tool(
    dispatcher: &mut Dispatcher,
    backend: &MockBackend,
    op: Operation,
    text: &str,
    prefs: &WritingPreferences,
) -> bool {
    let request = op.build_request(text, prefs).expect("build request");
    let key = op.result_key();
    let generation = dispatcher.begin(key);
    let outcome = service::execute(backend, request)
        .await
        .map_err(|e| e.to_string());
    dispatcher.settle(key, generation, outcome)
}

#[tokio::test]
async fn test_generate_titles_end_to_end() {
    let tracker = SelectionTracker::new();
    let prefs = WritingPreferences::default();
    let backend = MockBackend::new();
    let mut dispatcher = Dispatcher::new();

    // No selection captured: the whole draft is submitted
    let text = tracker.effective_text(DRAFT).to_string();
    assert_eq!(text, DRAFT);

    assert!(run_tool(&mut dispatcher, &backend, Operation::GenerateTitles, &text, &prefs).await);

    assert_eq!(
        backend.calls(),
        vec![OperationRequest::GenerateTitles {
            blog_content: DRAFT.to_string(),
            topic: "Title line".to_string(),
        }]
    );
    assert!(!dispatcher.is_busy());
    assert_eq!(dispatcher.state(ResultKey::Titles), &ToolState::Ready);
    match dispatcher.result(ResultKey::Titles) {
        Some(ToolOutput::Titles(titles)) => {
            assert_eq!(titles.clickable_titles, vec!["Title line, Explained"]);
        }
        other => panic!("Expected titles payload, got {other:?}"),
    }
}

#[tokio::test]
async fn test_selection_scopes_the_request() {
    let mut tracker = SelectionTracker::new();
    let prefs = WritingPreferences::default();
    let backend = MockBackend::new();
    let mut dispatcher = Dispatcher::new();

    tracker.capture("Body text here.");
    let text = tracker.effective_text(DRAFT).to_string();
    assert_eq!(text, "Body text here.");

    assert!(run_tool(&mut dispatcher, &backend, Operation::OrganizeThoughts, &text, &prefs).await);

    assert_eq!(
        backend.calls(),
        vec![OperationRequest::OrganizeThoughts {
            raw_thoughts: "Body text here.".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_edit_content_carries_audience_and_tone() {
    let prefs = WritingPreferences {
        audience: Audience::Technical,
        tone: Tone::Casual,
    };
    let backend = MockBackend::new();
    let mut dispatcher = Dispatcher::new();

    assert!(run_tool(&mut dispatcher, &backend, Operation::EditContent, DRAFT, &prefs).await);

    assert_eq!(
        backend.calls(),
        vec![OperationRequest::EditContent {
            draft_content: DRAFT.to_string(),
            audience: Audience::Technical,
            tone: Tone::Casual,
        }]
    );
}

#[tokio::test]
async fn test_failure_is_contained_and_keeps_prior_result() {
    let prefs = WritingPreferences::default();
    let backend = MockBackend::new();
    let mut dispatcher = Dispatcher::new();

    assert!(
        run_tool(
            &mut dispatcher,
            &backend,
            Operation::GenerateConclusion,
            DRAFT,
            &prefs
        )
        .await
    );
    let first = dispatcher.result(ResultKey::Conclusion).cloned();
    assert!(first.is_some());

    backend.set_failure(Some("service down"));
    assert!(
        run_tool(
            &mut dispatcher,
            &backend,
            Operation::GenerateConclusion,
            DRAFT,
            &prefs
        )
        .await
    );

    // The stored payload survives the failure; the state carries the reason
    assert_eq!(dispatcher.result(ResultKey::Conclusion), first.as_ref());
    match dispatcher.state(ResultKey::Conclusion) {
        ToolState::Failed(reason) => assert!(reason.contains("service down")),
        other => panic!("Expected failed state, got {other:?}"),
    }
    assert!(!dispatcher.is_busy());
}

#[tokio::test]
async fn test_rerun_with_same_inputs_is_idempotent() {
    let prefs = WritingPreferences::default();
    let backend = MockBackend::new();
    let mut dispatcher = Dispatcher::new();

    assert!(run_tool(&mut dispatcher, &backend, Operation::GenerateTitles, DRAFT, &prefs).await);
    let first = dispatcher.result(ResultKey::Titles).cloned();

    assert!(run_tool(&mut dispatcher, &backend, Operation::GenerateTitles, DRAFT, &prefs).await);
    let second = dispatcher.result(ResultKey::Titles).cloned();

    assert_eq!(first, second);
    assert_eq!(dispatcher.result_count(), 1);
    assert_eq!(backend.calls().len(), 2);
}

#[tokio::test]
async fn test_clearing_results() {
    let prefs = WritingPreferences::default();
    let backend = MockBackend::new();
    let mut dispatcher = Dispatcher::new();

    for op in [
        Operation::GenerateTitles,
        Operation::GenerateConclusion,
        Operation::AdjustTone,
    ] {
        assert!(run_tool(&mut dispatcher, &backend, op, DRAFT, &prefs).await);
    }
    assert_eq!(dispatcher.result_count(), 3);

    dispatcher.clear_result(ResultKey::Conclusion);
    assert_eq!(dispatcher.result(ResultKey::Conclusion), None);
    assert!(dispatcher.result(ResultKey::Titles).is_some());
    assert!(dispatcher.result(ResultKey::AdjustedTone).is_some());

    dispatcher.clear_all();
    assert_eq!(dispatcher.result_count(), 0);
}

#[tokio::test]
async fn test_empty_draft_never_reaches_the_backend() {
    let tracker = SelectionTracker::new();
    let prefs = WritingPreferences::default();
    let backend = MockBackend::new();

    let text = tracker.effective_text("").to_string();
    for op in Operation::ALL {
        assert!(matches!(
            op.build_request(&text, &prefs),
            Err(DraftError::EmptyInput)
        ));
    }
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_latest_request_wins_when_completions_race() {
    let prefs = WritingPreferences::default();
    let backend = MockBackend::new();
    let mut dispatcher = Dispatcher::new();
    let key = ResultKey::AdjustedTone;

    // Two invocations of the same operation overlap: the first one's
    // completion arrives last.
    let first_request = Operation::AdjustTone
        .build_request("first text", &prefs)
        .expect("build request");
    let second_request = Operation::AdjustTone
        .build_request("second text", &prefs)
        .expect("build request");

    let first_generation = dispatcher.begin(key);
    let second_generation = dispatcher.begin(key);

    let first_outcome = service::execute(&backend, first_request)
        .await
        .map_err(|e| e.to_string());
    let second_outcome = service::execute(&backend, second_request)
        .await
        .map_err(|e| e.to_string());

    assert!(dispatcher.settle(key, second_generation, second_outcome));
    assert!(!dispatcher.settle(key, first_generation, first_outcome));

    // The slot reflects the most recently started request, not the most
    // recently completed one.
    match dispatcher.result(key) {
        Some(ToolOutput::AdjustedTone(adjusted)) => {
            assert!(adjusted.adjusted_content.starts_with("second text"));
        }
        other => panic!("Expected adjusted tone payload, got {other:?}"),
    }
    assert!(!dispatcher.is_busy());
}

#[tokio::test]
async fn test_unsettled_call_does_not_wedge_the_tools() {
    let prefs = WritingPreferences::default();
    let backend = MockBackend::new();
    let mut dispatcher = Dispatcher::new();
    let key = ResultKey::Titles;

    // A call that never settles leaves its slot pending...
    let _hung = dispatcher.begin(key);
    assert!(dispatcher.is_busy());

    // ...but a retry supersedes it and everything keeps working.
    assert!(run_tool(&mut dispatcher, &backend, Operation::GenerateTitles, DRAFT, &prefs).await);
    assert!(!dispatcher.is_busy());
    assert_eq!(dispatcher.state(key), &ToolState::Ready);
}

#[tokio::test]
async fn test_apply_merges_into_the_draft() {
    let prefs = WritingPreferences::default();
    let backend = MockBackend::new();
    let mut dispatcher = Dispatcher::new();

    assert!(
        run_tool(
            &mut dispatcher,
            &backend,
            Operation::GenerateIntroduction,
            DRAFT,
            &prefs
        )
        .await
    );

    let output = dispatcher
        .result(ResultKey::Introduction)
        .expect("introduction stored");
    let merged = output.merged_into(DRAFT);
    assert!(merged.starts_with("A story about Title line"));
    assert!(merged.ends_with(DRAFT));
}

#[tokio::test]
async fn test_mock_health_check() {
    let backend = MockBackend::new();
    assert!(backend.health_check().await);
}
