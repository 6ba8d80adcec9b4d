use std::sync::Once;

use pretty_assertions::assert_eq;
use qa_core::{update, AppState, Effect, ExtractedContent, Msg, PageStage, RequestToken};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(qa_logging::initialize_for_tests);
}

fn add_url(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UrlInputChanged(input.to_string()));
    update(state, Msg::AddUrlClicked)
}

fn extract_token(effects: &[Effect]) -> RequestToken {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Extract { token, .. } => Some(*token),
            _ => None,
        })
        .expect("extract effect")
}

fn has_notice_timer(effects: &[Effect]) -> bool {
    effects
        .iter()
        .any(|effect| matches!(effect, Effect::ClearNoticeAfter { .. }))
}

#[test]
fn duplicate_url_is_not_inserted_twice() {
    init_logging();
    let (state, effects) = add_url(AppState::new(), "https://a.com");
    assert!(effects.is_empty());
    assert_eq!(state.view().url_input, "");

    let (state, effects) = add_url(state, "https://a.com");
    let view = state.view();
    assert_eq!(view.candidates, vec!["https://a.com".to_string()]);
    assert!(has_notice_timer(&effects));
    assert_eq!(view.notice.as_deref(), Some("This URL has already been added"));
}

#[test]
fn invalid_url_leaves_list_unchanged_and_raises_notice() {
    init_logging();
    let (state, _) = add_url(AppState::new(), "https://a.com");

    for bad in ["not a url", "example.com", "/relative/path", "://missing-scheme"] {
        let (next, effects) = add_url(state.clone(), bad);
        let view = next.view();
        assert_eq!(view.candidates, vec!["https://a.com".to_string()], "input {bad:?}");
        assert_eq!(view.notice.as_deref(), Some("Please enter a valid URL"));
        assert_eq!(view.url_input, bad, "input kept for correction");
        assert!(has_notice_timer(&effects));
    }
}

#[test]
fn blank_url_raises_notice() {
    init_logging();
    let (state, effects) = add_url(AppState::new(), "   ");
    assert!(state.view().candidates.is_empty());
    assert_eq!(state.view().notice.as_deref(), Some("Please enter a URL"));
    assert!(has_notice_timer(&effects));
}

#[test]
fn urls_are_trimmed_and_keep_insertion_order() {
    init_logging();
    let (state, _) = add_url(AppState::new(), "  https://b.example.com ");
    let (state, _) = add_url(state, "https://a.example.com");
    let (state, _) = add_url(state, "https://b.example.com");

    assert_eq!(
        state.view().candidates,
        vec![
            "https://b.example.com".to_string(),
            "https://a.example.com".to_string()
        ]
    );
}

#[test]
fn remove_candidate_by_index_ignores_out_of_range() {
    init_logging();
    let (state, _) = add_url(AppState::new(), "https://a.com");
    let (state, _) = add_url(state, "https://b.com");

    let (mut state, effects) = update(state, Msg::RemoveUrlClicked(5));
    assert!(effects.is_empty());
    state.consume_dirty();
    let (mut state, _) = update(state, Msg::RemoveUrlClicked(7));
    assert!(!state.consume_dirty());
    assert_eq!(state.view().candidates.len(), 2);

    let (state, _) = update(state, Msg::RemoveUrlClicked(0));
    assert_eq!(state.view().candidates, vec!["https://b.com".to_string()]);
}

#[test]
fn extract_with_empty_list_never_issues_a_request() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ExtractClicked);

    assert!(!effects
        .iter()
        .any(|effect| matches!(effect, Effect::Extract { .. })));
    assert!(has_notice_timer(&effects));
    assert!(!state.is_loading());
    assert_eq!(state.view().notice.as_deref(), Some("Please add at least one URL"));
}

#[test]
fn rejected_extract_does_not_consume_a_request_token() {
    init_logging();
    let (fresh, _) = add_url(AppState::new(), "https://a.com");
    let (_, effects) = update(fresh, Msg::ExtractClicked);
    let expected = extract_token(&effects);

    let (rejected, _) = update(AppState::new(), Msg::ExtractClicked);
    let (state, _) = add_url(rejected, "https://a.com");
    let (_, effects) = update(state, Msg::ExtractClicked);
    assert_eq!(extract_token(&effects), expected);
}

#[test]
fn successful_extract_unlocks_question_step() {
    init_logging();
    let (state, _) = add_url(AppState::new(), "https://a.com");
    let (state, effects) = update(state, Msg::ExtractClicked);
    let token = extract_token(&effects);

    assert_eq!(
        effects,
        vec![Effect::Extract {
            token,
            urls: vec!["https://a.com".to_string()],
        }]
    );
    assert!(state.is_loading());
    assert!(state.view().question_step.is_none());

    let (state, effects) = update(
        state,
        Msg::ExtractSucceeded {
            token,
            content: ExtractedContent {
                content: "hello world".to_string(),
                summary: Some("A greeting.".to_string()),
            },
        },
    );
    let view = state.view();

    assert!(state.submission().content_loaded());
    assert_eq!(
        state.submission().processed_urls(),
        Some(&["https://a.com".to_string()][..])
    );
    assert_eq!(view.stage, PageStage::ContentReady);
    assert!(!view.loading);
    assert!(view.question_step.is_some());
    let content = view.content.expect("content view");
    assert_eq!(content.summary.as_deref(), Some("A greeting."));
    assert_eq!(content.content_chars, 11);
    assert!(matches!(effects.as_slice(), [Effect::FetchModels { .. }]));
}

#[test]
fn failed_extract_revokes_question_step_but_keeps_candidates() {
    init_logging();
    let (state, _) = add_url(AppState::new(), "https://a.com");
    let (state, effects) = update(state, Msg::ExtractClicked);
    let (state, _) = update(
        state,
        Msg::ExtractSucceeded {
            token: extract_token(&effects),
            content: ExtractedContent::default(),
        },
    );
    assert!(state.submission().content_loaded());

    let (state, effects) = update(state, Msg::ExtractClicked);
    assert!(!state.submission().content_loaded(), "revoked at submit time");
    let (state, effects) = update(
        state,
        Msg::ExtractFailed {
            token: extract_token(&effects),
            message: "Error processing https://a.com: 404".to_string(),
        },
    );

    let view = state.view();
    assert!(!state.submission().content_loaded());
    assert_eq!(view.stage, PageStage::Empty);
    assert!(view.question_step.is_none());
    assert!(!view.loading);
    assert_eq!(view.candidates, vec!["https://a.com".to_string()]);
    assert_eq!(
        view.notice.as_deref(),
        Some("Error processing https://a.com: 404")
    );
    assert!(has_notice_timer(&effects));
}

#[test]
fn stale_extract_response_is_dropped() {
    init_logging();
    let (state, _) = add_url(AppState::new(), "https://a.com");
    let (state, first) = update(state, Msg::ExtractClicked);
    let first = extract_token(&first);
    let (state, _) = add_url(state, "https://b.com");
    let (mut state, second) = update(state, Msg::ExtractClicked);
    let second = extract_token(&second);
    assert_ne!(first, second);
    state.consume_dirty();

    let (mut state, effects) = update(
        state,
        Msg::ExtractSucceeded {
            token: first,
            content: ExtractedContent::default(),
        },
    );
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert!(!state.submission().content_loaded());
    assert!(state.is_loading(), "newer request still outstanding");

    let (state, _) = update(
        state,
        Msg::ExtractSucceeded {
            token: second,
            content: ExtractedContent::default(),
        },
    );
    assert!(!state.is_loading());
    assert_eq!(
        state.submission().processed_urls().map(<[String]>::to_vec),
        Some(vec!["https://a.com".to_string(), "https://b.com".to_string()])
    );
}

#[test]
fn stale_extract_failure_does_not_clear_loading() {
    init_logging();
    let (state, _) = add_url(AppState::new(), "https://a.com");
    let (state, first) = update(state, Msg::ExtractClicked);
    let (state, _second) = update(state, Msg::ExtractClicked);

    let (state, effects) = update(
        state,
        Msg::ExtractFailed {
            token: extract_token(&first),
            message: "boom".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.is_loading());
    assert_eq!(state.view().notice, None);
}

#[test]
fn processed_urls_are_captured_at_submit_time() {
    init_logging();
    let (state, _) = add_url(AppState::new(), "https://a.com");
    let (state, effects) = update(state, Msg::ExtractClicked);
    let (state, _) = add_url(state, "https://late.com");
    let (state, _) = update(
        state,
        Msg::ExtractSucceeded {
            token: extract_token(&effects),
            content: ExtractedContent::default(),
        },
    );

    assert_eq!(
        state.view().content.unwrap().processed_urls,
        vec!["https://a.com".to_string()]
    );
    assert_eq!(state.view().candidates.len(), 2);
}
