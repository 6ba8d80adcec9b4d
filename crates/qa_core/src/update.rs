use qa_logging::qa_debug;

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();
    match msg {
        Msg::UrlInputChanged(text) => {
            state.submission.set_input(text);
            state.mark_dirty();
        }
        Msg::AddUrlClicked => match state.submission.add_from_input() {
            Ok(()) => state.mark_dirty(),
            Err(err) => effects.push(state.raise_notice(err.to_string())),
        },
        Msg::RemoveUrlClicked(index) => {
            if state.submission.remove_candidate(index) {
                state.mark_dirty();
            }
        }
        Msg::ExtractClicked => match state.submission.ensure_candidates() {
            Ok(()) => {
                let token = state.next_token();
                let urls = state.submission.begin_extract(token);
                // The previous answer belonged to the old URL scope.
                state.query.reset_answer();
                state.clear_notice();
                state.mark_dirty();
                effects.push(Effect::Extract { token, urls });
            }
            Err(err) => effects.push(state.raise_notice(err.to_string())),
        },
        Msg::ExtractSucceeded { token, content } => {
            if state.submission.complete_extract(token, content) {
                state.mark_dirty();
                // The question step reappears, so the catalog is fetched again.
                let token = state.next_token();
                state.query.begin_catalog_fetch(token);
                effects.push(Effect::FetchModels { token });
            } else {
                qa_debug!("Dropping stale extract response {}", token);
            }
        }
        Msg::ExtractFailed { token, message } => {
            if state.submission.fail_extract(token) {
                effects.push(state.raise_notice(message));
            } else {
                qa_debug!("Dropping stale extract failure {}: {}", token, message);
            }
        }
        Msg::ModelsLoaded { token, catalog } => {
            if state.query.apply_catalog(token, catalog) {
                state.mark_dirty();
            } else {
                qa_debug!("Dropping stale model catalog {}", token);
            }
        }
        Msg::ModelsFailed { token } => {
            if state.query.apply_catalog_fallback(token) {
                state.mark_dirty();
            } else {
                qa_debug!("Dropping stale model catalog failure {}", token);
            }
        }
        Msg::QuestionChanged(text) => {
            state.query.set_question(text);
            state.mark_dirty();
        }
        Msg::ModelSelected(key) => {
            state.query.select_model(key);
            state.mark_dirty();
        }
        Msg::AskClicked => {
            let Some(urls) = state.submission.processed_urls().map(<[String]>::to_vec) else {
                return (state, effects);
            };
            let token = state.next_token();
            match state.query.begin_answer(token, &urls) {
                Ok(request) => {
                    state.clear_notice();
                    state.mark_dirty();
                    effects.push(Effect::Answer {
                        token,
                        question: request.question,
                        urls: request.urls,
                        model_key: request.model_key,
                    });
                }
                Err(err) => effects.push(state.raise_notice(err.to_string())),
            }
        }
        Msg::AnswerSucceeded {
            token,
            answer,
            received_at,
        } => match state.query.complete_answer(token, answer, received_at) {
            Some(entry) => {
                state.history.record(entry);
                state.mark_dirty();
            }
            None => qa_debug!("Dropping stale answer response {}", token),
        },
        Msg::AnswerFailed { token, message } => {
            if state.query.fail_answer(token) {
                effects.push(state.raise_notice(message));
            } else {
                qa_debug!("Dropping stale answer failure {}: {}", token, message);
            }
        }
        Msg::HistorySelected(index) => {
            if let Some(question) = state.history.select(index).map(ToOwned::to_owned) {
                state.query.set_question(question);
                state.mark_dirty();
            }
        }
        Msg::NoticeExpired(token) => {
            if state.notice.expire(token) {
                state.mark_dirty();
            }
        }
        Msg::NoOp => {}
    }

    (state, effects)
}
