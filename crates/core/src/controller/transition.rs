use std::sync::Arc;

use tracing::{debug, info, warn};

use super::event::{Effect, Event};
use super::state::{AppPhase, AppState, EXTRACTION_FAILED_MESSAGE, GENERATION_FAILED_MESSAGE};
use crate::model::{TopicId, TopicList};
use crate::quiz::Quiz;
use crate::timer::{BreakCountdown, FocusTick, FocusTimer};

/// New state plus the effects the runtime has to execute, in order.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

/// Apply one event.
///
/// Events that make no sense in the current phase are dropped and leave the
/// state untouched. After every event the ticker bookkeeping is reconciled:
/// a ticker that should no longer run gets a stop effect, one that should
/// start gets a fresh generation.
#[must_use]
pub fn transition(state: AppState, event: Event) -> Transition {
    let mut state = state;
    let mut effects = Vec::new();
    let before = state.phase;

    apply(&mut state, event, &mut effects);
    reconcile_tickers(&mut state, &mut effects);

    if before != state.phase {
        debug!(from = ?before, to = ?state.phase, "phase changed");
    }
    Transition { state, effects }
}

fn apply(state: &mut AppState, event: Event, effects: &mut Vec<Effect>) {
    match event {
        Event::Upload(document) => {
            if state.phase != AppPhase::Idle {
                debug!(phase = ?state.phase, "upload ignored outside idle");
                return;
            }
            state.phase = AppPhase::Parsing;
            state.error = None;
            state.document_name = Some(document.name().to_string());
            effects.push(Effect::ExtractTopics(document));
        }
        Event::TopicsExtracted(drafts) => {
            if state.phase != AppPhase::Parsing {
                debug!("stale extraction result dropped");
                return;
            }
            match TopicList::from_drafts(drafts) {
                Ok(topics) => {
                    info!(count = topics.len(), "syllabus topics extracted");
                    state.topics = topics;
                    state.phase = AppPhase::Learning;
                    state.focus.reset();
                }
                Err(err) => fail_extraction(state, &err.to_string()),
            }
        }
        Event::ExtractionFailed(reason) => {
            if state.phase != AppPhase::Parsing {
                debug!("stale extraction failure dropped");
                return;
            }
            fail_extraction(state, &reason);
        }
        Event::SelectTopic(topic_id) => select_topic(state, topic_id, effects),
        Event::LessonGenerated {
            topic_id,
            epoch,
            session,
        } => {
            if !awaiting(state, &topic_id, epoch) {
                debug!(%topic_id, epoch, "stale lesson dropped");
                return;
            }
            state.pending_lesson = None;
            match session.validate() {
                Ok(session) => {
                    info!(%topic_id, questions = session.quiz().len(), "lesson ready");
                    state.quiz = Some(Quiz::new(session.quiz().to_vec()));
                    state.session = Some(Arc::new(session));
                }
                Err(err) => fail_generation(state, &err.to_string()),
            }
        }
        Event::LessonFailed {
            topic_id,
            epoch,
            reason,
        } => {
            if !awaiting(state, &topic_id, epoch) {
                debug!(%topic_id, epoch, "stale lesson failure dropped");
                return;
            }
            state.pending_lesson = None;
            fail_generation(state, &reason);
        }
        Event::ToggleComplete(topic_id) => {
            if state.phase != AppPhase::Learning {
                return;
            }
            if let Err(err) = state.topics.toggle_complete(&topic_id) {
                warn!(%err, "toggle ignored");
            }
        }
        Event::Back => {
            if state.phase == AppPhase::Teaching {
                leave_lesson(state);
            }
        }
        Event::Complete => {
            if state.phase != AppPhase::Teaching || state.session.is_none() {
                return;
            }
            if let Some(topic_id) = state.active_topic.clone() {
                if let Err(err) = state.topics.mark_complete(&topic_id) {
                    warn!(%err, "complete ignored");
                } else {
                    info!(%topic_id, "topic completed");
                }
            }
            leave_lesson(state);
        }
        Event::RequestReset => {
            if matches!(state.phase, AppPhase::Learning | AppPhase::Teaching) {
                state.reset_prompt = true;
            }
        }
        Event::CancelReset => state.reset_prompt = false,
        Event::ConfirmReset => {
            if state.reset_prompt {
                reset(state);
            }
        }
        Event::Answer(option) => {
            if let Some(quiz) = active_quiz(state) {
                let outcome = quiz.answer(&option);
                debug!(?outcome, "quiz answer");
            }
        }
        Event::AdvanceQuiz => {
            if let Some(quiz) = active_quiz(state) {
                quiz.advance();
            }
        }
        Event::RetakeQuiz => {
            if let Some(quiz) = active_quiz(state) {
                quiz.retake();
            }
        }
        Event::FocusTick { generation } => {
            if state.focus_ticker != Some(generation) || !state.focus_should_tick() {
                return;
            }
            if state.focus.tick() == FocusTick::BreakRequested {
                info!("focus session finished, break requested");
                state.break_countdown = Some(BreakCountdown::new(state.config.break_secs));
            }
        }
        Event::BreakTick { generation } => {
            if state.break_ticker != Some(generation) {
                return;
            }
            if let Some(countdown) = state.break_countdown.as_mut() {
                if countdown.tick() {
                    info!("break finished");
                }
            }
        }
        Event::DismissBreak => {
            if state.break_countdown.take().is_some() {
                state.focus.end_break();
            }
        }
        Event::DismissError => state.error = None,
    }
}

fn select_topic(state: &mut AppState, topic_id: TopicId, effects: &mut Vec<Effect>) {
    if state.phase != AppPhase::Learning {
        debug!(phase = ?state.phase, "topic selection ignored");
        return;
    }
    let Some(topic) = state.topics.get(&topic_id) else {
        warn!(%topic_id, "unknown topic selected");
        return;
    };
    let title = topic.title().to_string();
    let context = state.topics.context_summary();

    state.lesson_epoch += 1;
    let epoch = state.lesson_epoch;
    state.phase = AppPhase::Teaching;
    state.active_topic = Some(topic_id.clone());
    state.session = None;
    state.quiz = None;
    state.pending_lesson = Some(epoch);
    state.error = None;

    effects.push(Effect::GenerateLesson {
        topic_id,
        epoch,
        title,
        context,
    });
}

fn awaiting(state: &AppState, topic_id: &TopicId, epoch: u64) -> bool {
    state.phase == AppPhase::Teaching
        && state.pending_lesson == Some(epoch)
        && state.active_topic.as_ref() == Some(topic_id)
}

fn active_quiz(state: &mut AppState) -> Option<&mut Quiz> {
    if state.phase != AppPhase::Teaching {
        return None;
    }
    state.quiz.as_mut()
}

fn fail_extraction(state: &mut AppState, reason: &str) {
    warn!(%reason, "topic extraction failed");
    state.phase = AppPhase::Idle;
    state.topics = TopicList::default();
    state.error = Some(EXTRACTION_FAILED_MESSAGE.to_string());
}

fn fail_generation(state: &mut AppState, reason: &str) {
    warn!(%reason, "lesson generation failed");
    state.phase = AppPhase::Learning;
    state.active_topic = None;
    state.session = None;
    state.quiz = None;
    state.error = Some(GENERATION_FAILED_MESSAGE.to_string());
}

fn leave_lesson(state: &mut AppState) {
    state.phase = AppPhase::Learning;
    state.active_topic = None;
    state.session = None;
    state.quiz = None;
    state.pending_lesson = None;
}

fn reset(state: &mut AppState) {
    info!("study plan reset");
    state.phase = AppPhase::Idle;
    state.document_name = None;
    state.topics = TopicList::default();
    state.active_topic = None;
    state.session = None;
    state.quiz = None;
    state.pending_lesson = None;
    state.focus = FocusTimer::new(state.config.focus_secs);
    state.break_countdown = None;
    state.error = None;
    state.reset_prompt = false;
}

fn reconcile_tickers(state: &mut AppState, effects: &mut Vec<Effect>) {
    let focus = state.focus_should_tick();
    let brk = state.break_should_tick();

    if !focus {
        if let Some(generation) = state.focus_ticker.take() {
            effects.push(Effect::StopFocusTicker { generation });
        }
    }
    if !brk {
        if let Some(generation) = state.break_ticker.take() {
            effects.push(Effect::StopBreakTicker { generation });
        }
    }
    if focus && state.focus_ticker.is_none() {
        state.ticker_generation += 1;
        let generation = state.ticker_generation;
        state.focus_ticker = Some(generation);
        effects.push(Effect::StartFocusTicker { generation });
    }
    if brk && state.break_ticker.is_none() {
        state.ticker_generation += 1;
        let generation = state.ticker_generation;
        state.break_ticker = Some(generation);
        effects.push(Effect::StartBreakTicker { generation });
    }
}
