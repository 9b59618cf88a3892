//! States for view-model and view tests, built by replaying events.

use syllabus_core::model::{
    Document, LessonExample, QuizQuestion, TeachingSession, TopicDraft, TopicId,
};
use syllabus_core::{AppState, Effect, Event, StudyConfig, transition};

pub fn step(state: AppState, event: Event) -> (AppState, Vec<Effect>) {
    let next = transition(state, event);
    (next.state, next.effects)
}

pub fn lesson(title: &str) -> TeachingSession {
    TeachingSession::new(
        title,
        "Plants are tiny **chefs** cooking with sunlight.",
        vec!["A solar kitchen".into(), "A leafy battery".into()],
        vec!["Light in".into(), "Sugar out".into()],
        vec![LessonExample {
            title: "Farming".into(),
            detail: "Greenhouses stretch daylight.".into(),
        }],
        vec![
            QuizQuestion::new("What feeds a plant?", vec!["Light".into(), "Rocks".into()], "Light", "Light is the fuel."),
            QuizQuestion::new("Where does it happen?", vec!["Leaves".into(), "Roots".into()], "Leaves", "Chloroplasts live in leaves."),
        ],
    )
}

pub fn dashboard(config: StudyConfig) -> AppState {
    let document = Document::new("biology.txt", "text/plain", b"Unit 1".to_vec()).unwrap();
    let (state, _) = step(AppState::new(config), Event::Upload(document));
    let (state, _) = step(
        state,
        Event::TopicsExtracted(vec![
            TopicDraft::new("t1", "Photosynthesis", "Light into sugar"),
            TopicDraft::new("t2", "Respiration", "Sugar into energy"),
        ]),
    );
    state
}

pub fn teaching(config: StudyConfig) -> AppState {
    let state = dashboard(config);
    let (state, effects) = step(state, Event::SelectTopic(TopicId::new("t1")));
    let epoch = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::GenerateLesson { epoch, .. } => Some(*epoch),
            _ => None,
        })
        .unwrap();
    let (state, _) = step(
        state,
        Event::LessonGenerated {
            topic_id: TopicId::new("t1"),
            epoch,
            session: lesson("Photosynthesis"),
        },
    );
    state
}

/// Tick the focus timer `count` times.
pub fn focus_ticks(mut state: AppState, count: u32) -> AppState {
    for _ in 0..count {
        let Some(generation) = state.focus_ticker() else {
            break;
        };
        state = step(state, Event::FocusTick { generation }).0;
    }
    state
}
