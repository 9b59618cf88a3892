use syllabus_core::AppState;
use syllabus_core::model::{Topic, TopicId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub id: TopicId,
    pub unit_label: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub action_label: &'static str,
    pub toggle_label: &'static str,
}

impl TopicCardVm {
    fn from_topic(index: usize, topic: &Topic) -> Self {
        let completed = topic.completed();
        Self {
            id: topic.id().clone(),
            unit_label: format!("UNIT {}", index + 1),
            title: topic.title().to_string(),
            description: topic.description().to_string(),
            completed,
            action_label: if completed { "Review" } else { "Teach Me" },
            toggle_label: if completed {
                "Mark as not done"
            } else {
                "Mark as done"
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub document_name: Option<String>,
    pub lessons_label: String,
    pub progress_percent: u8,
    pub progress_label: String,
    pub completed_label: String,
    pub topics: Vec<TopicCardVm>,
}

#[must_use]
pub fn map_dashboard(state: &AppState) -> DashboardVm {
    let topics = state.topics();
    let percent = topics.progress_percent();
    let lessons_label = match topics.len() {
        1 => "We've structured 1 custom lesson for you.".to_string(),
        n => format!("We've structured {n} custom lessons for you."),
    };
    DashboardVm {
        document_name: state.document_name().map(str::to_string),
        lessons_label,
        progress_percent: percent,
        progress_label: format!("{percent}%"),
        completed_label: format!("{} of {} completed", topics.completed_count(), topics.len()),
        topics: topics
            .topics()
            .iter()
            .enumerate()
            .map(|(index, topic)| TopicCardVm::from_topic(index, topic))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use syllabus_core::{Event, StudyConfig};

    use super::*;
    use crate::vm::fixtures::{dashboard, step};

    #[test]
    fn fresh_dashboard_has_nothing_completed() {
        let vm = map_dashboard(&dashboard(StudyConfig::default()));
        assert_eq!(vm.document_name.as_deref(), Some("biology.txt"));
        assert_eq!(vm.lessons_label, "We've structured 2 custom lessons for you.");
        assert_eq!(vm.progress_label, "0%");
        assert_eq!(vm.topics.len(), 2);
        assert_eq!(vm.topics[0].unit_label, "UNIT 1");
        assert_eq!(vm.topics[1].action_label, "Teach Me");
    }

    #[test]
    fn completed_topic_offers_review() {
        let state = dashboard(StudyConfig::default());
        let (state, _) = step(state, Event::ToggleComplete(TopicId::new("t2")));
        let vm = map_dashboard(&state);
        assert_eq!(vm.progress_percent, 50);
        assert_eq!(vm.completed_label, "1 of 2 completed");
        assert!(vm.topics[1].completed);
        assert_eq!(vm.topics[1].action_label, "Review");
        assert_eq!(vm.topics[1].toggle_label, "Mark as not done");
    }
}
