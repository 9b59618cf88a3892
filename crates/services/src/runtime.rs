//! Event loop that owns the app state and carries out transition effects.
//!
//! Collaborator calls and tickers run as spawned tasks. They never touch the
//! state directly; they only enqueue events.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use syllabus_core::model::{Document, TopicId};
use syllabus_core::{AppState, Effect, Event, StudyConfig, Transition, transition};

use crate::error::{RuntimeError, UploadError};
use crate::tutor::Tutor;

/// Wall-clock period of one timer tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct StudyRuntime {
    state: AppState,
    tutor: Arc<dyn Tutor>,
    tick_period: Duration,
    events: mpsc::UnboundedReceiver<Event>,
    sender: mpsc::WeakUnboundedSender<Event>,
    snapshots: watch::Sender<AppState>,
    focus_ticker: Option<JoinHandle<()>>,
    break_ticker: Option<JoinHandle<()>>,
}

impl StudyRuntime {
    /// Create a runtime and the handle used to drive it.
    ///
    /// The runtime stops once every `StudyHandle` is dropped and no
    /// collaborator call is in flight.
    #[must_use]
    pub fn new(config: StudyConfig, tutor: Arc<dyn Tutor>) -> (Self, StudyHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let state = AppState::new(config);
        let (snapshots, snapshot_rx) = watch::channel(state.clone());
        let runtime = Self {
            state,
            tutor,
            tick_period: TICK_PERIOD,
            events: rx,
            sender: tx.downgrade(),
            snapshots,
            focus_ticker: None,
            break_ticker: None,
        };
        let handle = StudyHandle {
            events: tx,
            state: snapshot_rx,
        };
        (runtime, handle)
    }

    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub async fn run(mut self) {
        info!("study runtime started");
        while let Some(event) = self.events.recv().await {
            self.dispatch(event);
        }
        info!("study runtime stopped");
    }

    /// Run the event loop on the current tokio runtime.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Apply one event, execute its effects and publish the new state.
    pub fn dispatch(&mut self, event: Event) {
        let Transition { state, effects } = transition(std::mem::take(&mut self.state), event);
        self.state = state;
        for effect in effects {
            self.execute(effect);
        }
        self.snapshots.send_replace(self.state.clone());
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::ExtractTopics(document) => {
                let Some(tx) = self.sender.upgrade() else {
                    return;
                };
                let tutor = Arc::clone(&self.tutor);
                tokio::spawn(async move {
                    let event = match tutor.extract_topics(&document).await {
                        Ok(drafts) => Event::TopicsExtracted(drafts),
                        Err(err) => Event::ExtractionFailed(err.to_string()),
                    };
                    let _ = tx.send(event);
                });
            }
            Effect::GenerateLesson {
                topic_id,
                epoch,
                title,
                context,
            } => {
                let Some(tx) = self.sender.upgrade() else {
                    return;
                };
                let tutor = Arc::clone(&self.tutor);
                tokio::spawn(async move {
                    let event = match tutor.generate_lesson(&title, &context).await {
                        Ok(session) => Event::LessonGenerated {
                            topic_id,
                            epoch,
                            session,
                        },
                        Err(err) => Event::LessonFailed {
                            topic_id,
                            epoch,
                            reason: err.to_string(),
                        },
                    };
                    let _ = tx.send(event);
                });
            }
            Effect::StartFocusTicker { generation } => {
                abort(self.focus_ticker.take());
                debug!(generation, "focus ticker started");
                self.focus_ticker = Some(spawn_ticker(
                    self.sender.clone(),
                    self.tick_period,
                    move || Event::FocusTick { generation },
                ));
            }
            Effect::StopFocusTicker { generation } => {
                debug!(generation, "focus ticker stopped");
                abort(self.focus_ticker.take());
            }
            Effect::StartBreakTicker { generation } => {
                abort(self.break_ticker.take());
                debug!(generation, "break ticker started");
                self.break_ticker = Some(spawn_ticker(
                    self.sender.clone(),
                    self.tick_period,
                    move || Event::BreakTick { generation },
                ));
            }
            Effect::StopBreakTicker { generation } => {
                debug!(generation, "break ticker stopped");
                abort(self.break_ticker.take());
            }
        }
    }
}

impl Drop for StudyRuntime {
    fn drop(&mut self) {
        abort(self.focus_ticker.take());
        abort(self.break_ticker.take());
    }
}

fn abort(handle: Option<JoinHandle<()>>) {
    if let Some(handle) = handle {
        handle.abort();
    }
}

fn spawn_ticker<F>(
    sender: mpsc::WeakUnboundedSender<Event>,
    period: Duration,
    make_event: F,
) -> JoinHandle<()>
where
    F: Fn() -> Event + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let Some(tx) = sender.upgrade() else {
                break;
            };
            if tx.send(make_event()).is_err() {
                break;
            }
        }
    })
}

/// Cheap, clonable front door to a running `StudyRuntime`.
#[derive(Clone)]
pub struct StudyHandle {
    events: mpsc::UnboundedSender<Event>,
    state: watch::Receiver<AppState>,
}

impl StudyHandle {
    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn send(&self, event: Event) -> Result<(), RuntimeError> {
        self.events.send(event).map_err(|_| RuntimeError::Closed)
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.clone()
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn upload(&self, document: Document) -> Result<(), RuntimeError> {
        self.send(Event::Upload(document))
    }

    /// Read a syllabus file and upload it.
    ///
    /// # Errors
    ///
    /// Returns `UploadError` if the file cannot be read, has an unsupported
    /// type, is empty, or the runtime has stopped.
    pub async fn upload_path(&self, path: impl AsRef<Path>) -> Result<(), UploadError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| UploadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let document = Document::for_path(path, bytes)?;
        self.upload(document)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn select_topic(&self, topic_id: TopicId) -> Result<(), RuntimeError> {
        self.send(Event::SelectTopic(topic_id))
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn toggle_complete(&self, topic_id: TopicId) -> Result<(), RuntimeError> {
        self.send(Event::ToggleComplete(topic_id))
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn back(&self) -> Result<(), RuntimeError> {
        self.send(Event::Back)
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn complete(&self) -> Result<(), RuntimeError> {
        self.send(Event::Complete)
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn request_reset(&self) -> Result<(), RuntimeError> {
        self.send(Event::RequestReset)
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn confirm_reset(&self) -> Result<(), RuntimeError> {
        self.send(Event::ConfirmReset)
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn cancel_reset(&self) -> Result<(), RuntimeError> {
        self.send(Event::CancelReset)
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn answer(&self, option: impl Into<String>) -> Result<(), RuntimeError> {
        self.send(Event::Answer(option.into()))
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn advance_quiz(&self) -> Result<(), RuntimeError> {
        self.send(Event::AdvanceQuiz)
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn retake_quiz(&self) -> Result<(), RuntimeError> {
        self.send(Event::RetakeQuiz)
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn dismiss_break(&self) -> Result<(), RuntimeError> {
        self.send(Event::DismissBreak)
    }

    /// # Errors
    ///
    /// Returns `RuntimeError::Closed` if the runtime has stopped.
    pub fn dismiss_error(&self) -> Result<(), RuntimeError> {
        self.send(Event::DismissError)
    }
}
