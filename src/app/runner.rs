//! Replays scenario steps against a message queue

use crate::app::error::{AppError, AppResult};
use crate::app::report::{Outcome, Report};
use crate::app::scenario::{Scenario, Step};
use crate::core::validation::{validate_size, validate_u32};
use crate::queue::{MessageQueue, MessageSpec, QueueError};
use serde_json::Value;

pub struct ScenarioRunner {
    queue: MessageQueue<Value>,
    report: Report,
}

impl ScenarioRunner {
    pub fn new(history_size: usize) -> Self {
        Self {
            queue: MessageQueue::new(history_size),
            report: Report::new(history_size),
        }
    }

    /// Replay every step of `scenario` in order
    ///
    /// Stops at the first step that fails; the error names its position.
    pub fn run(mut self, scenario: &Scenario) -> AppResult<Report> {
        log::info!("Replaying {} step(s)", scenario.steps.len());
        for (position, step) in scenario.steps.iter().enumerate() {
            let number = position + 1;
            log::debug!("Step {}: {}", number, step.op());
            let outcome = self.apply(step).map_err(|e| AppError::Scenario {
                message: format!("step {}: {}", number, e),
            })?;
            self.report.push(number, outcome);
        }
        Ok(self.report)
    }

    /// The queue as left by the steps replayed so far
    pub fn queue(&self) -> &MessageQueue<Value> {
        &self.queue
    }

    fn apply(&mut self, step: &Step) -> Result<Outcome, StepError> {
        let outcome = match step {
            Step::Insert {
                priority,
                message_type,
                plays,
                capacity,
                payload,
            } => {
                let spec = MessageSpec::new(
                    validate_u32(*priority, "priority")?,
                    validate_u32(*message_type, "type")?,
                )
                .with_play_count(validate_u32(*plays, "plays")?)
                .with_capacity(validate_size(*capacity, "capacity")?);
                self.queue.insert(spec, payload.clone())?;
                Outcome::Insert {
                    priority: spec.priority,
                    message_type: spec.message_type,
                    plays: spec.play_count,
                }
            }
            Step::Pop { count } => {
                let count = validate_size(*count, "count")?;
                let mut messages = Vec::new();
                for _ in 0..count {
                    let message = self.queue.pop();
                    let empty = message.is_none();
                    messages.push(message);
                    // Popping an empty queue again changes nothing
                    if empty {
                        break;
                    }
                }
                Outcome::Pop { messages }
            }
            Step::Drain => {
                let messages = std::iter::from_fn(|| self.queue.pop()).collect();
                Outcome::Drain { messages }
            }
            Step::Exist => Outcome::Exist {
                exist: self.queue.exist(),
            },
            Step::History => Outcome::History {
                entries: self.queue.history().to_vec(),
            },
            Step::Stats => Outcome::Stats {
                stats: self.queue.stats(),
            },
            Step::Reset { history_size } => {
                let history_size = match history_size {
                    Some(size) => validate_size(*size, "history-size")?,
                    None => self.queue.history_size(),
                };
                self.queue.reset(history_size);
                Outcome::Reset { history_size }
            }
        };
        Ok(outcome)
    }
}

#[derive(Debug, thiserror::Error)]
enum StepError {
    #[error(transparent)]
    Validation(#[from] crate::core::validation::ValidationError),

    #[error(transparent)]
    Queue(#[from] QueueError),
}
