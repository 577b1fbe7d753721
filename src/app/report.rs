//! Replay report and its text/JSON rendering

use crate::app::error::AppResult;
use crate::queue::{Message, QueueStats};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// What a single scenario step produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Outcome {
    Insert {
        priority: u32,
        message_type: u32,
        plays: u32,
    },
    /// One entry per pop performed, ending early with a single `None` once
    /// the queue is empty
    Pop {
        messages: Vec<Option<Message<Value>>>,
    },
    Drain {
        messages: Vec<Message<Value>>,
    },
    Exist {
        exist: bool,
    },
    History {
        entries: Vec<Message<Value>>,
    },
    Stats {
        stats: QueueStats,
    },
    Reset {
        history_size: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    /// 1-based position of the step in the scenario
    pub step: usize,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// History size the queue started with
    pub history_size: usize,
    pub steps: Vec<StepOutcome>,
}

impl Report {
    pub fn new(history_size: usize) -> Self {
        Self {
            history_size,
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, step: usize, outcome: Outcome) {
        self.steps.push(StepOutcome { step, outcome });
    }

    /// Every message popped over the whole replay, in order
    pub fn popped(&self) -> impl Iterator<Item = &Message<Value>> {
        self.steps.iter().flat_map(|step| {
            let (pops, drained): (&[Option<Message<Value>>], &[Message<Value>]) =
                match &step.outcome {
                    Outcome::Pop { messages } => (messages, &[]),
                    Outcome::Drain { messages } => (&[], messages),
                    _ => (&[], &[]),
                };
            pops.iter().flatten().chain(drained)
        })
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", "history size:".bold(), self.history_size)?;
        for step in &self.steps {
            write_step(f, step)?;
        }
        Ok(())
    }
}

fn write_step(f: &mut fmt::Formatter<'_>, step: &StepOutcome) -> fmt::Result {
    let label = format!("[{}]", step.step).dimmed();
    match &step.outcome {
        Outcome::Insert {
            priority,
            message_type,
            plays,
        } => writeln!(
            f,
            "{} {} priority {} type {} plays {}",
            label,
            "insert".green(),
            priority,
            message_type,
            plays
        ),
        Outcome::Pop { messages } => {
            for message in messages {
                match message {
                    Some(message) => {
                        writeln!(f, "{} {} {}", label, "pop".cyan(), format_message(message))?
                    }
                    None => writeln!(f, "{} {} {}", label, "pop".cyan(), "(empty)".dimmed())?,
                }
            }
            Ok(())
        }
        Outcome::Drain { messages } => {
            writeln!(
                f,
                "{} {} {} message(s)",
                label,
                "drain".cyan(),
                messages.len()
            )?;
            write_messages(f, messages)
        }
        Outcome::Exist { exist } => writeln!(f, "{} {} {}", label, "exist".blue(), exist),
        Outcome::History { entries } => {
            writeln!(
                f,
                "{} {} {} entr{}",
                label,
                "history".blue(),
                entries.len(),
                if entries.len() == 1 { "y" } else { "ies" }
            )?;
            write_messages(f, entries)
        }
        Outcome::Stats { stats } => writeln!(
            f,
            "{} {} priorities {} buckets {} messages {} plays {} history {}",
            label,
            "stats".blue(),
            stats.priority_levels,
            stats.type_buckets,
            stats.pending_messages,
            stats.pending_plays,
            stats.history_len
        ),
        Outcome::Reset { history_size } => writeln!(
            f,
            "{} {} history size {}",
            label,
            "reset".yellow(),
            history_size
        ),
    }
}

fn write_messages(f: &mut fmt::Formatter<'_>, messages: &[Message<Value>]) -> fmt::Result {
    for message in messages {
        writeln!(f, "    {}", format_message(message))?;
    }
    Ok(())
}

/// `p5 t2 left 1: payload`, strings shown without quotes
fn format_message(message: &Message<Value>) -> String {
    let payload = match &message.payload {
        Value::String(text) => text.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    };
    format!(
        "p{} t{} left {}: {}",
        message.priority, message.message_type, message.remaining_plays, payload
    )
}
