//! Application module: the scenario replay driver behind the `msgqueue` binary

pub mod cli;
pub mod error;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod startup;
