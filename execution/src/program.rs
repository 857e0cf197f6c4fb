//! Program lifecycle.
//!
//! A [Program] is a unit of interactive terminal behavior. It is driven first by a single
//! entry call and then by one call per line of user input, doing all the work it can before
//! it needs the next line. [Runner] owns a program and enforces the lifecycle around it:
//!
//! ```text
//!              begin -> false            continue_with -> false
//!   NotStarted ---------------> Running <----------------------+
//!        |                         |  \______________________/
//!        | begin -> true           | continue_with -> true
//!        v                         v
//!    Completed <-------------------+
//! ```
//!
//! `Completed` is terminal: every later call fails with [ProgramError::AlreadyCompleted].

use crate::{rng::RandomSource, transcript::Transcript};
use gamblesim_types::{LedgerError, PlayerData};
use thiserror::Error;

/// Lifecycle contract violations. These only ever come from a dispatcher bug.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProgramError {
    #[error("program was already started")]
    AlreadyStarted,
    #[error("program received input before it was started")]
    NotStarted,
    #[error("program was already completed")]
    AlreadyCompleted,
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Everything a program may touch while it runs.
///
/// Programs never hold on to session state between calls; the dispatcher lends it for the
/// duration of each call.
pub struct Table<'a> {
    pub player: &'a mut PlayerData,
    pub rng: &'a mut dyn RandomSource,
    pub out: &'a mut Transcript,
}

/// Variant-specific behavior behind the lifecycle.
///
/// Implementations return `Ok(true)` once they need no further input.
pub trait Program {
    /// Entry behavior: everything that can be done before the first input line.
    fn execute(&mut self, table: &mut Table<'_>) -> Result<bool, ProgramError>;

    /// Consumes exactly one line of input.
    fn process_input(&mut self, table: &mut Table<'_>, input: &str) -> Result<bool, ProgramError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    NotStarted,
    Running,
    Completed,
}

/// Owns a [Program] and enforces its lifecycle.
#[derive(Debug)]
pub struct Runner<P> {
    program: P,
    lifecycle: Lifecycle,
}

impl<P: Program> Runner<P> {
    pub fn new(program: P) -> Self {
        Self {
            program,
            lifecycle: Lifecycle::NotStarted,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_started(&self) -> bool {
        self.lifecycle != Lifecycle::NotStarted
    }

    pub fn is_completed(&self) -> bool {
        self.lifecycle == Lifecycle::Completed
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    /// Starts the program. Returns true if it completed without needing any input.
    pub fn begin(&mut self, table: &mut Table<'_>) -> Result<bool, ProgramError> {
        match self.lifecycle {
            Lifecycle::Completed => return Err(ProgramError::AlreadyCompleted),
            Lifecycle::Running => return Err(ProgramError::AlreadyStarted),
            Lifecycle::NotStarted => {}
        }
        self.lifecycle = Lifecycle::Running;
        let complete = self.program.execute(table)?;
        if complete {
            self.lifecycle = Lifecycle::Completed;
        }
        Ok(complete)
    }

    /// Feeds one line of input. Returns true once the program has completed.
    pub fn continue_with(
        &mut self,
        table: &mut Table<'_>,
        input: &str,
    ) -> Result<bool, ProgramError> {
        match self.lifecycle {
            Lifecycle::Completed => return Err(ProgramError::AlreadyCompleted),
            Lifecycle::NotStarted => return Err(ProgramError::NotStarted),
            Lifecycle::Running => {}
        }
        let complete = self.program.process_input(table, input)?;
        if complete {
            self.lifecycle = Lifecycle::Completed;
        }
        Ok(complete)
    }
}
