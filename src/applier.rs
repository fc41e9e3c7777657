//! Executes a schema program against an open connection.

use schema::{Stage, Step};
use sea_orm::ConnectionTrait;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::errors::InitError;

/// Outcome of a successful [`apply`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    executed: BTreeMap<Stage, usize>,
    pub elapsed: Duration,
}

impl ApplyReport {
    /// Statements executed in `stage`.
    #[must_use]
    pub fn executed(&self, stage: Stage) -> usize {
        self.executed.get(&stage).copied().unwrap_or(0)
    }

    /// Statements executed across all stages.
    #[must_use]
    pub fn total(&self) -> usize {
        self.executed.values().sum()
    }
}

/// Run `steps` in order on `conn`.
///
/// Each statement commits on its own. The first failure stops the run and
/// is returned as [`InitError::Statement`]; statements already executed stay
/// applied, and since every step is idempotent a later run resumes cleanly.
/// The connection is borrowed, never closed.
///
/// # Errors
///
/// Returns the first statement failure.
pub async fn apply<C>(conn: &C, steps: &[Step]) -> Result<ApplyReport, InitError>
where
    C: ConnectionTrait,
{
    let started = Instant::now();
    let mut report = ApplyReport::default();

    for stage_steps in steps.chunk_by(|a, b| a.stage == b.stage) {
        let stage = stage_steps[0].stage;

        for step in stage_steps {
            tracing::debug!(step = %step.name, %stage, "Executing statement");

            conn.execute_unprepared(&step.sql).await.map_err(|source| {
                tracing::error!(step = %step.name, %stage, error = %source, "Statement failed");
                InitError::Statement {
                    step: step.name.clone(),
                    source,
                }
            })?;

            *report.executed.entry(stage).or_default() += 1;
        }

        tracing::info!(%stage, statements = stage_steps.len(), "Stage applied");
    }

    report.elapsed = started.elapsed();
    Ok(report)
}
