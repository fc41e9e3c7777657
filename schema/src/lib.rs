//! Schema program for the gaming platform database.
//!
//! The schema is expressed as an ordered list of named, idempotent
//! PostgreSQL statements ([`Step`]s). Running the list any number of times
//! converges a database to the same state:
//! - the `uuid-ossp` extension
//! - the `users`, `user_stats`, `support_tickets` and `game_sessions` tables
//! - their lookup indexes
//! - `updated_at` maintenance triggers
//! - optional sample rows for non-production databases

use std::fmt;

use sea_orm_migration::prelude::{PostgresQueryBuilder, SchemaStatementBuilder};

pub mod indexes;
pub mod seed;
pub mod tables;
pub mod triggers;

pub use triggers::TriggerMode;

/// Application phase of a step. Variants are declared in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Extension,
    Tables,
    Indexes,
    Triggers,
    Seed,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Extension => "extension",
            Self::Tables => "tables",
            Self::Indexes => "indexes",
            Self::Triggers => "triggers",
            Self::Seed => "seed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named statement of the schema program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub name: String,
    pub stage: Stage,
    pub sql: String,
}

impl Step {
    fn new(name: impl Into<String>, stage: Stage, sql: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stage,
            sql: sql.into(),
        }
    }
}

/// Knobs that change which statements the program contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanOptions {
    pub seed_sample_data: bool,
    pub trigger_mode: TriggerMode,
}

/// Build the full ordered schema program.
#[must_use]
pub fn plan(options: &PlanOptions) -> Vec<Step> {
    let mut steps = vec![Step::new(
        "create_extension_uuid_ossp",
        Stage::Extension,
        r#"CREATE EXTENSION IF NOT EXISTS "uuid-ossp""#,
    )];

    steps.extend(tables::all().into_iter().map(|(name, stmt)| {
        Step::new(
            format!("create_table_{name}"),
            Stage::Tables,
            stmt.to_string(PostgresQueryBuilder),
        )
    }));

    steps.extend(indexes::all().into_iter().map(|(name, stmt)| {
        Step::new(
            format!("create_index_{name}"),
            Stage::Indexes,
            stmt.to_string(PostgresQueryBuilder),
        )
    }));

    steps.push(Step::new(
        format!("create_function_{}", triggers::TIMESTAMP_FUNCTION),
        Stage::Triggers,
        triggers::timestamp_function(),
    ));
    for table in triggers::TIMESTAMPED_TABLES {
        steps.extend(
            triggers::ensure_timestamp_trigger(table, options.trigger_mode)
                .into_iter()
                .map(|stmt| Step::new(stmt.name, Stage::Triggers, stmt.sql)),
        );
    }

    if options.seed_sample_data {
        steps.push(Step::new("seed_sample_users", Stage::Seed, seed::users_sql()));
        steps.extend(seed::SAMPLE_USERS.iter().map(|user| {
            Step::new(
                format!("seed_stats_{}", user.username),
                Stage::Seed,
                seed::stats_sql(user),
            )
        }));
    }

    steps
}
