use std::fmt;
use std::str::FromStr;

/// Shared trigger function that stamps `updated_at` on the row being written.
pub const TIMESTAMP_FUNCTION: &str = "update_updated_at_column";

/// Tables whose `updated_at` column is maintained by the database.
pub const TIMESTAMPED_TABLES: [&str; 3] = ["users", "user_stats", "support_tickets"];

/// How a trigger is (re)defined on a database that may already have it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriggerMode {
    /// `DROP TRIGGER IF EXISTS` followed by `CREATE TRIGGER`. Works on any
    /// supported PostgreSQL version.
    #[default]
    DropAndCreate,
    /// A single `CREATE OR REPLACE TRIGGER` (PostgreSQL 14+).
    CreateOrReplace,
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DropAndCreate => f.write_str("drop_create"),
            Self::CreateOrReplace => f.write_str("replace"),
        }
    }
}

impl FromStr for TriggerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop_create" => Ok(Self::DropAndCreate),
            "replace" => Ok(Self::CreateOrReplace),
            other => Err(format!(
                "unknown trigger mode '{other}' (expected 'drop_create' or 'replace')"
            )),
        }
    }
}

#[must_use]
pub fn timestamp_function() -> String {
    format!(
        "CREATE OR REPLACE FUNCTION {TIMESTAMP_FUNCTION}() \
         RETURNS TRIGGER AS $$ \
         BEGIN \
             NEW.updated_at = CURRENT_TIMESTAMP; \
             RETURN NEW; \
         END; \
         $$ LANGUAGE plpgsql"
    )
}

/// Name of the `updated_at` trigger installed on `table`.
#[must_use]
pub fn trigger_name(table: &str) -> String {
    format!("update_{table}_updated_at")
}

/// A named statement produced while ensuring a trigger.
pub struct TriggerStatement {
    pub name: String,
    pub sql: String,
}

/// Statements that leave `table` with exactly one `updated_at` trigger
/// calling [`TIMESTAMP_FUNCTION`].
#[must_use]
pub fn ensure_timestamp_trigger(table: &str, mode: TriggerMode) -> Vec<TriggerStatement> {
    let trigger = trigger_name(table);
    let body = format!(
        "TRIGGER {trigger} BEFORE UPDATE ON {table} \
         FOR EACH ROW EXECUTE FUNCTION {TIMESTAMP_FUNCTION}()"
    );

    match mode {
        TriggerMode::DropAndCreate => vec![
            TriggerStatement {
                name: format!("drop_trigger_{trigger}"),
                sql: format!("DROP TRIGGER IF EXISTS {trigger} ON {table}"),
            },
            TriggerStatement {
                name: format!("create_trigger_{trigger}"),
                sql: format!("CREATE {body}"),
            },
        ],
        TriggerMode::CreateOrReplace => vec![TriggerStatement {
            name: format!("create_trigger_{trigger}"),
            sql: format!("CREATE OR REPLACE {body}"),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_sets_updated_at() {
        let sql = timestamp_function();
        assert!(sql.starts_with("CREATE OR REPLACE FUNCTION update_updated_at_column()"));
        assert!(sql.contains("NEW.updated_at = CURRENT_TIMESTAMP;"));
        assert!(sql.ends_with("LANGUAGE plpgsql"));
    }

    #[test]
    fn drop_and_create_pairs_statements() {
        let stmts = ensure_timestamp_trigger("users", TriggerMode::DropAndCreate);
        assert_eq!(stmts.len(), 2);
        assert_eq!(stmts[0].name, "drop_trigger_update_users_updated_at");
        assert_eq!(
            stmts[0].sql,
            "DROP TRIGGER IF EXISTS update_users_updated_at ON users"
        );
        assert_eq!(stmts[1].name, "create_trigger_update_users_updated_at");
        assert_eq!(
            stmts[1].sql,
            "CREATE TRIGGER update_users_updated_at BEFORE UPDATE ON users \
             FOR EACH ROW EXECUTE FUNCTION update_updated_at_column()"
        );
    }

    #[test]
    fn replace_is_a_single_statement() {
        let stmts = ensure_timestamp_trigger("user_stats", TriggerMode::CreateOrReplace);
        assert_eq!(stmts.len(), 1);
        assert!(
            stmts[0]
                .sql
                .starts_with("CREATE OR REPLACE TRIGGER update_user_stats_updated_at")
        );
    }

    #[test]
    fn mode_names_round_trip() {
        assert_eq!("drop_create".parse::<TriggerMode>(), Ok(TriggerMode::DropAndCreate));
        assert_eq!("replace".parse::<TriggerMode>(), Ok(TriggerMode::CreateOrReplace));
        assert_eq!(TriggerMode::CreateOrReplace.to_string(), "replace");
        assert!("Replace".parse::<TriggerMode>().is_err());
    }
}
