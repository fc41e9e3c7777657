use sea_orm_migration::prelude::*;

use crate::tables::{GameSessions, SupportTickets, UserStats, Users};

fn index<T, C>(
    name: &'static str,
    table: T,
    columns: impl IntoIterator<Item = C>,
) -> (&'static str, IndexCreateStatement)
where
    T: IntoTableRef,
    C: IntoIndexColumn,
{
    let mut stmt = Index::create();
    stmt.if_not_exists().name(name).table(table);
    for column in columns {
        stmt.col(column);
    }
    (name, stmt)
}

/// Lookup indexes for every table, in table creation order, paired with
/// their names.
#[must_use]
pub fn all() -> Vec<(&'static str, IndexCreateStatement)> {
    vec![
        index("idx_users_email", Users::Table, [Users::Email]),
        index("idx_users_username", Users::Table, [Users::Username]),
        index(
            "idx_users_oauth",
            Users::Table,
            [Users::OauthProvider, Users::OauthId],
        ),
        index("idx_users_active", Users::Table, [Users::IsActive]),
        index("idx_user_stats_user_id", UserStats::Table, [UserStats::UserId]),
        index(
            "idx_user_stats_rank_points",
            UserStats::Table,
            [(UserStats::RankPoints, IndexOrder::Desc)],
        ),
        index(
            "idx_support_tickets_user_id",
            SupportTickets::Table,
            [SupportTickets::UserId],
        ),
        index(
            "idx_support_tickets_status",
            SupportTickets::Table,
            [SupportTickets::Status],
        ),
        index(
            "idx_support_tickets_created_at",
            SupportTickets::Table,
            [(SupportTickets::CreatedAt, IndexOrder::Desc)],
        ),
        index(
            "idx_game_sessions_game_id",
            GameSessions::Table,
            [GameSessions::GameId],
        ),
        index(
            "idx_game_sessions_player1",
            GameSessions::Table,
            [GameSessions::Player1Id],
        ),
        index(
            "idx_game_sessions_player2",
            GameSessions::Table,
            [GameSessions::Player2Id],
        ),
        index(
            "idx_game_sessions_status",
            GameSessions::Table,
            [GameSessions::Status],
        ),
        index(
            "idx_game_sessions_started_at",
            GameSessions::Table,
            [(GameSessions::StartedAt, IndexOrder::Desc)],
        ),
    ]
}
