use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    DisplayName,
    AvatarUrl,
    IsActive,
    IsVerified,
    OauthProvider,
    OauthId,
    CreatedAt,
    UpdatedAt,
    LastLoginAt,
}

#[derive(DeriveIden)]
pub enum UserStats {
    Table,
    Id,
    UserId,
    GamesPlayed,
    GamesWon,
    GamesLost,
    GamesDrawn,
    TotalScore,
    WinStreak,
    BestWinStreak,
    AverageGameDuration,
    TotalPlayTime,
    RankPoints,
    RankTier,
    Achievements,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum SupportTickets {
    Table,
    Id,
    UserId,
    Subject,
    Description,
    Status,
    Priority,
    Category,
    AssignedTo,
    Resolution,
    CreatedAt,
    UpdatedAt,
    ResolvedAt,
}

#[derive(DeriveIden)]
pub enum GameSessions {
    Table,
    Id,
    GameId,
    #[sea_orm(iden = "player1_id")]
    Player1Id,
    #[sea_orm(iden = "player2_id")]
    Player2Id,
    Status,
    WinnerId,
    GameData,
    StartedAt,
    CompletedAt,
    LastMoveAt,
}

pub const TICKET_STATUSES: [&str; 4] = ["open", "in_progress", "resolved", "closed"];
pub const TICKET_PRIORITIES: [&str; 4] = ["low", "medium", "high", "urgent"];
pub const SESSION_STATUSES: [&str; 4] = ["waiting", "active", "completed", "abandoned"];

/// UUID primary key filled by the `uuid-ossp` extension.
fn uuid_pk<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .uuid()
        .not_null()
        .primary_key()
        .default(Expr::cust("uuid_generate_v4()"))
        .to_owned()
}

fn timestamp_now<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn counter<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).integer().default(0).to_owned()
}

/// The `users` table. Has no dependencies and must be created first.
#[must_use]
pub fn users() -> TableCreateStatement {
    Table::create()
        .table(Users::Table)
        .if_not_exists()
        .col(&mut uuid_pk(Users::Id))
        .col(
            ColumnDef::new(Users::Username)
                .string_len(50)
                .not_null()
                .unique_key(),
        )
        .col(
            ColumnDef::new(Users::Email)
                .string_len(255)
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Users::PasswordHash).string_len(255).not_null())
        .col(ColumnDef::new(Users::DisplayName).string_len(100))
        .col(ColumnDef::new(Users::AvatarUrl).string_len(500))
        .col(ColumnDef::new(Users::IsActive).boolean().default(true))
        .col(ColumnDef::new(Users::IsVerified).boolean().default(false))
        .col(ColumnDef::new(Users::OauthProvider).string_len(50))
        .col(ColumnDef::new(Users::OauthId).string_len(255))
        .col(&mut timestamp_now(Users::CreatedAt))
        .col(&mut timestamp_now(Users::UpdatedAt))
        .col(ColumnDef::new(Users::LastLoginAt).timestamp_with_time_zone())
        .index(
            Index::create()
                .name("users_oauth_unique")
                .col(Users::OauthProvider)
                .col(Users::OauthId)
                .unique(),
        )
        .to_owned()
}

/// The `user_stats` table, one row per user, removed with its user.
#[must_use]
pub fn user_stats() -> TableCreateStatement {
    Table::create()
        .table(UserStats::Table)
        .if_not_exists()
        .col(&mut uuid_pk(UserStats::Id))
        .col(
            ColumnDef::new(UserStats::UserId)
                .uuid()
                .not_null()
                .unique_key(),
        )
        .col(&mut counter(UserStats::GamesPlayed))
        .col(&mut counter(UserStats::GamesWon))
        .col(&mut counter(UserStats::GamesLost))
        .col(&mut counter(UserStats::GamesDrawn))
        .col(&mut counter(UserStats::TotalScore))
        .col(&mut counter(UserStats::WinStreak))
        .col(&mut counter(UserStats::BestWinStreak))
        .col(ColumnDef::new(UserStats::AverageGameDuration).interval(None, None))
        .col(
            ColumnDef::new(UserStats::TotalPlayTime)
                .interval(None, None)
                .default("0 seconds"),
        )
        .col(ColumnDef::new(UserStats::RankPoints).integer().default(1000))
        .col(
            ColumnDef::new(UserStats::RankTier)
                .string_len(20)
                .default("Bronze"),
        )
        .col(
            ColumnDef::new(UserStats::Achievements)
                .json_binary()
                .default("[]"),
        )
        .col(&mut timestamp_now(UserStats::CreatedAt))
        .col(&mut timestamp_now(UserStats::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("user_stats_user_id_fkey")
                .from(UserStats::Table, UserStats::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

/// The `support_tickets` table. Tickets outlive their author: the owner
/// reference is nulled when the user is deleted.
#[must_use]
pub fn support_tickets() -> TableCreateStatement {
    Table::create()
        .table(SupportTickets::Table)
        .if_not_exists()
        .col(&mut uuid_pk(SupportTickets::Id))
        .col(ColumnDef::new(SupportTickets::UserId).uuid())
        .col(
            ColumnDef::new(SupportTickets::Subject)
                .string_len(255)
                .not_null(),
        )
        .col(ColumnDef::new(SupportTickets::Description).text().not_null())
        .col(
            ColumnDef::new(SupportTickets::Status)
                .string_len(20)
                .default("open")
                .check(Expr::col(SupportTickets::Status).is_in(TICKET_STATUSES)),
        )
        .col(
            ColumnDef::new(SupportTickets::Priority)
                .string_len(10)
                .default("medium")
                .check(Expr::col(SupportTickets::Priority).is_in(TICKET_PRIORITIES)),
        )
        .col(
            ColumnDef::new(SupportTickets::Category)
                .string_len(50)
                .default("general"),
        )
        .col(ColumnDef::new(SupportTickets::AssignedTo).string_len(100))
        .col(ColumnDef::new(SupportTickets::Resolution).text())
        .col(&mut timestamp_now(SupportTickets::CreatedAt))
        .col(&mut timestamp_now(SupportTickets::UpdatedAt))
        .col(ColumnDef::new(SupportTickets::ResolvedAt).timestamp_with_time_zone())
        .foreign_key(
            ForeignKey::create()
                .name("support_tickets_user_id_fkey")
                .from(SupportTickets::Table, SupportTickets::UserId)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::SetNull),
        )
        .to_owned()
}

/// The `game_sessions` table.
///
/// Player and winner references carry no delete action, so removing a user
/// that still appears in a session is rejected by the database.
#[must_use]
pub fn game_sessions() -> TableCreateStatement {
    Table::create()
        .table(GameSessions::Table)
        .if_not_exists()
        .col(&mut uuid_pk(GameSessions::Id))
        .col(
            ColumnDef::new(GameSessions::GameId)
                .string_len(50)
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(GameSessions::Player1Id).uuid().not_null())
        .col(ColumnDef::new(GameSessions::Player2Id).uuid())
        .col(
            ColumnDef::new(GameSessions::Status)
                .string_len(20)
                .default("waiting")
                .check(Expr::col(GameSessions::Status).is_in(SESSION_STATUSES)),
        )
        .col(ColumnDef::new(GameSessions::WinnerId).uuid())
        .col(ColumnDef::new(GameSessions::GameData).json_binary())
        .col(&mut timestamp_now(GameSessions::StartedAt))
        .col(ColumnDef::new(GameSessions::CompletedAt).timestamp_with_time_zone())
        .col(&mut timestamp_now(GameSessions::LastMoveAt))
        .foreign_key(
            ForeignKey::create()
                .name("game_sessions_player1_id_fkey")
                .from(GameSessions::Table, GameSessions::Player1Id)
                .to(Users::Table, Users::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("game_sessions_player2_id_fkey")
                .from(GameSessions::Table, GameSessions::Player2Id)
                .to(Users::Table, Users::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("game_sessions_winner_id_fkey")
                .from(GameSessions::Table, GameSessions::WinnerId)
                .to(Users::Table, Users::Id),
        )
        .to_owned()
}

/// All tables paired with their names, referents before referencing tables.
#[must_use]
pub fn all() -> Vec<(&'static str, TableCreateStatement)> {
    vec![
        ("users", users()),
        ("user_stats", user_stats()),
        ("support_tickets", support_tickets()),
        ("game_sessions", game_sessions()),
    ]
}
