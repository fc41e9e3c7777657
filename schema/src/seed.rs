//! Sample rows for non-production databases.
//!
//! Every statement is guarded with `ON CONFLICT DO NOTHING`, so re-running
//! the seed never duplicates rows or fails on existing ones.

/// Placeholder bcrypt hash shared by the sample accounts.
const SAMPLE_PASSWORD_HASH: &str = "$2b$12$LQv3c1yqBWVHxkd0LHAkCOYz6TtxMQJqhN8/LewdBPj/VjPyV8Eim";

pub struct SampleUser {
    pub username: &'static str,
    pub email: &'static str,
    pub display_name: &'static str,
    pub games_played: i32,
    pub games_won: i32,
    pub games_lost: i32,
    pub total_score: i32,
    pub rank_points: i32,
}

#[rustfmt::skip]
pub const SAMPLE_USERS: &[SampleUser] = &[
    SampleUser { username: "testuser1", email: "test1@example.com", display_name: "Test User 1", games_played: 10, games_won: 6, games_lost: 3, total_score: 600, rank_points: 1200 },
    SampleUser { username: "testuser2", email: "test2@example.com", display_name: "Test User 2", games_played: 8,  games_won: 3, games_lost: 4, total_score: 300, rank_points: 950 },
];

/// Inserts both sample users in one statement, verified, keyed on username.
#[must_use]
pub fn users_sql() -> String {
    let rows: Vec<String> = SAMPLE_USERS
        .iter()
        .map(|user| {
            format!(
                "('{username}', '{email}', '{SAMPLE_PASSWORD_HASH}', '{display_name}', true)",
                username = user.username,
                email = user.email,
                display_name = user.display_name,
            )
        })
        .collect();

    format!(
        "INSERT INTO users (username, email, password_hash, display_name, is_verified) \
         VALUES {} \
         ON CONFLICT (username) DO NOTHING",
        rows.join(", ")
    )
}

/// Inserts the stats row for `user`, resolving its id by username.
#[must_use]
pub fn stats_sql(user: &SampleUser) -> String {
    format!(
        "INSERT INTO user_stats (user_id, games_played, games_won, games_lost, total_score, rank_points) \
         SELECT u.id, {games_played}, {games_won}, {games_lost}, {total_score}, {rank_points} \
         FROM users u \
         WHERE u.username = '{username}' \
         ON CONFLICT (user_id) DO NOTHING",
        games_played = user.games_played,
        games_won = user.games_won,
        games_lost = user.games_lost,
        total_score = user.total_score,
        rank_points = user.rank_points,
        username = user.username,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_insert_is_conflict_guarded() {
        let sql = users_sql();
        assert!(sql.contains("('testuser1', 'test1@example.com'"));
        assert!(sql.contains("('testuser2', 'test2@example.com'"));
        assert!(sql.ends_with("ON CONFLICT (username) DO NOTHING"));
    }

    #[test]
    fn stats_follow_their_user() {
        let sql = stats_sql(&SAMPLE_USERS[1]);
        assert!(sql.contains("SELECT u.id, 8, 3, 4, 300, 950"));
        assert!(sql.contains("WHERE u.username = 'testuser2'"));
        assert!(sql.ends_with("ON CONFLICT (user_id) DO NOTHING"));
    }
}
