use crate::statement::{Statement, StatementKind};
use crate::tables::*;

const STAGING_EVENTS_DROP: &str = "drop table if exists staging.s_events";
const STAGING_SONGS_DROP: &str = "drop table if exists staging.s_songs";
const SONGPLAY_DROP: &str = "drop table if exists analytics.f_songplays";
const USER_DROP: &str = "drop table if exists analytics.d_users";
const SONG_DROP: &str = "drop table if exists analytics.d_songs";
const ARTIST_DROP: &str = "drop table if exists analytics.d_artists";
const TIME_DROP: &str = "drop table if exists analytics.d_time";

fn drop_table(target: &'static str, sql: &'static str) -> Statement {
    Statement::new(StatementKind::DropTable, target, sql)
}

/// Drops of the analytics tables only, fact table first.
pub fn drop_analytics_statements() -> Vec<Statement> {
    vec![
        drop_table(F_SONGPLAYS, SONGPLAY_DROP),
        drop_table(D_SONGS, SONG_DROP),
        drop_table(D_ARTISTS, ARTIST_DROP),
        drop_table(D_USERS, USER_DROP),
        drop_table(D_TIME, TIME_DROP),
    ]
}

/// Drops of every table, staging included.
pub fn drop_all_statements() -> Vec<Statement> {
    let mut statements = vec![
        drop_table(S_EVENTS, STAGING_EVENTS_DROP),
        drop_table(S_SONGS, STAGING_SONGS_DROP),
    ];
    statements.extend(drop_analytics_statements());
    statements
}

/// The drop list for a schema rebuild. Skipping staging keeps the loaded raw
/// data, which takes hours to reload.
pub fn drop_statements(skip_staging: bool) -> Vec<Statement> {
    if skip_staging {
        drop_analytics_statements()
    } else {
        drop_all_statements()
    }
}
