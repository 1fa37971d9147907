//! Fully qualified names of the schemas and tables of the warehouse.

pub const STAGING_SCHEMA: &str = "staging";
pub const ANALYTICS_SCHEMA: &str = "analytics";

pub const S_EVENTS: &str = "staging.s_events";
pub const S_SONGS: &str = "staging.s_songs";

pub const F_SONGPLAYS: &str = "analytics.f_songplays";
pub const D_USERS: &str = "analytics.d_users";
pub const D_SONGS: &str = "analytics.d_songs";
pub const D_ARTISTS: &str = "analytics.d_artists";
pub const D_TIME: &str = "analytics.d_time";

/// Staging tables, in the order they are created.
pub const STAGING_TABLES: [&str; 2] = [S_EVENTS, S_SONGS];

/// Analytics tables, in the order they are created. Every table only
/// references tables listed before it.
pub const ANALYTICS_TABLES: [&str; 5] = [D_TIME, D_USERS, D_ARTISTS, D_SONGS, F_SONGPLAYS];
