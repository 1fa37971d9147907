use crate::statement::{Statement, StatementKind};
use crate::tables::*;

const STAGING_SCHEMA_CREATE: &str = "create schema if not exists staging";
const ANALYTICS_SCHEMA_CREATE: &str = "create schema if not exists analytics";

const STAGING_EVENTS_CREATE: &str = "
create table if not exists staging.s_events (
    artist varchar (256),
    auth varchar (128),
    firstname varchar (128),
    gender varchar (10),
    iteminsession integer,
    lastname varchar (128),
    length float,
    level varchar (128),
    location varchar (128),
    method varchar (10),
    page varchar (128),
    registration bigint,
    sessionid integer,
    song varchar (256),
    status integer,
    ts bigint,
    useragent varchar (256),
    userid bigint
)
diststyle all
";

const STAGING_SONGS_CREATE: &str = "
create table if not exists staging.s_songs (
    song_id varchar (128),
    num_songs integer,
    title varchar (512),
    artist_name varchar (512),
    year integer,
    duration float,
    artist_id varchar (128),
    artist_longitude float,
    artist_latitude float,
    artist_location varchar (512)
)
distkey (artist_name)
";

const TIME_CREATE: &str = "
create table if not exists analytics.d_time (
    start_time timestamp primary key,
    hour smallint not null,
    day smallint not null,
    week smallint not null,
    month smallint not null,
    year smallint not null,
    weekday smallint not null
)
distkey (start_time)
";

const USER_CREATE: &str = "
create table if not exists analytics.d_users (
    user_id integer primary key,
    first_name varchar (128) not null,
    last_name varchar (128) not null,
    gender varchar (128) not null,
    level varchar (128)
)
distkey (user_id)
";

const ARTIST_CREATE: &str = "
create table if not exists analytics.d_artists (
    artist_id varchar (128) primary key,
    name varchar (512) not null,
    location varchar (512),
    latitude float,
    longitude float
)
distkey (artist_id)
";

const SONG_CREATE: &str = "
create table if not exists analytics.d_songs (
    song_id varchar (128) primary key,
    title varchar (512) not null,
    artist_id varchar (128) not null,
    year smallint,
    duration float not null,
    foreign key (artist_id) references analytics.d_artists (artist_id)
)
distkey (song_id)
";

const SONGPLAY_CREATE: &str = "
create table if not exists analytics.f_songplays (
    songplay_id integer identity (0, 1) primary key,
    start_time timestamp not null,
    user_id bigint not null,
    level varchar (128),
    song_id varchar (128),
    artist_id varchar (128),
    session_id bigint,
    location varchar (512),
    user_agent varchar (512),
    foreign key (song_id) references analytics.d_songs (song_id),
    foreign key (artist_id) references analytics.d_artists (artist_id),
    foreign key (user_id) references analytics.d_users (user_id),
    foreign key (start_time) references analytics.d_time (start_time)
)
diststyle even
";

fn create(target: &'static str, sql: &'static str) -> Statement {
    Statement::new(StatementKind::CreateTable, target, sql)
}

/// Creates both schemas, then the staging tables, then the analytics tables
/// in foreign-key dependency order.
pub fn create_statements() -> Vec<Statement> {
    vec![
        Statement::new(StatementKind::CreateSchema, STAGING_SCHEMA, STAGING_SCHEMA_CREATE),
        Statement::new(StatementKind::CreateSchema, ANALYTICS_SCHEMA, ANALYTICS_SCHEMA_CREATE),
        create(S_EVENTS, STAGING_EVENTS_CREATE),
        create(S_SONGS, STAGING_SONGS_CREATE),
        create(D_TIME, TIME_CREATE),
        create(D_USERS, USER_CREATE),
        create(D_ARTISTS, ARTIST_CREATE),
        create(D_SONGS, SONG_CREATE),
        create(F_SONGPLAYS, SONGPLAY_CREATE),
    ]
}
