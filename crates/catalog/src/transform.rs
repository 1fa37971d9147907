use crate::statement::{Statement, StatementKind};
use crate::tables::*;

// Songs are matched to events on artist name, title and length. The song
// side is deduplicated first, since the raw song files repeat entries.
const SONGPLAY_INSERT: &str = "
insert into analytics.f_songplays (
    start_time,
    user_id,
    level,
    song_id,
    artist_id,
    session_id,
    location,
    user_agent
)
select
    timestamp 'epoch' + e.ts / 1000 * interval '1 second' as start_time,
    e.userid as user_id,
    e.level,
    s.song_id,
    s.artist_id,
    e.sessionid as session_id,
    e.location,
    e.useragent as user_agent
from staging.s_events as e
left join (
    select
        any_value(d.song_id) as song_id,
        any_value(d.artist_id) as artist_id,
        d.artist_name,
        d.title,
        d.duration
    from (
        select distinct *
        from staging.s_songs
    ) as d
    group by d.title, d.artist_name, d.duration
) as s
    on e.artist = s.artist_name
    and e.song = s.title
    and e.length = s.duration
where e.page = 'NextSong'
";

// The latest event of each user decides their current level.
const USER_INSERT: &str = "
insert into analytics.d_users (
    user_id,
    first_name,
    last_name,
    gender,
    level
)
select distinct
    s.userid,
    s.firstname,
    s.lastname,
    s.gender,
    s.level
from staging.s_events as s
inner join (
    select userid, max(ts) as latest
    from staging.s_events
    where userid is not null
    group by userid
) as t
    on t.latest = s.ts
    and t.userid = s.userid
";

const SONG_INSERT: &str = "
insert into analytics.d_songs (
    song_id,
    title,
    artist_id,
    year,
    duration
)
select
    g.song_id,
    g.title,
    g.artist_id,
    g.year,
    g.duration
from (
    select
        d.title,
        d.duration,
        any_value(d.song_id) as song_id,
        any_value(d.artist_id) as artist_id,
        any_value(d.year) as year
    from (
        select distinct *
        from staging.s_songs
    ) as d
    group by d.title, d.artist_name, d.duration
) as g
";

const ARTIST_INSERT: &str = "
insert into analytics.d_artists (
    artist_id,
    name,
    location,
    latitude,
    longitude
)
select
    d.artist_id,
    any_value(d.artist_name) as name,
    any_value(d.artist_location) as location,
    any_value(d.artist_latitude) as latitude,
    any_value(d.artist_longitude) as longitude
from (
    select distinct *
    from staging.s_songs
) as d
group by d.artist_id
";

// Derived from the staging events, so it does not depend on the fact table.
const TIME_INSERT: &str = "
insert into analytics.d_time (
    start_time,
    hour,
    day,
    week,
    month,
    year,
    weekday
)
select
    dg.start_time,
    extract(hour from dg.start_time) as hour,
    extract(day from dg.start_time) as day,
    extract(week from dg.start_time) as week,
    extract(month from dg.start_time) as month,
    extract(year from dg.start_time) as year,
    extract(weekday from dg.start_time) as weekday
from (
    select distinct timestamp 'epoch' + d.ts / 1000 * interval '1 second' as start_time
    from staging.s_events as d
    where d.ts is not null
) as dg
";

fn insert(target: &'static str, sql: &'static str) -> Statement {
    Statement::new(StatementKind::Insert, target, sql)
}

/// The transforms from staging into the analytics tables: songplays, users,
/// songs, artists, time. Each reads only from staging.
pub fn insert_statements() -> Vec<Statement> {
    vec![
        insert(F_SONGPLAYS, SONGPLAY_INSERT),
        insert(D_USERS, USER_INSERT),
        insert(D_SONGS, SONG_INSERT),
        insert(D_ARTISTS, ARTIST_INSERT),
        insert(D_TIME, TIME_INSERT),
    ]
}
