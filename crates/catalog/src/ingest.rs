use crate::statement::{Statement, StatementKind};
use crate::tables::{S_EVENTS, S_SONGS};

/// Where the raw JSON lives and which role the cluster assumes to read it.
///
/// Plain data, so statement generation does not depend on how the values
/// were configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingSources {
    pub iam_role_arn: String,
    /// S3 prefix of the event log files.
    pub log_data: String,
    /// S3 prefix of the song metadata files.
    pub song_data: String,
}

/// A named generator of one bulk-load statement.
#[derive(Debug, Clone, Copy)]
pub struct CopyGenerator {
    pub target: &'static str,
    pub generate: fn(&StagingSources) -> String,
}

impl CopyGenerator {
    pub fn statement(&self, sources: &StagingSources) -> Statement {
        Statement::generated(StatementKind::Copy, self.target, (self.generate)(sources))
    }
}

pub fn staging_events_copy(sources: &StagingSources) -> String {
    format!(
        "
copy staging.s_events
from '{}'
iam_role '{}'
json 'auto ignorecase'
",
        sources.log_data, sources.iam_role_arn
    )
}

pub fn staging_songs_copy(sources: &StagingSources) -> String {
    format!(
        "
copy staging.s_songs
from '{}'
iam_role '{}'
json 'auto ignorecase'
",
        sources.song_data, sources.iam_role_arn
    )
}

/// One generator per staging table, events first.
pub const COPY_GENERATORS: [CopyGenerator; 2] = [
    CopyGenerator {
        target: S_EVENTS,
        generate: staging_events_copy,
    },
    CopyGenerator {
        target: S_SONGS,
        generate: staging_songs_copy,
    },
];

/// Generates the bulk-load statements for every staging table.
pub fn copy_statements(sources: &StagingSources) -> Vec<Statement> {
    COPY_GENERATORS
        .iter()
        .map(|generator| generator.statement(sources))
        .collect()
}
