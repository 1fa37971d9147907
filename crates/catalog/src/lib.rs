//! # Statement Catalog
//!
//! The fixed SQL of the warehouse, as ordered lists of named statements:
//! schema drops and creates, bulk loads into staging, and the transforms that
//! populate the star schema. The order of each list is its execution plan.

pub mod create;
pub mod drop;
pub mod ingest;
pub mod statement;
pub mod tables;
pub mod transform;

pub use create::create_statements;
pub use drop::{drop_all_statements, drop_analytics_statements, drop_statements};
pub use ingest::{COPY_GENERATORS, CopyGenerator, StagingSources, copy_statements};
pub use statement::{Statement, StatementKind};
pub use transform::insert_statements;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::*;

    fn sources() -> StagingSources {
        StagingSources {
            iam_role_arn: "arn:aws:iam::123456789012:role/dwhRole".to_string(),
            log_data: "s3://udacity-dend/log_data".to_string(),
            song_data: "s3://udacity-dend/song_data".to_string(),
        }
    }

    fn targets(statements: &[Statement]) -> Vec<&'static str> {
        statements.iter().map(|s| s.target).collect()
    }

    /// Tables named in `references <table>` clauses of a statement.
    fn referenced_tables(sql: &str) -> Vec<String> {
        sql.split("references ")
            .skip(1)
            .filter_map(|rest| rest.split_whitespace().next())
            .map(|table| table.trim_end_matches([',', '(']).to_string())
            .collect()
    }

    #[test]
    fn drop_list_sizes() {
        assert_eq!(drop_statements(false).len(), 7);
        assert_eq!(drop_statements(true).len(), 5);
        assert_eq!(drop_statements(false), drop_all_statements());
        assert_eq!(drop_statements(true), drop_analytics_statements());
    }

    #[test]
    fn analytics_drops_never_touch_staging() {
        for statement in drop_analytics_statements() {
            assert!(!statement.sql.contains("staging."), "{}", statement.name());
        }
    }

    #[test]
    fn every_drop_and_create_is_guarded() {
        for statement in drop_all_statements() {
            assert!(statement.sql.contains("if exists"), "{}", statement.name());
        }
        for statement in create_statements() {
            assert!(statement.sql.contains("if not exists"), "{}", statement.name());
        }
    }

    #[test]
    fn creates_schemas_before_tables() {
        let creates = create_statements();
        assert_eq!(creates[0].kind, StatementKind::CreateSchema);
        assert_eq!(creates[1].kind, StatementKind::CreateSchema);
        assert!(creates[2..].iter().all(|s| s.kind == StatementKind::CreateTable));
        let tables: Vec<_> = STAGING_TABLES.iter().chain(ANALYTICS_TABLES.iter()).copied().collect();
        assert_eq!(targets(&creates[2..]), tables);
    }

    #[test]
    fn referenced_tables_are_created_first() {
        let creates = create_statements();
        for (idx, statement) in creates.iter().enumerate() {
            for referenced in referenced_tables(&statement.sql) {
                let created_at = creates
                    .iter()
                    .position(|s| s.target == referenced)
                    .unwrap_or_else(|| panic!("{referenced} is never created"));
                assert!(created_at < idx, "{} created before {referenced}", statement.target);
            }
        }
    }

    #[test]
    fn referenced_tables_are_dropped_last() {
        let drops = drop_all_statements();
        for statement in create_statements() {
            let Some(dropped_at) = drops.iter().position(|d| d.target == statement.target) else {
                continue;
            };
            for referenced in referenced_tables(&statement.sql) {
                let referenced_at = drops.iter().position(|d| d.target == referenced).unwrap();
                assert!(dropped_at < referenced_at, "{} dropped after {referenced}", statement.target);
            }
        }
    }

    #[test]
    fn copy_statements_substitute_sources_verbatim() {
        let sources = sources();
        let copies = copy_statements(&sources);
        assert_eq!(copies.len(), COPY_GENERATORS.len());
        assert_eq!(targets(&copies), vec![S_EVENTS, S_SONGS]);

        assert!(copies[0].sql.contains("from 's3://udacity-dend/log_data'"));
        assert!(copies[1].sql.contains("from 's3://udacity-dend/song_data'"));
        for copy in &copies {
            assert_eq!(copy.kind, StatementKind::Copy);
            assert!(copy.sql.contains("iam_role 'arn:aws:iam::123456789012:role/dwhRole'"));
            assert!(copy.sql.contains("json 'auto ignorecase'"));
        }
    }

    #[test]
    fn insert_order_and_sources() {
        let inserts = insert_statements();
        assert_eq!(targets(&inserts), vec![F_SONGPLAYS, D_USERS, D_SONGS, D_ARTISTS, D_TIME]);
        for insert in &inserts {
            assert!(insert.sql.contains(&format!("insert into {}", insert.target)));
            // Every transform reads from staging only.
            let body = insert.sql.split_once("select").map(|(_, b)| b).unwrap();
            assert!(!body.contains("analytics."), "{}", insert.name());
        }
        assert!(inserts[0].sql.contains("where e.page = 'NextSong'"));
    }

    #[test]
    fn statement_names() {
        let drop = &drop_all_statements()[0];
        assert_eq!(drop.name(), "drop staging.s_events");
        assert_eq!(create_statements()[0].name(), "create schema staging");
    }
}
