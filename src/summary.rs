use comfy_table::{Cell, Table};
use pipeline::{Outcome, RunReport};

/// Renders one row per statement: name, status, rows affected, duration, error.
pub fn render_summary(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Statement", "Status", "Rows", "Elapsed (ms)", "Error"]);

    for statement in &report.statements {
        let (status, rows, error) = match &statement.outcome {
            Outcome::Succeeded { rows_affected } => ("ok", rows_affected.to_string(), String::new()),
            Outcome::Failed { error } => ("FAILED", String::new(), error.clone()),
        };
        table.add_row(vec![
            Cell::new(&statement.name),
            Cell::new(status),
            Cell::new(rows),
            Cell::new(statement.elapsed_ms),
            Cell::new(error),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::drop_all_statements;
    use pipeline::StatementOutcome;
    use std::time::Duration;

    #[test]
    fn lists_every_statement() {
        let statements = drop_all_statements();
        let mut report = RunReport::start();
        report.record(StatementOutcome::new(
            &statements[0],
            Outcome::Succeeded { rows_affected: 0 },
            Duration::from_millis(5),
        ));
        report.record(StatementOutcome::new(
            &statements[1],
            Outcome::Failed {
                error: "permission denied".to_string(),
            },
            Duration::from_millis(7),
        ));

        let rendered = render_summary(&report).to_string();
        assert!(rendered.contains("drop staging.s_events"));
        assert!(rendered.contains("drop staging.s_songs"));
        assert!(rendered.contains("FAILED"));
        assert!(rendered.contains("permission denied"));
    }
}
