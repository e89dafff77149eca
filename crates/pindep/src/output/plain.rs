use pindep_core::ProjectionRow;
use pindep_reconcile::Reconciliation;

use super::ReportFormatter;
use crate::error::Result;
use crate::viewport::Viewport;

const CELL_GAP: usize = 4;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn cell_lines(row: &ProjectionRow) -> [String; 2] {
        let value = match row.action {
            Some(action) => format!("  {} {action}", row.value),
            None => format!("  {}", row.value),
        };
        [row.label.clone(), value]
    }

    fn format_grid(output: &mut String, rows: &[ProjectionRow], columns: usize) {
        let cells: Vec<[String; 2]> = rows.iter().map(Self::cell_lines).collect();
        let widths = Self::column_widths(&cells, columns);

        for (index, line_cells) in cells.chunks(columns).enumerate() {
            if index > 0 {
                output.push('\n');
            }
            for line in 0..2 {
                let mut text = String::new();
                for (column, cell) in line_cells.iter().enumerate() {
                    text.push_str(&cell[line]);
                    if column + 1 < line_cells.len() {
                        let padding = widths[column] + CELL_GAP - cell[line].chars().count();
                        text.push_str(&" ".repeat(padding));
                    }
                }
                output.push_str(text.trim_end());
                output.push('\n');
            }
        }
    }

    fn column_widths(cells: &[[String; 2]], columns: usize) -> Vec<usize> {
        let mut widths = vec![0; columns];
        for (index, cell) in cells.iter().enumerate() {
            let width = cell.iter().map(|line| line.chars().count()).max().unwrap_or(0);
            let column = index % columns;
            widths[column] = widths[column].max(width);
        }
        widths
    }
}

impl ReportFormatter for PlainTextFormatter {
    fn format_report(&self, reconciliation: &Reconciliation, viewport: Viewport) -> Result<String> {
        let mut output = String::new();
        output.push_str(&reconciliation.assumption());
        output.push_str("\n\n");
        Self::format_grid(&mut output, &reconciliation.rows(), viewport.grid_columns());
        Ok(output)
    }
}
