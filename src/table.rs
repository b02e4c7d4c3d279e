//! Plain-text table rendering for listing commands.
//!
//! The layout mimics the tables the cf CLI itself prints: left-aligned
//! columns separated by padding, no borders.

use std::fmt::Display;

/// Column widths are derived from the widest cell in each column.
const COLUMN_PADDING: usize = 4;

pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Column definition: a name and an accessor producing the cell value.
pub type TableColumn<S, T> = (S, fn(&T) -> String);

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Build a table from a collection of items and a column specification.
    pub fn from_iter<'a, S, Iter, Item>(iter: Iter, columns: &[TableColumn<S, Item>]) -> Self
    where
        S: Display,
        Iter: IntoIterator<Item = &'a Item>,
        Item: 'a,
    {
        let header = columns.iter().map(|(name, _)| name.to_string()).collect();

        let rows = iter
            .into_iter()
            .map(|item| columns.iter().map(|(_, cell)| cell(item)).collect())
            .collect();

        Self::new(header, rows)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|cell| cell.len()).collect();

        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                if cell.len() > widths[index] {
                    widths[index] = cell.len();
                }
            }
        }

        widths.iter().map(|width| width + COLUMN_PADDING).collect()
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths = self.column_widths();

        for row in std::iter::once(&self.header).chain(self.rows.iter()) {
            for (cell, width) in row.iter().zip(widths.iter()) {
                write!(f, "{cell:<width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        drain_type: String,
    }

    fn columns() -> Vec<TableColumn<&'static str, Row>> {
        vec![
            ("NAME", |row: &Row| row.name.clone()),
            ("TYPE", |row: &Row| row.drain_type.clone()),
        ]
    }

    #[test]
    fn test_columns_are_sized_by_their_widest_cell() {
        let rows = vec![
            Row {
                name: "my-drain".to_string(),
                drain_type: "all".to_string(),
            },
            Row {
                name: "rt".to_string(),
                drain_type: "metrics".to_string(),
            },
        ];

        let table = Table::from_iter(rows.iter(), &columns());

        assert_eq!(
            table.to_string(),
            "NAME        TYPE       \n\
             my-drain    all        \n\
             rt          metrics    \n"
        );
    }

    #[test]
    fn test_empty_table_prints_only_the_header() {
        let rows: Vec<Row> = vec![];

        let table = Table::from_iter(rows.iter(), &columns());

        assert_eq!(table.to_string(), "NAME    TYPE    \n");
    }
}
