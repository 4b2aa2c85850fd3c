//! Table rendering for the listing commands.

/// A simple table for formatted output.
///
/// Headers are rendered uppercase; column widths grow with the widest cell.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_uppercase()).collect();
        let column_widths = headers.iter().map(|h| h.len()).collect();

        Self {
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(cell.len());
            }
        }

        self.rows.push(row);
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::new();

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            if i + 1 < self.column_widths.len() {
                s.push_str(&format!("{cell:width$}  "));
            } else {
                s.push_str(cell);
            }
        }

        s.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["Id", "Size"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("ID"));
        assert!(output.contains("SIZE"));
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(vec!["Id", "Size"]);
        table.add_row(vec!["pong".into(), "12.5 KB".into()]);
        table.add_row(vec!["zork".into(), "4.2 MB".into()]);

        assert_eq!(table.row_count(), 2);

        let output = table.render();
        assert!(output.contains("pong"));
        assert!(output.contains("12.5 KB"));
        assert!(output.contains("zork"));
    }

    #[test]
    fn table_aligns_columns_to_widest_cell() {
        let mut table = Table::new(vec!["Id", "Path"]);
        table.add_row(vec!["a-much-longer-id".into(), "/data".into()]);

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();
        let header_col = lines[0].find("PATH").unwrap();
        let row_col = lines[1].find("/data").unwrap();
        assert_eq!(header_col, row_col);
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(vec!["only".into(), "two".into()]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }
}
