//! Plain-text table rendering for query result sets.

/// A row type that can render itself into a table
pub trait Tabular {
    /// Column names, in result-set order
    fn headers() -> &'static [&'static str];

    /// One cell per header, already formatted
    fn row(&self) -> Vec<String>;
}

#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows<T: Tabular>(rows: &[T]) -> Table {
        Table {
            headers: T::headers().iter().map(|h| h.to_string()).collect(),
            rows: rows.iter().map(Tabular::row).collect(),
        }
    }

    /// Renders a psql-like table with a row-count footer
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        let mut out = String::new();
        out.push_str(&render_line(&self.headers, &widths));
        out.push('\n');
        out.push_str(&render_separator(&widths));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&render_line(row, &widths));
        }
        out.push('\n');
        out.push_str(&format!(
            "({} row{})",
            self.rows.len(),
            if self.rows.len() == 1 { "" } else { "s" }
        ));
        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }
        widths
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!(" {:<1$} ", cell, width))
        .collect();
    padded.join("|").trim_end().to_string()
}

fn render_separator(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    dashes.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        name: &'static str,
        value: i64,
    }

    impl Tabular for Pair {
        fn headers() -> &'static [&'static str] {
            &["name", "value"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.value.to_string()]
        }
    }

    #[test]
    fn test_render_aligns_columns() {
        let rows = vec![
            Pair { name: "a", value: 1 },
            Pair {
                name: "longer",
                value: 123456,
            },
        ];

        let rendered = Table::from_rows(&rows).render();
        let expected = " name   | value
--------+--------
 a      | 1
 longer | 123456
(2 rows)";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_empty_result_set() {
        let rows: Vec<Pair> = vec![];
        let rendered = Table::from_rows(&rows).render();
        let expected = " name | value
------+-------
(0 rows)";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_single_row_footer() {
        let rows = vec![Pair { name: "x", value: 7 }];
        assert!(Table::from_rows(&rows).render().ends_with("(1 row)"));
    }
}
