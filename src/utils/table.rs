//! Fixed-width table rendering for the `show` and interactive `list` outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    footer: Option<String>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            footer: None,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Summary line printed under a separator, e.g. the total duration.
    pub fn set_footer(&mut self, footer: String) {
        self.footer = Some(footer);
    }

    fn total_width(&self) -> usize {
        self.columns.iter().map(|c| c.width + 1).sum()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');
        out.push_str(&"-".repeat(self.total_width()));
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&format!("{:<width$} ", cell, width = col.width));
            }
            out.push('\n');
        }

        if let Some(footer) = &self.footer {
            out.push_str(&"-".repeat(self.total_width()));
            out.push('\n');
            out.push_str(footer);
            out.push('\n');
        }

        out
    }
}
