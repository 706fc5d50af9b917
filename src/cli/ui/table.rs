use crate::cli::ui::style::UiStyle;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Declarative description of a table column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: impl Into<String>, min_width: usize) -> Self {
        Self {
            header: header.into(),
            min_width,
            max_width: None,
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: impl Into<String>, min_width: usize) -> Self {
        Self {
            alignment: Alignment::Right,
            ..Self::left(header, min_width)
        }
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// Read-only table rendered as padded columns between horizontal rules.
#[derive(Clone, Debug)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            padding: 1,
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|value| value.into()).collect());
    }

    /// Content width per column from headers, rows and column limits.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                match column.max_width {
                    Some(max_width) => width.min(max_width),
                    None => width,
                }
            })
            .collect()
    }

    pub fn render(&self, style: &UiStyle) -> String {
        let widths = self.compute_widths();
        let total_width: usize = widths
            .iter()
            .map(|width| width + self.padding * 2)
            .sum::<usize>()
            + widths.len().saturating_sub(1);
        let rule = style.horizontal_line(total_width);

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut lines = vec![
            rule.clone(),
            style.apply_header_style(&self.render_row(&header, &widths)),
            rule.clone(),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.push(rule);
        lines.join("\n")
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, widths[idx], column.alignment, self.padding)
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    }
}

fn visible_width(text: &str) -> usize {
    text.chars().count()
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let gap = width.saturating_sub(visible_width(&fitted));
    let pad = " ".repeat(padding);
    match alignment {
        Alignment::Left => format!("{pad}{fitted}{}{pad}", " ".repeat(gap)),
        Alignment::Right => format!("{pad}{}{fitted}{pad}", " ".repeat(gap)),
    }
}
