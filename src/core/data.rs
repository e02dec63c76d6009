#[derive(Debug, Clone)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Anchos relativos de cada columna; se normalizan al ancho disponible.
    pub column_widths: Option<Vec<f32>>,
    pub alignment: Option<Vec<ColumnAlign>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnAlign {
    Left,
    Center,
    Right,
}

impl TableData {
    pub fn new(headers: Vec<String>) -> Self {
        TableData {
            headers,
            rows: Vec::new(),
            column_widths: None,
            alignment: None,
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn with_column_widths(mut self, widths: Vec<f32>) -> Self {
        self.column_widths = Some(widths);
        self
    }

    pub fn with_alignment(mut self, alignment: Vec<ColumnAlign>) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn align_of(&self, col: usize) -> ColumnAlign {
        self.alignment
            .as_ref()
            .and_then(|a| a.get(col).copied())
            .unwrap_or(ColumnAlign::Left)
    }

    /// Reparte `total_width` entre las columnas según los anchos relativos.
    pub fn resolve_widths(&self, total_width: f32) -> Vec<f32> {
        let count = self.column_count().max(1);
        match &self.column_widths {
            Some(widths) if widths.len() == count => {
                let sum: f32 = widths.iter().sum();
                if sum <= 0.0 {
                    return vec![total_width / count as f32; count];
                }
                widths.iter().map(|w| total_width * w / sum).collect()
            }
            _ => vec![total_width / count as f32; count],
        }
    }
}
