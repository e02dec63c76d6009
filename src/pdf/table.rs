//! Tablas que se paginan solas.
//!
//! El renderizador lleva su propia posición vertical: parte una tabla larga
//! fila a fila, repite la cabecera en cada página nueva y devuelve al motor
//! la posición donde terminó.

use crate::core::{ColumnAlign, TableData};

use super::layout::{line_height_for, wrap_text, Color, Element, LayoutEngine, TextAlign, TextStyle};

#[derive(Debug, Clone)]
pub struct TableStyle {
    pub header_fill: Color,
    pub header_text: Color,
    pub stripe: Option<Color>,
    pub border: Color,
    pub vertical_rules: bool,
    pub font_size: f32,
    pub padding: f32,
}

impl TableStyle {
    /// Blanco y negro con rejilla completa.
    pub fn plain() -> Self {
        TableStyle {
            header_fill: Color::LIGHT_GRAY,
            header_text: Color::BLACK,
            stripe: None,
            border: Color::MID_GRAY,
            vertical_rules: true,
            font_size: 9.0,
            padding: 1.5,
        }
    }

    /// Cabecera del color de acento y filas alternas tintadas.
    pub fn colorful(accent: Color) -> Self {
        TableStyle {
            header_fill: accent,
            header_text: Color::WHITE,
            stripe: Some(accent.tint(0.92)),
            border: accent.tint(0.6),
            vertical_rules: false,
            font_size: 9.0,
            padding: 1.5,
        }
    }

    fn line_height(&self) -> f32 {
        line_height_for(self.font_size)
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle::plain()
    }
}

pub struct TableRenderer<'a> {
    table: &'a TableData,
    style: &'a TableStyle,
    widths: Vec<f32>,
}

impl<'a> TableRenderer<'a> {
    pub fn new(table: &'a TableData, style: &'a TableStyle, total_width: f32) -> Self {
        TableRenderer {
            table,
            style,
            widths: table.resolve_widths(total_width),
        }
    }

    fn wrap_cells(&self, cells: &[String], bold: bool) -> Vec<Vec<String>> {
        self.widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let text = cells.get(col).map(String::as_str).unwrap_or("");
                wrap_text(text, width - 2.0 * self.style.padding, self.style.font_size, bold)
            })
            .collect()
    }

    fn height_of(&self, wrapped: &[Vec<String>]) -> f32 {
        let lines = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
        lines as f32 * self.style.line_height() + 2.0 * self.style.padding
    }

    pub fn row_height(&self, cells: &[String], bold: bool) -> f32 {
        self.height_of(&self.wrap_cells(cells, bold))
    }

    /// Dibuja la tabla a partir del cursor del motor y devuelve la `y` final.
    pub fn render(&self, engine: &mut LayoutEngine) -> f32 {
        if self.widths.is_empty() {
            return engine.cursor();
        }

        let header = self.wrap_cells(&self.table.headers, true);
        let header_height = self.height_of(&header);
        let first_row_height = self
            .table
            .rows
            .first()
            .map(|row| self.row_height(row, false))
            .unwrap_or(0.0);

        // La cabecera nunca queda sola al pie de una página.
        engine.ensure_space(header_height + first_row_height);

        let bottom = engine.content_bottom();
        let start = engine.cursor();
        let mut y = self.draw_row(engine, start, &header, header_height, true, None);
        let mut rows_on_page = 0usize;

        for (index, row) in self.table.rows.iter().enumerate() {
            let wrapped = self.wrap_cells(row, false);
            let height = self.height_of(&wrapped);

            if y + height > bottom && rows_on_page > 0 {
                engine.new_page();
                tracing::debug!("Tabla continúa en página {} desde la fila {}", engine.page_count(), index + 1);
                let top = engine.cursor();
                y = self.draw_row(engine, top, &header, header_height, true, None);
                rows_on_page = 0;
            }

            let fill = match self.style.stripe {
                Some(stripe) if index % 2 == 1 => Some(stripe),
                _ => None,
            };
            y = self.draw_row(engine, y, &wrapped, height, false, fill);
            rows_on_page += 1;
        }

        y + 2.0
    }

    fn draw_row(
        &self,
        engine: &mut LayoutEngine,
        y: f32,
        cells: &[Vec<String>],
        height: f32,
        is_header: bool,
        fill: Option<Color>,
    ) -> f32 {
        let left = engine.left();
        let total: f32 = self.widths.iter().sum();

        let fill = if is_header { Some(self.style.header_fill) } else { fill };
        let stroke = if self.style.vertical_rules {
            Some(self.style.border)
        } else {
            None
        };
        engine.push(Element::Rect {
            x: left,
            y,
            width: total,
            height,
            fill,
            stroke,
            radius: 0.0,
        });
        if !self.style.vertical_rules {
            engine.push(Element::Line {
                x1: left,
                y1: y + height,
                x2: left + total,
                y2: y + height,
                stroke: 0.3,
                color: self.style.border,
            });
        }

        let line_height = self.style.line_height();
        let mut x = left;
        for (col, width) in self.widths.iter().enumerate() {
            if self.style.vertical_rules && col > 0 {
                engine.push(Element::Line {
                    x1: x,
                    y1: y,
                    x2: x,
                    y2: y + height,
                    stroke: 0.3,
                    color: self.style.border,
                });
            }

            let align = match self.table.align_of(col) {
                ColumnAlign::Left => TextAlign::Left,
                ColumnAlign::Center => TextAlign::Center,
                ColumnAlign::Right => TextAlign::Right,
            };
            let style = if is_header {
                TextStyle::bold(self.style.font_size).with_color(self.style.header_text)
            } else {
                TextStyle::regular(self.style.font_size)
            }
            .aligned(align);

            if let Some(lines) = cells.get(col) {
                for (i, line) in lines.iter().enumerate() {
                    engine.text_at(
                        x + self.style.padding,
                        y + self.style.padding + i as f32 * line_height,
                        width - 2.0 * self.style.padding,
                        line.clone(),
                        style.clone(),
                    );
                }
            }
            x += width;
        }

        y + height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PdfConfig;
    use crate::locale::Language;

    fn table(rows: usize) -> TableData {
        let mut table = TableData::new(vec!["Name".into(), "Total".into()]);
        for i in 0..rows {
            table.add_row(vec![format!("row {}", i), format!("{}.00", i)]);
        }
        table
    }

    fn header_count(doc: &crate::pdf::Document, page: usize) -> usize {
        doc.pages[page].texts().filter(|t| *t == "Name").count()
    }

    #[test]
    fn test_short_table_stays_on_one_page() {
        let mut engine = LayoutEngine::new(PdfConfig::default(), Language::English);
        let start = engine.cursor();
        let end = engine.table(&table(3), &TableStyle::plain());
        assert!(end > start);
        assert_eq!(engine.cursor(), end);
        assert_eq!(engine.page_count(), 1);
    }

    #[test]
    fn test_long_table_repeats_header_on_each_page() {
        let mut engine = LayoutEngine::new(PdfConfig::default(), Language::English);
        engine.table(&table(120), &TableStyle::colorful(Color::TEAL));
        let doc = engine.finish("table");

        assert!(doc.page_count() >= 3);
        for page in 0..doc.page_count() {
            assert_eq!(header_count(&doc, page), 1, "page {}", page + 1);
        }
        assert!(doc.contains_text("row 0"));
        assert!(doc.contains_text("row 119"));
    }

    #[test]
    fn test_rows_never_cross_the_footer() {
        let mut engine = LayoutEngine::new(PdfConfig::default(), Language::English);
        let bottom = engine.content_bottom();
        engine.table(&table(80), &TableStyle::plain());
        let doc = engine.finish("table");

        for page in &doc.pages {
            for el in &page.elements {
                if let Element::Rect { y, height, .. } = el {
                    assert!(y + height <= bottom + 0.001);
                }
            }
        }
    }

    #[test]
    fn test_header_moves_with_first_row() {
        let mut engine = LayoutEngine::new(PdfConfig::default(), Language::English);
        engine.set_cursor(engine.content_bottom() - 8.0);
        engine.table(&table(2), &TableStyle::plain());
        assert_eq!(engine.page_count(), 2);
    }

    #[test]
    fn test_wrapped_cells_grow_the_row() {
        let data = table(0);
        let style = TableStyle::plain();
        let renderer = TableRenderer::new(&data, &style, 60.0);
        let single = renderer.row_height(&["a".into(), "b".into()], false);
        let tall = renderer.row_height(&["word ".repeat(30), "b".into()], false);
        assert!(tall > single * 2.0);
    }
}
