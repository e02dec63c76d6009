//! Motor de maquetación por cursor.
//!
//! Todas las coordenadas están en milímetros desde la esquina superior
//! izquierda de la página; `y` crece hacia abajo. Cada documento tiene su
//! propio `LayoutEngine`: el cursor vertical vive aquí y en ningún otro sitio.

use crate::core::{DocumentError, DocumentResult, PdfConfig, TableData};
use crate::locale::{Language, Translator};

use super::table::{TableRenderer, TableStyle};

pub const PT_TO_MM: f32 = 0.352_778;

const SECTION_HEADER_HEIGHT: f32 = 10.0;
const SECTION_GAP: f32 = 3.0;
const CARD_GAP: f32 = 4.0;
const CARD_PADDING: f32 = 3.0;
const BANNER_HEIGHT: f32 = 18.0;
const BADGE_HEIGHT: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const DARK_GRAY: Color = Color::rgb(60, 60, 60);
    pub const MID_GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(230, 230, 230);
    pub const NAVY: Color = Color::rgb(30, 58, 95);
    pub const TEAL: Color = Color::rgb(0, 150, 170);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Mezcla con blanco; `amount` 0.0 deja el color, 1.0 da blanco.
    pub fn tint(&self, amount: f32) -> Color {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f32 + (255.0 - c as f32) * amount).round() as u8;
        Color::rgb(mix(self.r), mix(self.g), mix(self.b))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn regular(size: f32) -> Self {
        TextStyle {
            size,
            bold: false,
            color: Color::BLACK,
            align: TextAlign::Left,
        }
    }

    pub fn bold(size: f32) -> Self {
        TextStyle {
            bold: true,
            ..TextStyle::regular(size)
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn line_height(&self) -> f32 {
        line_height_for(self.size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// `y` es el borde superior de la línea de texto.
    Text {
        x: f32,
        y: f32,
        width: f32,
        text: String,
        style: TextStyle,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: f32,
        color: Color,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
        radius: f32,
    },
    Qr {
        x: f32,
        y: f32,
        size: f32,
        modules: usize,
        dark: Vec<bool>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub number: usize,
    pub elements: Vec<Element>,
}

impl Page {
    fn new(number: usize) -> Self {
        Page {
            number,
            elements: Vec::new(),
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|el| match el {
            Element::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Documento maquetado: páginas con elementos ya posicionados.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub language: Language,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.pages.iter().any(|p| p.contains_text(needle))
    }
}

/// Tarjeta de altura fija con un título opcional y 2–4 pares etiqueta/valor.
#[derive(Debug, Clone)]
pub struct Card {
    pub title: Option<String>,
    pub lines: Vec<(String, String)>,
    pub fill: Color,
    pub accent: Color,
}

impl Card {
    pub fn new(lines: Vec<(String, String)>) -> Self {
        Card {
            title: None,
            lines,
            fill: Color::rgb(245, 247, 250),
            accent: Color::NAVY,
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn colored(mut self, accent: Color) -> Self {
        self.accent = accent;
        self.fill = accent.tint(0.88);
        self
    }
}

pub fn line_height_for(size_pt: f32) -> f32 {
    size_pt * PT_TO_MM * 1.4
}

/// Ancho aproximado del texto: medio cuadratín por carácter.
pub fn estimate_text_width(text: &str, size_pt: f32, bold: bool) -> f32 {
    let factor = if bold { 0.55 } else { 0.5 };
    text.chars().count() as f32 * size_pt * PT_TO_MM * factor
}

/// Parte `text` en líneas que caben en `max_width`; las palabras demasiado
/// largas se cortan por caracteres.
pub fn wrap_text(text: &str, max_width: f32, size_pt: f32, bold: bool) -> Vec<String> {
    let char_width = estimate_text_width("x", size_pt, bold);
    let max_chars = ((max_width / char_width).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Recorta `text` con "…" para que quepa en una sola línea.
pub fn truncate_to_width(text: &str, max_width: f32, size_pt: f32, bold: bool) -> String {
    if estimate_text_width(text, size_pt, bold) <= max_width {
        return text.to_string();
    }
    let char_width = estimate_text_width("x", size_pt, bold);
    let keep = ((max_width / char_width).floor() as usize).saturating_sub(1);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push('…');
    truncated
}

pub struct LayoutEngine {
    config: PdfConfig,
    translator: Translator,
    width: f32,
    height: f32,
    cursor_y: f32,
    pages: Vec<Page>,
    footer_note: Option<String>,
}

impl LayoutEngine {
    pub fn new(config: PdfConfig, language: Language) -> Self {
        let (width, height) = config.page_dimensions();
        let cursor_y = config.margin.top;
        LayoutEngine {
            config,
            translator: Translator::new(language),
            width,
            height,
            cursor_y,
            pages: vec![Page::new(1)],
            footer_note: None,
        }
    }

    pub fn config(&self) -> &PdfConfig {
        &self.config
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.t(key)
    }

    pub fn cursor(&self) -> f32 {
        self.cursor_y
    }

    /// Usado por los bloques delegados (tablas) para devolver su posición final.
    pub fn set_cursor(&mut self, y: f32) {
        self.cursor_y = y;
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn left(&self) -> f32 {
        self.config.margin.left
    }

    pub fn right(&self) -> f32 {
        self.width - self.config.margin.right
    }

    pub fn content_width(&self) -> f32 {
        self.right() - self.left()
    }

    pub fn top(&self) -> f32 {
        self.config.margin.top
    }

    /// Límite inferior del área imprimible; por debajo queda el pie.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.config.margin.bottom - self.config.footer_height
    }

    pub fn remaining(&self) -> f32 {
        self.content_bottom() - self.cursor_y
    }

    pub fn at_page_top(&self) -> bool {
        self.cursor_y <= self.top()
    }

    pub fn set_footer_note(&mut self, note: impl Into<String>) {
        let note = note.into();
        self.footer_note = if note.trim().is_empty() { None } else { Some(note) };
    }

    pub fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        self.pages.push(Page::new(number));
        self.cursor_y = self.top();
        tracing::debug!("Salto de página: {}", number);
    }

    /// Salta de página si el bloque no cabe. Una página vacía nunca se
    /// descarta, aunque el bloque sea más alto que el área útil.
    pub fn ensure_space(&mut self, required: f32) -> bool {
        if self.cursor_y + required > self.content_bottom() && !self.at_page_top() {
            self.new_page();
            return true;
        }
        false
    }

    pub fn push(&mut self, element: Element) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    pub fn spacer(&mut self, height: f32) {
        self.cursor_y = (self.cursor_y + height).min(self.content_bottom());
    }

    pub fn text_at(&mut self, x: f32, y: f32, width: f32, text: impl Into<String>, style: TextStyle) {
        self.push(Element::Text {
            x,
            y,
            width,
            text: text.into(),
            style,
        });
    }

    pub fn text_line(&mut self, text: impl Into<String>, style: TextStyle) {
        let height = style.line_height().max(self.config.line_height);
        self.ensure_space(height);
        let (x, y, width) = (self.left(), self.cursor_y, self.content_width());
        self.text_at(x, y, width, text, style);
        self.cursor_y += height;
    }

    /// Texto largo partido en varias líneas.
    pub fn paragraph(&mut self, text: &str, style: TextStyle) {
        for line in wrap_text(text, self.content_width(), style.size, style.bold) {
            self.text_line(line, style.clone());
        }
    }

    pub fn rule(&mut self, color: Color, stroke: f32) {
        let (x1, x2, y) = (self.left(), self.right(), self.cursor_y);
        self.push(Element::Line {
            x1,
            y1: y,
            x2,
            y2: y,
            stroke,
            color,
        });
    }

    pub fn section_header(&mut self, label: &str) {
        self.section_header_colored(label, Color::NAVY);
    }

    /// Etiqueta en negrita con una línea debajo; altura fija.
    pub fn section_header_colored(&mut self, label: &str, color: Color) {
        self.ensure_space(SECTION_HEADER_HEIGHT + SECTION_GAP);
        let style = TextStyle::bold(11.0).with_color(color);
        let (x, y, width) = (self.left(), self.cursor_y + 1.0, self.content_width());
        self.text_at(x, y, width, label, style);
        self.cursor_y += SECTION_HEADER_HEIGHT - 2.0;
        self.rule(color, 0.8);
        self.cursor_y += 2.0 + SECTION_GAP;
    }

    /// Pares etiqueta/valor en una rejilla de `columns` columnas.
    pub fn key_value_rows(&mut self, pairs: &[(String, String)], columns: usize) {
        let columns = columns.max(1);
        let column_width = self.content_width() / columns as f32;
        let label_style = TextStyle::bold(self.config.font_size).with_color(Color::DARK_GRAY);
        let value_style = TextStyle::regular(self.config.font_size);
        let height = self.config.line_height;

        for row in pairs.chunks(columns) {
            self.ensure_space(height);
            for (col, (label, value)) in row.iter().enumerate() {
                let x = self.left() + col as f32 * column_width;
                let label_width = column_width * 0.4;
                let label_text = truncate_to_width(&format!("{}:", label), label_width, label_style.size, true);
                let value_text = truncate_to_width(value, column_width - label_width - 2.0, value_style.size, false);
                let y = self.cursor_y;
                self.text_at(x, y, label_width, label_text, label_style.clone());
                self.text_at(x + label_width, y, column_width - label_width, value_text, value_style.clone());
            }
            self.cursor_y += height;
        }
    }

    /// Delega en `TableRenderer`, que pagina fila a fila y devuelve el cursor final.
    pub fn table(&mut self, table: &TableData, style: &TableStyle) -> f32 {
        let renderer = TableRenderer::new(table, style, self.content_width());
        let end = renderer.render(self);
        self.set_cursor(end);
        end
    }

    /// Rejilla de tarjetas de altura fija, `columns` por fila.
    pub fn card_grid(&mut self, cards: &[Card], columns: usize, height: f32) {
        let columns = columns.max(1);
        let card_width = (self.content_width() - CARD_GAP * (columns - 1) as f32) / columns as f32;

        for row in cards.chunks(columns) {
            self.ensure_space(height);
            let y = self.cursor_y;
            for (col, card) in row.iter().enumerate() {
                let x = self.left() + col as f32 * (card_width + CARD_GAP);
                self.draw_card(card, x, y, card_width, height);
            }
            self.cursor_y += height + CARD_GAP;
        }
    }

    fn draw_card(&mut self, card: &Card, x: f32, y: f32, width: f32, height: f32) {
        self.push(Element::Rect {
            x,
            y,
            width,
            height,
            fill: Some(card.fill),
            stroke: Some(card.accent.tint(0.5)),
            radius: 2.0,
        });
        self.push(Element::Rect {
            x,
            y,
            width: 1.2,
            height,
            fill: Some(card.accent),
            stroke: None,
            radius: 0.0,
        });

        let inner_x = x + CARD_PADDING + 1.2;
        let inner_width = width - 2.0 * CARD_PADDING - 1.2;
        let size = self.config.font_size - 1.0;
        let line_height = line_height_for(size);
        let mut line_y = y + CARD_PADDING;

        if let Some(title) = &card.title {
            let style = TextStyle::bold(size + 1.0).with_color(card.accent);
            let text = truncate_to_width(title, inner_width, style.size, true);
            self.text_at(inner_x, line_y, inner_width, text, style);
            line_y += line_height_for(size + 1.0);
        }

        for (label, value) in card.lines.iter().take(4) {
            if line_y + line_height > y + height {
                break;
            }
            let label_width = inner_width * 0.45;
            let label_style = TextStyle::regular(size).with_color(Color::MID_GRAY);
            let value_style = TextStyle::bold(size);
            let label_text = truncate_to_width(label, label_width, size, false);
            let value_text = truncate_to_width(value, inner_width - label_width, size, true);
            self.text_at(inner_x, line_y, label_width, label_text, label_style);
            self.text_at(inner_x + label_width, line_y, inner_width - label_width, value_text, value_style);
            line_y += line_height;
        }
    }

    /// Etiqueta redondeada; devuelve su ancho.
    pub fn badge_at(&mut self, x: f32, y: f32, text: &str, fill: Color, text_color: Color) -> f32 {
        let size = self.config.font_size - 1.0;
        let width = estimate_text_width(text, size, true) + 6.0;
        self.push(Element::Rect {
            x,
            y,
            width,
            height: BADGE_HEIGHT,
            fill: Some(fill),
            stroke: None,
            radius: 3.0,
        });
        let text_y = y + (BADGE_HEIGHT - line_height_for(size)) / 2.0;
        self.text_at(
            x,
            text_y,
            width,
            text,
            TextStyle::bold(size).with_color(text_color).aligned(TextAlign::Center),
        );
        width
    }

    /// Franja de color a todo el ancho con título, subtítulo y una etiqueta
    /// de estado opcional a la derecha.
    pub fn banner(&mut self, title: &str, subtitle: &str, fill: Color, badge: Option<(&str, Color)>) {
        self.ensure_space(BANNER_HEIGHT + SECTION_GAP);
        let (x, y, width) = (self.left(), self.cursor_y, self.content_width());
        self.push(Element::Rect {
            x,
            y,
            width,
            height: BANNER_HEIGHT,
            fill: Some(fill),
            stroke: None,
            radius: 3.0,
        });

        let text_width = width * 0.7;
        self.text_at(
            x + 4.0,
            y + 3.0,
            text_width,
            truncate_to_width(title, text_width, 14.0, true),
            TextStyle::bold(14.0).with_color(Color::WHITE),
        );
        self.text_at(
            x + 4.0,
            y + 10.5,
            text_width,
            truncate_to_width(subtitle, text_width, 9.0, false),
            TextStyle::regular(9.0).with_color(Color::WHITE),
        );

        if let Some((label, badge_fill)) = badge {
            let size = self.config.font_size - 1.0;
            let badge_width = estimate_text_width(label, size, true) + 6.0;
            let badge_x = x + width - badge_width - 4.0;
            let badge_y = y + (BANNER_HEIGHT - BADGE_HEIGHT) / 2.0;
            self.badge_at(badge_x, badge_y, label, badge_fill, Color::WHITE);
        }

        self.cursor_y += BANNER_HEIGHT + SECTION_GAP;
    }

    /// Código QR alineado a la derecha con un pie de texto.
    pub fn qr_block(&mut self, data: &str, size: f32, caption: &str) -> DocumentResult<()> {
        let code = qrcode::QrCode::new(data.as_bytes())
            .map_err(|e| DocumentError::Generation(format!("No se pudo generar el QR: {}", e)))?;
        let modules = code.width();
        let dark = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();

        let caption_style = TextStyle::regular(self.config.font_size - 2.0)
            .with_color(Color::MID_GRAY)
            .aligned(TextAlign::Center);
        let caption_height = caption_style.line_height();

        self.ensure_space(size + caption_height);
        let x = self.right() - size;
        let y = self.cursor_y;
        self.push(Element::Qr {
            x,
            y,
            size,
            modules,
            dark,
        });
        self.text_at(x - 5.0, y + size + 0.5, size + 10.0, caption, caption_style);
        self.cursor_y += size + caption_height + 1.0;
        Ok(())
    }

    /// Segunda pasada: con todo el contenido maquetado ya se conoce el total
    /// de páginas y se escribe el pie de cada una.
    pub fn finish(mut self, title: impl Into<String>) -> Document {
        let total = self.pages.len();
        let page_label = self.t("footer.page");
        let footer_top = self.content_bottom() + 3.0;
        let (left, right, width) = (self.left(), self.right(), self.content_width());
        let style = TextStyle::regular(self.config.font_size - 1.5).with_color(Color::MID_GRAY);

        for page in &mut self.pages {
            page.elements.push(Element::Line {
                x1: left,
                y1: footer_top,
                x2: right,
                y2: footer_top,
                stroke: 0.4,
                color: Color::LIGHT_GRAY,
            });
            if let Some(note) = &self.footer_note {
                page.elements.push(Element::Text {
                    x: left,
                    y: footer_top + 1.5,
                    width: width * 0.7,
                    text: truncate_to_width(note, width * 0.7, style.size, false),
                    style: style.clone(),
                });
            }
            page.elements.push(Element::Text {
                x: left + width * 0.7,
                y: footer_top + 1.5,
                width: width * 0.3,
                text: format!("{} {} / {}", page_label, page.number, total),
                style: style.clone().aligned(TextAlign::Right),
            });
        }

        tracing::debug!("Documento maquetado: {} páginas", total);

        Document {
            title: title.into(),
            width: self.width,
            height: self.height,
            language: self.translator.language(),
            pages: self.pages,
        }
    }
}
