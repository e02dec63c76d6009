use crate::core::PdfConfig;
use crate::templates::helpers::escape_typst;

use super::layout::{Color, Document, Element, Page, TextAlign, TextStyle};

const QR_FUNCTION: &str = r#"#let qr(size, n, bits) = box(width: size, height: size, {
  let cell = size / n
  for (i, b) in bits.clusters().enumerate() {
    if b == "1" {
      place(top + left, dx: calc.rem(i, n) * cell, dy: calc.floor(i / n) * cell,
        rect(width: cell, height: cell, fill: black, stroke: none))
    }
  }
})"#;

/// Traduce un `Document` maquetado a código Typst con posiciones absolutas.
///
/// En documentos RTL se refleja el eje horizontal: lo que el motor colocó a
/// la izquierda aparece a la derecha y las alineaciones se invierten.
pub struct PdfBuilder {
    sections: Vec<String>,
    config: PdfConfig,
    page_width: f32,
    mirror: bool,
}

impl PdfBuilder {
    pub fn new() -> Self {
        let config = PdfConfig::default();
        let (page_width, _) = config.page_dimensions();
        PdfBuilder {
            sections: Vec::new(),
            config,
            page_width,
            mirror: false,
        }
    }

    pub fn with_config(mut self, config: PdfConfig) -> Self {
        self.page_width = config.page_dimensions().0;
        self.config = config;
        self
    }

    pub fn from_document(document: &Document, config: &PdfConfig) -> String {
        let mut builder = PdfBuilder::new().with_config(config.clone());
        builder.add_document(document);
        builder.build()
    }

    pub fn add_document(&mut self, document: &Document) -> &mut Self {
        self.page_width = document.width;
        self.mirror = document.language.is_rtl();
        self.add_page_setup(document);
        for (index, page) in document.pages.iter().enumerate() {
            if index > 0 {
                self.add_page_break();
            }
            self.add_page(page);
        }
        self
    }

    fn add_page_setup(&mut self, document: &Document) {
        let dir = if self.mirror { "rtl" } else { "ltr" };
        self.sections.push(format!(
            "#set document(title: \"{}\")",
            escape_string(&document.title)
        ));
        self.sections.push(format!(
            "#set page(width: {}mm, height: {}mm, margin: 0mm)",
            fmt_num(document.width),
            fmt_num(document.height)
        ));
        self.sections.push(format!(
            "#set text(font: (\"{}\", \"{}\"), size: {}pt, lang: \"{}\", dir: {})",
            escape_string(&self.config.font_family),
            escape_string(&self.config.fallback_font),
            fmt_num(self.config.font_size),
            document.language.code(),
            dir
        ));
        self.sections.push("#set par(leading: 0.4em)".to_string());
        self.sections.push(QR_FUNCTION.to_string());
    }

    fn add_page(&mut self, page: &Page) {
        for element in &page.elements {
            self.add_element(element);
        }
    }

    pub fn add_element(&mut self, element: &Element) -> &mut Self {
        let typst = match element {
            Element::Text {
                x,
                y,
                width,
                text,
                style,
            } => {
                let x = self.mirror_x(*x, *width);
                format!(
                    "#place(top + left, dx: {}mm, dy: {}mm, box(width: {}mm, height: {}mm, align({}, {})))",
                    fmt_num(x),
                    fmt_num(*y),
                    fmt_num(*width),
                    fmt_num(style.line_height()),
                    self.align_keyword(style.align),
                    text_markup(text, style)
                )
            }
            Element::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                color,
            } => format!(
                "#place(top + left, line(start: ({}mm, {}mm), end: ({}mm, {}mm), stroke: {}pt + {}))",
                fmt_num(self.mirror_x(*x1, 0.0)),
                fmt_num(*y1),
                fmt_num(self.mirror_x(*x2, 0.0)),
                fmt_num(*y2),
                fmt_num(*stroke),
                rgb(*color)
            ),
            Element::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
                radius,
            } => format!(
                "#place(top + left, dx: {}mm, dy: {}mm, rect(width: {}mm, height: {}mm, fill: {}, stroke: {}, radius: {}mm))",
                fmt_num(self.mirror_x(*x, *width)),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height),
                fill.map(rgb).unwrap_or_else(|| "none".to_string()),
                stroke
                    .map(|c| format!("0.4pt + {}", rgb(c)))
                    .unwrap_or_else(|| "none".to_string()),
                fmt_num(*radius)
            ),
            Element::Qr {
                x,
                y,
                size,
                modules,
                dark,
            } => {
                let bits: String = dark.iter().map(|d| if *d { '1' } else { '0' }).collect();
                format!(
                    "#place(top + left, dx: {}mm, dy: {}mm, qr({}mm, {}, \"{}\"))",
                    fmt_num(self.mirror_x(*x, *size)),
                    fmt_num(*y),
                    fmt_num(*size),
                    modules,
                    bits
                )
            }
        };
        self.sections.push(typst);
        self
    }

    pub fn add_page_break(&mut self) -> &mut Self {
        self.sections.push("#pagebreak()".to_string());
        self
    }

    pub fn build(&self) -> String {
        self.sections.join("\n")
    }

    fn mirror_x(&self, x: f32, width: f32) -> f32 {
        if self.mirror {
            self.page_width - x - width
        } else {
            x
        }
    }

    fn align_keyword(&self, align: TextAlign) -> &'static str {
        match (align, self.mirror) {
            (TextAlign::Center, _) => "center + horizon",
            (TextAlign::Left, false) | (TextAlign::Right, true) => "left + horizon",
            (TextAlign::Right, false) | (TextAlign::Left, true) => "right + horizon",
        }
    }
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn text_markup(text: &str, style: &TextStyle) -> String {
    let weight = if style.bold { "bold" } else { "regular" };
    format!(
        "text(size: {}pt, weight: \"{}\", fill: {})[{}]",
        fmt_num(style.size),
        weight,
        rgb(style.color),
        escape_typst(text)
    )
}

fn rgb(color: Color) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Dos decimales sin ceros sobrantes.
fn fmt_num(value: f32) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" || trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;
    use crate::pdf::layout::LayoutEngine;

    fn document(language: Language) -> Document {
        let mut engine = LayoutEngine::new(PdfConfig::default(), language);
        engine.text_line("Hello #world", TextStyle::bold(12.0));
        engine.new_page();
        engine.text_line("second", TextStyle::regular(9.0));
        engine.finish("Test \"doc\"")
    }

    #[test]
    fn test_pages_are_separated_by_breaks() {
        let source = PdfBuilder::from_document(&document(Language::English), &PdfConfig::default());
        assert_eq!(source.matches("#pagebreak()").count(), 1);
        assert!(source.contains("#set page(width: 210mm, height: 297mm, margin: 0mm)"));
        assert!(source.contains("lang: \"en\""));
        assert!(source.contains("Test \\\"doc\\\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let source = PdfBuilder::from_document(&document(Language::English), &PdfConfig::default());
        assert!(source.contains("Hello \\#world"));
        assert!(source.contains("weight: \"bold\""));
    }

    #[test]
    fn test_rtl_mirrors_positions() {
        let ltr = PdfBuilder::from_document(&document(Language::English), &PdfConfig::default());
        let rtl = PdfBuilder::from_document(&document(Language::Arabic), &PdfConfig::default());
        assert!(ltr.contains("dir: ltr"));
        assert!(rtl.contains("dir: rtl"));
        assert!(rtl.contains("lang: \"ar\""));
        // El texto a ancho completo con márgenes simétricos no se desplaza
        assert!(rtl.contains("dx: 15mm, dy: 15mm"));
        assert!(ltr.contains("left + horizon"));
        assert!(rtl.contains("right + horizon"));
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(15.0), "15");
        assert_eq!(fmt_num(4.456), "4.46");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(12.5), "12.5");
    }
}
