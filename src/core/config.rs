use std::env;
use std::path::PathBuf;

use super::{DocumentError, DocumentResult};

#[derive(Debug, Clone, PartialEq)]
pub enum PageSize {
    A4,
    Letter,
    Legal,
    A3,
    Custom(f32, f32), // width, height in mm
}

impl PageSize {
    pub fn dimensions(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Legal => (215.9, 355.6),
            PageSize::A3 => (297.0, 420.0),
            PageSize::Custom(w, h) => (*w, *h),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin::uniform(15.0)
    }
}

impl Margin {
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Margin { top, bottom, left, right }
    }

    pub fn uniform(size: f32) -> Self {
        Margin {
            top: size,
            bottom: size,
            left: size,
            right: size,
        }
    }
}

/// Geometría y tipografía de la página, en milímetros salvo `font_size` (pt).
#[derive(Debug, Clone)]
pub struct PdfConfig {
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub margin: Margin,
    pub font_family: String,
    pub fallback_font: String,
    pub font_size: f32,
    pub line_height: f32,
    pub footer_height: f32,
}

impl Default for PdfConfig {
    fn default() -> Self {
        PdfConfig {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            margin: Margin::default(),
            font_family: "Noto Sans".to_string(),
            fallback_font: "Noto Sans Arabic".to_string(),
            font_size: 9.0,
            line_height: 5.0,
            footer_height: 10.0,
        }
    }
}

impl PdfConfig {
    pub fn builder() -> PdfConfigBuilder {
        PdfConfigBuilder::default()
    }

    /// Ancho y alto efectivos teniendo en cuenta la orientación.
    pub fn page_dimensions(&self) -> (f32, f32) {
        let (w, h) = self.page_size.dimensions();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    pub fn content_width(&self) -> f32 {
        let (width, _) = self.page_dimensions();
        width - self.margin.left - self.margin.right
    }
}

#[derive(Default)]
pub struct PdfConfigBuilder {
    page_size: Option<PageSize>,
    orientation: Option<Orientation>,
    margin: Option<Margin>,
    font_family: Option<String>,
    font_size: Option<f32>,
    line_height: Option<f32>,
    footer_height: Option<f32>,
}

impl PdfConfigBuilder {
    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn font_family(mut self, font: String) -> Self {
        self.font_family = Some(font);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn line_height(mut self, height: f32) -> Self {
        self.line_height = Some(height);
        self
    }

    pub fn footer_height(mut self, height: f32) -> Self {
        self.footer_height = Some(height);
        self
    }

    pub fn build(self) -> PdfConfig {
        let default = PdfConfig::default();
        PdfConfig {
            page_size: self.page_size.unwrap_or(default.page_size),
            orientation: self.orientation.unwrap_or(default.orientation),
            margin: self.margin.unwrap_or(default.margin),
            font_family: self.font_family.unwrap_or(default.font_family),
            fallback_font: default.fallback_font,
            font_size: self.font_size.unwrap_or(default.font_size),
            line_height: self.line_height.unwrap_or(default.line_height),
            footer_height: self.footer_height.unwrap_or(default.footer_height),
        }
    }
}

/// Configuración de la aplicación leída del entorno (y de `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub temp_dir: PathBuf,
    pub typst_bin: String,
    pub page_margin_mm: f32,
    pub font_family: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> DocumentResult<Self> {
        let page_margin_mm = env::var("PAGE_MARGIN_MM")
            .unwrap_or_else(|_| "15".to_string())
            .parse::<f32>()
            .map_err(|e| DocumentError::Config(format!("PAGE_MARGIN_MM inválido: {}", e)))?;

        if !(5.0..=40.0).contains(&page_margin_mm) {
            return Err(DocumentError::Config(format!(
                "PAGE_MARGIN_MM fuera de rango: {}",
                page_margin_mm
            )));
        }

        Ok(AppConfig {
            output_dir: PathBuf::from(env::var("OUTPUT_DIR").unwrap_or_else(|_| "output".to_string())),
            temp_dir: PathBuf::from(
                env::var("TEMP_DIR").unwrap_or_else(|_| env::temp_dir().to_string_lossy().into_owned()),
            ),
            typst_bin: env::var("TYPST_BIN").unwrap_or_else(|_| "typst".to_string()),
            page_margin_mm,
            font_family: env::var("FONT_FAMILY").ok().filter(|f| !f.trim().is_empty()),
        })
    }

    pub fn pdf_config(&self) -> PdfConfig {
        let mut builder = PdfConfig::builder().margin(Margin::uniform(self.page_margin_mm));
        if let Some(font) = &self.font_family {
            builder = builder.font_family(font.clone());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_swaps_dimensions() {
        let config = PdfConfig::builder()
            .orientation(Orientation::Landscape)
            .build();
        assert_eq!(config.page_dimensions(), (297.0, 210.0));
    }

    #[test]
    fn test_default_content_width() {
        let config = PdfConfig::default();
        assert_eq!(config.content_width(), 180.0);
    }

    #[test]
    fn test_app_margin_applies_to_every_side() {
        let app = AppConfig {
            output_dir: PathBuf::from("out"),
            temp_dir: PathBuf::from("tmp"),
            typst_bin: "typst".to_string(),
            page_margin_mm: 20.0,
            font_family: Some("Amiri".to_string()),
        };
        let config = app.pdf_config();
        assert_eq!(config.margin, Margin::uniform(20.0));
        assert_eq!(config.font_family, "Amiri");
        assert_eq!(config.content_width(), 170.0);
    }
}
