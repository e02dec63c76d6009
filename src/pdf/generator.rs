use crate::core::{AppConfig, DocumentError, DocumentResult, PdfConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::builder::PdfBuilder;
use super::layout::Document;

/// Compila documentos maquetados a PDF con el binario de `typst`.
pub struct PdfGenerator {
    config: PdfConfig,
    typst_bin: String,
    temp_dir: PathBuf,
}

impl PdfGenerator {
    pub fn new(config: PdfConfig) -> Self {
        PdfGenerator {
            config,
            typst_bin: "typst".to_string(),
            temp_dir: std::env::temp_dir(),
        }
    }

    pub fn from_app_config(app: &AppConfig) -> Self {
        PdfGenerator {
            config: app.pdf_config(),
            typst_bin: app.typst_bin.clone(),
            temp_dir: app.temp_dir.clone(),
        }
    }

    pub fn with_config(mut self, config: PdfConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_typst_bin(mut self, bin: impl Into<String>) -> Self {
        self.typst_bin = bin.into();
        self
    }

    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    pub fn config(&self) -> &PdfConfig {
        &self.config
    }

    pub fn typst_source(&self, document: &Document) -> String {
        PdfBuilder::from_document(document, &self.config)
    }

    /// Escribe el código Typst del documento en `output_path`.
    pub fn write_source(&self, document: &Document, output_path: &Path) -> DocumentResult<()> {
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, self.typst_source(document))?;
        Ok(())
    }

    pub fn compile_to_pdf(&self, typst_content: &str, output_path: &Path) -> DocumentResult<()> {
        fs::create_dir_all(&self.temp_dir)?;
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_file = self.temp_dir.join(format!("temp_{}.typ", uuid::Uuid::new_v4()));
        fs::write(&temp_file, typst_content)?;

        let output = Command::new(&self.typst_bin)
            .arg("compile")
            .arg(&temp_file)
            .arg(output_path)
            .output()
            .map_err(|e| DocumentError::Generation(format!("Error ejecutando typst: {}", e)));

        let _ = fs::remove_file(&temp_file);
        let output = output?;

        if !output.status.success() {
            return Err(DocumentError::Generation(format!(
                "Typst compilation failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        tracing::debug!("PDF compilado en {}", output_path.display());
        Ok(())
    }

    pub fn render(&self, document: &Document, output_path: &Path) -> DocumentResult<()> {
        if document.pages.iter().all(|p| p.is_empty()) {
            return Err(DocumentError::Validation(
                "El contenido del documento está vacío".to_string(),
            ));
        }

        self.compile_to_pdf(&self.typst_source(document), output_path)
    }
}
