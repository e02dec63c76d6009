use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::{AppConfig, DocumentError, DocumentResult, PdfConfig};
use crate::pdf::PdfGenerator;
use crate::templates::template_models::*;
use crate::templates::template_trait::TemplateRegistry;

pub struct TemplateEngine {
    output_dir: PathBuf,
    registry: Arc<TemplateRegistry>,
    generator: PdfGenerator,
}

impl TemplateEngine {
    pub fn new(config: PdfConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            registry: Arc::new(TemplateRegistry::new()),
            generator: PdfGenerator::new(config),
        }
    }

    pub fn from_app_config(app: &AppConfig) -> Self {
        Self {
            output_dir: app.output_dir.clone(),
            registry: Arc::new(TemplateRegistry::new()),
            generator: PdfGenerator::from_app_config(app),
        }
    }

    pub fn config(&self) -> &PdfConfig {
        self.generator.config()
    }

    /// Maqueta cualquier petición con la plantilla que le corresponde
    pub fn layout(&self, data: &TemplateData) -> DocumentResult<RenderedDocument> {
        let template_id = data.template_id();
        let template = self
            .registry
            .get(template_id)
            .ok_or_else(|| DocumentError::Template(format!("Template no encontrado: {}", template_id)))?;

        template.layout(data, self.config())
    }

    pub fn generate_proposal(&self, doc: ProposalDocument) -> DocumentResult<RenderedDocument> {
        self.layout(&TemplateData::Proposal(doc))
    }

    pub fn generate_voucher(&self, doc: VoucherDocument) -> DocumentResult<RenderedDocument> {
        self.layout(&TemplateData::Voucher(doc))
    }

    pub fn generate_voucher_batch(&self, doc: VoucherBatchDocument) -> DocumentResult<RenderedDocument> {
        self.layout(&TemplateData::VoucherBatch(doc))
    }

    /// Un documento por bono, maquetados en paralelo; cada uno con su propio motor.
    pub fn generate_vouchers_individually(
        &self,
        batch: &VoucherBatchDocument,
    ) -> Vec<DocumentResult<RenderedDocument>> {
        use rayon::prelude::*;

        batch
            .split()
            .into_par_iter()
            .map(|doc| self.generate_voucher(doc))
            .collect()
    }

    /// Compila el documento a PDF en el directorio de salida
    pub fn save_pdf(&self, rendered: &RenderedDocument) -> DocumentResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(&rendered.file_name);
        self.generator.render(&rendered.document, &path)?;
        tracing::info!("PDF generado: {}", path.display());
        Ok(path)
    }

    /// Guarda solo el código Typst, con el mismo nombre y extensión `.typ`
    pub fn save_source(&self, rendered: &RenderedDocument) -> DocumentResult<PathBuf> {
        let path = self.output_dir.join(&rendered.file_name).with_extension("typ");
        self.generator.write_source(&rendered.document, &path)?;
        tracing::info!("Código Typst generado: {}", path.display());
        Ok(path)
    }

    /// Lista todas las plantillas disponibles
    pub fn list_templates(&self) -> Vec<(String, String)> {
        self.registry.list()
    }

    /// Verifica si existe una plantilla
    pub fn template_exists(&self, template_id: &str) -> bool {
        self.registry.exists(template_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> VoucherBatchDocument {
        serde_json::from_value(serde_json::json!({
            "proposalReference": "PRP-9",
            "company": {"name": "Sky Travel"},
            "generatedAt": "2024-04-20T13:45:09Z",
            "vouchers": [
                {"id": "PRP-9-V01", "serviceData": {"serviceType": "flight", "pax": 2, "pricePerPax": "150", "currency": "USD"}},
                {"id": "PRP-9-V02", "serviceData": {"serviceType": "rentACar", "numDays": 3, "pricePerDay": "40", "currency": "EUR"}},
                {"id": "PRP-9-V03", "serviceData": {"serviceType": "additionalService", "name": "Cruise", "price": "30", "currency": "USD"}}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_individual_vouchers_keep_batch_order() {
        let dir = tempfile::tempdir().unwrap();
        let engine = TemplateEngine::new(PdfConfig::default(), dir.path());
        let results = engine.generate_vouchers_individually(&batch());

        let names: Vec<String> = results
            .into_iter()
            .map(|r| r.unwrap().file_name)
            .collect();
        assert_eq!(
            names,
            vec!["voucher_PRP-9-V01.pdf", "voucher_PRP-9-V02.pdf", "voucher_PRP-9-V03.pdf"]
        );
    }

    #[test]
    fn test_save_source_uses_typ_extension() {
        let dir = tempfile::tempdir().unwrap();
        let engine = TemplateEngine::new(PdfConfig::default(), dir.path());
        let rendered = engine.generate_voucher_batch(batch()).unwrap();
        let path = engine.save_source(&rendered).unwrap();

        assert_eq!(path, dir.path().join("vouchers_PRP-9_20240420134509.typ"));
        let source = fs::read_to_string(path).unwrap();
        assert_eq!(source.matches("#pagebreak()").count(), 3);
    }

    #[test]
    fn test_templates_are_listed() {
        let engine = TemplateEngine::new(PdfConfig::default(), "unused");
        assert_eq!(engine.list_templates().len(), 3);
        assert!(engine.template_exists("colorful_vouchers"));
    }
}
