use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{DocumentResult, PdfConfig};
use crate::templates::template_models::{RenderedDocument, TemplateData};

/// Trait base para todas las plantillas de documentos
pub trait DocumentTemplate: Send + Sync {
    /// Maqueta el documento a partir de la petición
    fn layout(&self, data: &TemplateData, config: &PdfConfig) -> DocumentResult<RenderedDocument>;

    /// Retorna el ID único de la plantilla
    fn template_id(&self) -> &str;

    /// Valida que la petición corresponda a esta plantilla
    fn validate(&self, data: &TemplateData) -> DocumentResult<()>;

    /// Retorna una descripción de la plantilla
    fn description(&self) -> &str {
        "Plantilla de documento"
    }
}

/// Registry central de todas las plantillas disponibles
pub struct TemplateRegistry {
    templates: HashMap<String, Arc<dyn DocumentTemplate>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        use crate::templates::templates::*;

        let mut registry = Self {
            templates: HashMap::new(),
        };

        registry.register(Arc::new(ProposalQuoteTemplate::new()));
        registry.register(Arc::new(PlainVoucherTemplate::new()));
        registry.register(Arc::new(ColorfulVouchersTemplate::new()));

        registry
    }

    pub fn register(&mut self, template: Arc<dyn DocumentTemplate>) {
        self.templates.insert(template.template_id().to_string(), template);
    }

    /// Obtiene una plantilla por su ID
    pub fn get(&self, template_id: &str) -> Option<Arc<dyn DocumentTemplate>> {
        self.templates.get(template_id).cloned()
    }

    /// Lista todas las plantillas disponibles, ordenadas por ID
    pub fn list(&self) -> Vec<(String, String)> {
        let mut list: Vec<(String, String)> = self
            .templates
            .iter()
            .map(|(id, template)| (id.clone(), template.description().to_string()))
            .collect();
        list.sort();
        list
    }

    /// Valida si existe una plantilla con el ID dado
    pub fn exists(&self, template_id: &str) -> bool {
        self.templates.contains_key(template_id)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_knows_every_template() {
        let registry = TemplateRegistry::new();
        let ids: Vec<String> = registry.list().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["colorful_vouchers", "plain_voucher", "proposal_quote"]);
        assert!(registry.exists("proposal_quote"));
        assert!(!registry.exists("fiscal_invoice"));
    }
}
