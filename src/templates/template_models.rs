use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Language;
use crate::models::{CompanyInfo, Proposal, ReferenceData, Voucher};
use crate::pdf::Document;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDocument {
    pub proposal: Proposal,
    pub company: CompanyInfo,
    #[serde(default)]
    pub references: ReferenceData,
    /// Sustituye al `pdfLanguage` de la propuesta si viene informado.
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl ProposalDocument {
    pub fn language(&self) -> Language {
        self.language.unwrap_or(self.proposal.pdf_language)
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at.unwrap_or_else(Utc::now)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherDocument {
    pub voucher: Voucher,
    pub company: CompanyInfo,
    #[serde(default)]
    pub references: ReferenceData,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl VoucherDocument {
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at.unwrap_or_else(Utc::now)
    }

    /// Fecha de referencia para calcular edades.
    pub fn today(&self) -> NaiveDate {
        self.generated_at().date_naive()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherBatchDocument {
    pub proposal_reference: String,
    pub vouchers: Vec<Voucher>,
    pub company: CompanyInfo,
    #[serde(default)]
    pub references: ReferenceData,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl VoucherBatchDocument {
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at.unwrap_or_else(Utc::now)
    }

    /// Separa el lote en documentos de un solo bono con los mismos datos comunes.
    pub fn split(&self) -> Vec<VoucherDocument> {
        let generated_at = Some(self.generated_at());
        self.vouchers
            .iter()
            .map(|voucher| VoucherDocument {
                voucher: voucher.clone(),
                company: self.company.clone(),
                references: self.references.clone(),
                language: self.language,
                generated_at,
            })
            .collect()
    }
}

/// Petición de generación, etiquetada por `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TemplateData {
    Proposal(ProposalDocument),
    Voucher(VoucherDocument),
    VoucherBatch(VoucherBatchDocument),
}

impl TemplateData {
    pub fn template_id(&self) -> &'static str {
        match self {
            TemplateData::Proposal(_) => "proposal_quote",
            TemplateData::Voucher(_) => "plain_voucher",
            TemplateData::VoucherBatch(_) => "colorful_vouchers",
        }
    }
}

/// Documento maquetado junto al nombre de fichero que le corresponde.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub document: Document,
}
