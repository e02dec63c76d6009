pub mod core;
pub mod locale;
pub mod models;
pub mod pdf;
pub mod pricing;
pub mod templates;

// Re-export commonly used types
pub use crate::core::{AppConfig, DocumentError, DocumentResult, PdfConfig};
pub use locale::{lookup, Language, Translator};
pub use models::{
    apply_bulk_action, vouchers_from_proposal, BatchError, LineItem, Proposal, ProposalStatus, Voucher,
    VoucherAction, VoucherStatus,
};
pub use pdf::{Document, LayoutEngine, PdfGenerator};
pub use pricing::ProposalTotals;
pub use templates::{
    ProposalDocument, RenderedDocument, TemplateData, TemplateEngine, VoucherBatchDocument, VoucherDocument,
};
