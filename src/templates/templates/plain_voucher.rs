use crate::core::{ColumnAlign, DocumentError, DocumentResult, PdfConfig, TableData};
use crate::locale::Translator;
use crate::pdf::{Color, LayoutEngine, TableStyle, TextStyle};
use crate::templates::helpers::format_date;
use crate::templates::template_models::{RenderedDocument, TemplateData, VoucherDocument};
use crate::templates::template_trait::DocumentTemplate;

use super::{company_header, guest_table, or_placeholder, service_detail_rows, unsupported};

/// Bono individual en blanco y negro con tablas de rejilla.
pub struct PlainVoucherTemplate;

impl PlainVoucherTemplate {
    pub fn new() -> Self {
        Self
    }

    fn info_rows(&self, doc: &VoucherDocument, translator: &Translator) -> Vec<(String, String)> {
        let voucher = &doc.voucher;
        let t = |key: &str| translator.t(key);

        let issued = match format_date(&voucher.created_at) {
            d if d.is_empty() => doc.generated_at().format("%d %b %Y").to_string(),
            d => d,
        };

        vec![
            (t("voucher.number"), voucher.id.clone()),
            (
                t("voucher.proposal"),
                or_placeholder(Some(&voucher.proposal_reference), translator),
            ),
            (t("voucher.service_type"), t(voucher.service_data.service_type().label_key())),
            (t("column.status"), t(voucher.status.label_key())),
            (t("proposal.client"), or_placeholder(voucher.client_name.as_deref(), translator)),
            (
                t("proposal.agency"),
                or_placeholder(
                    voucher
                        .agency_id
                        .as_deref()
                        .and_then(|id| doc.references.agency(id))
                        .map(|a| a.name.as_str()),
                    translator,
                ),
            ),
            (t("voucher.total_pax"), voucher.pax().to_string()),
            (t("voucher.issued"), issued),
        ]
    }

    fn render(&self, doc: &VoucherDocument, config: &PdfConfig) -> RenderedDocument {
        let voucher = &doc.voucher;
        let mut engine = LayoutEngine::new(config.clone(), doc.language);
        let translator = *engine.translator();
        let t = |key: &str| translator.t(key);
        let style = TableStyle::plain();

        engine.set_footer_note(format!("{} | {}", doc.company.name, voucher.id));
        company_header(&mut engine, &doc.company, &t("voucher.title"), Color::BLACK);

        engine.section_header_colored(&t("section.voucher_info"), Color::BLACK);
        engine.key_value_rows(&self.info_rows(doc, &translator), 2);
        engine.spacer(3.0);

        engine.section_header_colored(&t("section.service_details"), Color::BLACK);
        let mut details = TableData::new(vec![t("voucher.service_type"), t(voucher.service_data.service_type().label_key())])
            .with_column_widths(vec![1.0, 2.0])
            .with_alignment(vec![ColumnAlign::Left, ColumnAlign::Left]);
        for (label, value) in service_detail_rows(&voucher.service_data, &doc.references, &translator) {
            details.add_row(vec![label, value]);
        }
        engine.table(&details, &style);
        engine.spacer(3.0);

        engine.section_header_colored(&t("section.guests"), Color::BLACK);
        if voucher.guests.is_empty() {
            engine.text_line(t("voucher.no_guests"), TextStyle::regular(config.font_size).with_color(Color::MID_GRAY));
        } else {
            engine.table(&guest_table(&voucher.guests, doc.today(), &translator), &style);
        }

        if let Some(notes) = voucher.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            engine.spacer(3.0);
            engine.section_header_colored(&t("common.notes"), Color::BLACK);
            engine.paragraph(notes, TextStyle::regular(config.font_size));
        }

        engine.spacer(6.0);
        engine.paragraph(
            &t("voucher.present"),
            TextStyle::regular(config.font_size - 1.0).with_color(Color::DARK_GRAY),
        );

        let document = engine.finish(format!("{} {}", t("voucher.title"), voucher.id));
        tracing::info!("Bono {} maquetado: {} páginas", voucher.id, document.page_count());

        RenderedDocument {
            file_name: format!("voucher_{}.pdf", voucher.id),
            document,
        }
    }
}

impl Default for PlainVoucherTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTemplate for PlainVoucherTemplate {
    fn layout(&self, data: &TemplateData, config: &PdfConfig) -> DocumentResult<RenderedDocument> {
        self.validate(data)?;
        match data {
            TemplateData::Voucher(doc) => Ok(self.render(doc, config)),
            other => Err(unsupported(self.template_id(), other)),
        }
    }

    fn template_id(&self) -> &str {
        "plain_voucher"
    }

    fn validate(&self, data: &TemplateData) -> DocumentResult<()> {
        let TemplateData::Voucher(doc) = data else {
            return Err(unsupported(self.template_id(), data));
        };
        if doc.voucher.id.trim().is_empty() {
            return Err(DocumentError::Validation("El bono no tiene identificador".to_string()));
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "Bono de servicio individual con detalle y lista de huéspedes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;

    fn request(guests: serde_json::Value) -> TemplateData {
        serde_json::from_value(serde_json::json!({
            "type": "voucher",
            "company": {"name": "Sky Travel"},
            "language": "English",
            "generatedAt": "2024-06-14T08:00:00Z",
            "references": {
                "hotels": [{"id": "h1", "name": "Pera Palace", "destinationId": "d1"}],
                "destinations": [{"id": "d1", "name": "Istanbul"}]
            },
            "voucher": {
                "id": "PRP-2024-001-V01",
                "proposalReference": "PRP-2024-001",
                "clientName": "Ahmed Yilmaz",
                "status": "PAID",
                "adults": 2,
                "guests": guests,
                "serviceData": {
                    "serviceType": "hotel",
                    "hotelId": "h1",
                    "checkin": "2024-07-01",
                    "checkout": "2024-07-04",
                    "numRooms": 1,
                    "pricePerNight": "120",
                    "currency": "EUR",
                    "totalPrice": "360.00"
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_voucher_layout() {
        let guests = serde_json::json!([
            {"firstName": "Ahmed", "lastName": "Yilmaz", "passportNumber": "U1234567", "birthDate": "1985-03-20"}
        ]);
        let rendered = PlainVoucherTemplate::new()
            .layout(&request(guests), &PdfConfig::default())
            .unwrap();

        assert_eq!(rendered.file_name, "voucher_PRP-2024-001-V01.pdf");
        let doc = &rendered.document;
        assert_eq!(doc.language, Language::English);
        assert!(doc.contains_text("Pera Palace"));
        assert!(doc.contains_text("Istanbul"));
        assert!(doc.contains_text("€360.00"));
        assert!(doc.contains_text("Paid"));
        assert!(doc.contains_text("39"));
        assert!(doc.contains_text("Page 1 / 1"));
    }

    #[test]
    fn test_voucher_without_guests() {
        let rendered = PlainVoucherTemplate::new()
            .layout(&request(serde_json::json!([])), &PdfConfig::default())
            .unwrap();
        assert!(rendered.document.contains_text("No guests registered"));
    }

    #[test]
    fn test_missing_agency_renders_placeholder() {
        let rendered = PlainVoucherTemplate::new()
            .layout(&request(serde_json::json!([])), &PdfConfig::default())
            .unwrap();
        assert!(rendered.document.contains_text("N/A"));
    }
}
