use crate::core::{DocumentError, DocumentResult, PdfConfig};
use crate::locale::Translator;
use crate::models::{ReferenceData, Voucher};
use crate::pdf::{Card, Color, LayoutEngine, TableStyle, TextStyle};
use crate::templates::helpers::format_currency;
use crate::templates::template_models::{RenderedDocument, TemplateData, VoucherBatchDocument};
use crate::templates::template_trait::DocumentTemplate;

use super::{guest_table, or_placeholder, service_color, service_detail_rows, status_color, unsupported};

const SUMMARY_CARD_HEIGHT: f32 = 26.0;
const DETAIL_CARD_HEIGHT: f32 = 27.0;
const QR_SIZE: f32 = 28.0;

/// Lote de bonos a color: resumen en tarjetas y una página por bono.
pub struct ColorfulVouchersTemplate;

impl ColorfulVouchersTemplate {
    pub fn new() -> Self {
        Self
    }

    fn summary_cards(&self, vouchers: &[Voucher], translator: &Translator) -> Vec<Card> {
        let t = |key: &str| translator.t(key);
        vouchers
            .iter()
            .map(|voucher| {
                let item = &voucher.service_data;
                Card::new(vec![
                    (t("voucher.service_type"), t(item.service_type().label_key())),
                    (t("column.status"), t(voucher.status.label_key())),
                    (t("column.pax"), voucher.pax().to_string()),
                    (
                        t("column.total"),
                        format_currency(item.stored_or_computed_total(), item.currency()),
                    ),
                ])
                .titled(voucher.id.clone())
                .colored(service_color(item.service_type()))
            })
            .collect()
    }

    /// Detalle del servicio repartido en tarjetas de hasta cuatro líneas.
    fn detail_cards(&self, voucher: &Voucher, references: &ReferenceData, translator: &Translator) -> Vec<Card> {
        let accent = service_color(voucher.service_data.service_type());
        service_detail_rows(&voucher.service_data, references, translator)
            .chunks(4)
            .map(|lines| Card::new(lines.to_vec()).colored(accent))
            .collect()
    }

    fn render_voucher(
        &self,
        engine: &mut LayoutEngine,
        voucher: &Voucher,
        doc: &VoucherBatchDocument,
        config: &PdfConfig,
    ) -> DocumentResult<()> {
        let translator = *engine.translator();
        let t = |key: &str| translator.t(key);
        let accent = service_color(voucher.service_data.service_type());

        engine.banner(
            &format!("{} | {}", t(voucher.service_data.service_type().label_key()), voucher.id),
            &format!(
                "{} | {}",
                or_placeholder(voucher.client_name.as_deref(), &translator),
                or_placeholder(Some(&voucher.proposal_reference), &translator)
            ),
            accent,
            Some((t(voucher.status.label_key()).as_str(), status_color(voucher.status))),
        );

        engine.section_header_colored(&t("section.service_details"), accent);
        engine.card_grid(&self.detail_cards(voucher, &doc.references, &translator), 2, DETAIL_CARD_HEIGHT);

        engine.section_header_colored(&t("section.guests"), accent);
        if voucher.guests.is_empty() {
            engine.text_line(t("voucher.no_guests"), TextStyle::regular(config.font_size).with_color(Color::MID_GRAY));
        } else {
            let today = doc.generated_at().date_naive();
            engine.table(
                &guest_table(&voucher.guests, today, &translator),
                &TableStyle::colorful(accent),
            );
        }

        if let Some(notes) = voucher.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            engine.spacer(2.0);
            engine.section_header_colored(&t("common.notes"), accent);
            engine.paragraph(notes, TextStyle::regular(config.font_size));
        }

        engine.spacer(4.0);
        engine.qr_block(&voucher.id, QR_SIZE, &t("voucher.scan"))?;
        engine.paragraph(
            &t("voucher.present"),
            TextStyle::regular(config.font_size - 1.0).with_color(Color::DARK_GRAY),
        );
        Ok(())
    }

    fn render(&self, doc: &VoucherBatchDocument, config: &PdfConfig) -> DocumentResult<RenderedDocument> {
        let mut engine = LayoutEngine::new(config.clone(), doc.language);
        let translator = *engine.translator();
        let t = |key: &str| translator.t(key);
        let generated_at = doc.generated_at();

        engine.set_footer_note(format!("{} | {}", doc.company.name, doc.proposal_reference));
        engine.banner(
            &t("voucher.batch_title"),
            &format!(
                "{} | {}: {} | {}",
                doc.company.name,
                t("voucher.count"),
                doc.vouchers.len(),
                generated_at.format("%d %b %Y")
            ),
            Color::NAVY,
            None,
        );
        engine.key_value_rows(
            &[
                (t("voucher.proposal"), or_placeholder(Some(&doc.proposal_reference), &translator)),
                (t("voucher.count"), doc.vouchers.len().to_string()),
            ],
            2,
        );
        engine.spacer(2.0);
        engine.section_header(&t("section.summary"));
        engine.card_grid(&self.summary_cards(&doc.vouchers, &translator), 3, SUMMARY_CARD_HEIGHT);

        for voucher in &doc.vouchers {
            engine.new_page();
            self.render_voucher(&mut engine, voucher, doc, config)?;
        }

        let document = engine.finish(format!("{} {}", t("voucher.batch_title"), doc.proposal_reference));
        tracing::info!(
            "Lote de {} bonos de {} maquetado: {} páginas",
            doc.vouchers.len(),
            doc.proposal_reference,
            document.page_count()
        );

        Ok(RenderedDocument {
            file_name: format!(
                "vouchers_{}_{}.pdf",
                doc.proposal_reference,
                generated_at.format("%Y%m%d%H%M%S")
            ),
            document,
        })
    }
}

impl Default for ColorfulVouchersTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTemplate for ColorfulVouchersTemplate {
    fn layout(&self, data: &TemplateData, config: &PdfConfig) -> DocumentResult<RenderedDocument> {
        self.validate(data)?;
        match data {
            TemplateData::VoucherBatch(doc) => self.render(doc, config),
            other => Err(unsupported(self.template_id(), other)),
        }
    }

    fn template_id(&self) -> &str {
        "colorful_vouchers"
    }

    fn validate(&self, data: &TemplateData) -> DocumentResult<()> {
        let TemplateData::VoucherBatch(doc) = data else {
            return Err(unsupported(self.template_id(), data));
        };
        if let Some(voucher) = doc.vouchers.iter().find(|v| v.id.trim().is_empty()) {
            return Err(DocumentError::Validation(format!(
                "Bono sin identificador en el lote {} (servicio {:?})",
                doc.proposal_reference,
                voucher.service_data.service_type()
            )));
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "Lote de bonos a color con tarjetas, etiquetas de estado y código QR"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::Element;

    fn request(count: usize) -> TemplateData {
        let vouchers: Vec<serde_json::Value> = (1..=count)
            .map(|i| {
                serde_json::json!({
                    "id": format!("PRP-7-V{:02}", i),
                    "proposalReference": "PRP-7",
                    "clientName": "Layla Hassan",
                    "status": if i % 2 == 0 { "PAID" } else { "PENDING_PAYMENT" },
                    "totalPax": 2,
                    "guests": [{"firstName": "Layla", "lastName": "Hassan", "birthDate": "1992-01-01"}],
                    "serviceData": {
                        "serviceType": "transportation",
                        "vehicleType": "Minivan",
                        "pickup": "IST Airport",
                        "dropoff": "Sultanahmet",
                        "date": "2024-05-01",
                        "numDays": 1,
                        "pricePerDay": "80",
                        "currency": "USD"
                    }
                })
            })
            .collect();

        serde_json::from_value(serde_json::json!({
            "type": "voucherBatch",
            "proposalReference": "PRP-7",
            "company": {"name": "Sky Travel"},
            "generatedAt": "2024-04-20T13:45:09Z",
            "vouchers": vouchers
        }))
        .unwrap()
    }

    fn first_text(page: &crate::pdf::Page) -> Option<&str> {
        page.texts().next()
    }

    #[test]
    fn test_each_voucher_starts_a_page() {
        let rendered = ColorfulVouchersTemplate::new()
            .layout(&request(3), &PdfConfig::default())
            .unwrap();

        assert_eq!(rendered.file_name, "vouchers_PRP-7_20240420134509.pdf");
        let doc = &rendered.document;
        assert_eq!(doc.page_count(), 4);
        for i in 1..=3 {
            let id = format!("PRP-7-V{:02}", i);
            let title = first_text(&doc.pages[i]).unwrap();
            assert!(title.contains(&id), "page {} starts with {}", i + 1, title);
        }
        assert!(doc.pages[3].contains_text("Page 4 / 4"));
    }

    #[test]
    fn test_summary_lists_every_voucher() {
        let rendered = ColorfulVouchersTemplate::new()
            .layout(&request(5), &PdfConfig::default())
            .unwrap();
        let summary = &rendered.document.pages[0];
        for i in 1..=5 {
            assert!(summary.contains_text(&format!("PRP-7-V{:02}", i)));
        }
        assert!(summary.contains_text("$80.00"));
    }

    #[test]
    fn test_voucher_pages_carry_qr_and_badge() {
        let rendered = ColorfulVouchersTemplate::new()
            .layout(&request(2), &PdfConfig::default())
            .unwrap();
        let page = &rendered.document.pages[2];
        assert!(page.elements.iter().any(|e| matches!(e, Element::Qr { .. })));
        assert!(page.contains_text("Paid"));
        assert!(page.contains_text("Scan to verify"));
    }

    #[test]
    fn test_empty_batch_renders_summary_only() {
        let rendered = ColorfulVouchersTemplate::new()
            .layout(&request(0), &PdfConfig::default())
            .unwrap();
        assert_eq!(rendered.document.page_count(), 1);
    }
}
