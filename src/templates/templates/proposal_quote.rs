use crate::core::{ColumnAlign, DocumentError, DocumentResult, PdfConfig, TableData};
use crate::locale::Translator;
use crate::models::{Proposal, ReferenceData};
use crate::pdf::{Color, LayoutEngine, TableStyle, TextAlign, TextStyle};
use crate::pricing::{self, ProposalTotals};
use crate::templates::helpers::{calculate_nights, format_currency, format_date, format_percentage, parse_price};
use crate::templates::template_models::{ProposalDocument, RenderedDocument, TemplateData};
use crate::templates::template_trait::DocumentTemplate;

use super::{company_header, or_placeholder, unsupported};

pub struct ProposalQuoteTemplate;

impl ProposalQuoteTemplate {
    pub fn new() -> Self {
        Self
    }

    fn header_rows(&self, doc: &ProposalDocument, translator: &Translator) -> Vec<(String, String)> {
        let proposal = &doc.proposal;
        let refs = &doc.references;
        let t = |key: &str| translator.t(key);

        let date = match format_date(&proposal.created_at) {
            d if d.is_empty() => doc.generated_at().format("%d %b %Y").to_string(),
            d => d,
        };

        vec![
            (t("proposal.reference"), proposal.reference.clone()),
            (t("common.date"), date),
            (t("proposal.client"), or_placeholder(Some(&proposal.client_name), translator)),
            (
                t("proposal.agency"),
                or_placeholder(refs.agency(&proposal.agency_id).map(|a| a.name.as_str()), translator),
            ),
            (
                t("proposal.sales_person"),
                or_placeholder(refs.user(&proposal.sales_person_id).map(|u| u.name.as_str()), translator),
            ),
            (
                t("proposal.source"),
                or_placeholder(
                    proposal
                        .source_id
                        .as_deref()
                        .and_then(|id| refs.source(id))
                        .map(|s| s.name.as_str()),
                    translator,
                ),
            ),
            (
                t("proposal.destination"),
                or_placeholder(
                    proposal
                        .destination_id
                        .as_deref()
                        .and_then(|id| refs.destination(id))
                        .map(|d| d.name.as_str()),
                    translator,
                ),
            ),
            (t("proposal.status"), t(proposal.status.label_key())),
            (t("proposal.adults"), proposal.adults.to_string()),
            (t("proposal.children"), proposal.children.to_string()),
        ]
    }

    fn hotels_table(&self, proposal: &Proposal, refs: &ReferenceData, translator: &Translator) -> TableData {
        let t = |key: &str| translator.t(key);
        let mut table = TableData::new(vec![
            t("column.hotel"),
            t("column.destination"),
            t("column.checkin"),
            t("column.checkout"),
            t("column.nights"),
            t("column.rooms"),
            t("column.room_type"),
            t("column.board"),
            t("column.price"),
            t("column.total"),
        ])
        .with_column_widths(vec![2.6, 1.8, 1.6, 1.6, 1.0, 1.0, 1.5, 1.0, 1.5, 1.7])
        .with_alignment(numeric_tail(10, 6));

        for hotel in &proposal.hotels {
            table.add_row(vec![
                or_placeholder(refs.hotel(&hotel.hotel_id).map(|h| h.name.as_str()), translator),
                or_placeholder(
                    refs.hotel_destination(&hotel.hotel_id, hotel.destination_id.as_deref())
                        .map(|d| d.name.as_str()),
                    translator,
                ),
                format_date(&hotel.checkin),
                format_date(&hotel.checkout),
                calculate_nights(&hotel.checkin, &hotel.checkout).to_string(),
                hotel.num_rooms.to_string(),
                hotel.room_type.clone(),
                hotel.board_type.clone(),
                format_currency(parse_price(&hotel.price_per_night), &hotel.currency),
                format_currency(pricing::hotel_line_total(hotel), &hotel.currency),
            ]);
        }
        table
    }

    fn transportation_table(&self, proposal: &Proposal, translator: &Translator) -> TableData {
        let t = |key: &str| translator.t(key);
        let mut table = TableData::new(vec![
            t("column.vehicle"),
            t("column.pickup"),
            t("column.dropoff"),
            t("column.date"),
            t("column.days"),
            t("column.price"),
            t("column.total"),
        ])
        .with_column_widths(vec![2.0, 2.5, 2.5, 1.6, 0.9, 1.5, 1.7])
        .with_alignment(numeric_tail(7, 4));

        for item in &proposal.transportation {
            table.add_row(vec![
                item.vehicle_type.clone(),
                item.pickup.clone(),
                item.dropoff.clone(),
                format_date(&item.date),
                item.num_days.to_string(),
                format_currency(parse_price(&item.price_per_day), &item.currency),
                format_currency(pricing::transportation_line_total(item), &item.currency),
            ]);
        }
        table
    }

    fn flights_table(&self, proposal: &Proposal, translator: &Translator) -> TableData {
        let t = |key: &str| translator.t(key);
        let mut table = TableData::new(vec![
            t("column.airline"),
            t("column.flight_number"),
            t("column.from"),
            t("column.to"),
            t("column.departure"),
            t("column.pax"),
            t("column.price"),
            t("column.total"),
        ])
        .with_column_widths(vec![2.0, 1.3, 1.6, 1.6, 1.6, 0.8, 1.5, 1.7])
        .with_alignment(numeric_tail(8, 5));

        for flight in &proposal.flights {
            table.add_row(vec![
                flight.airline.clone(),
                flight.flight_number.clone(),
                flight.from.clone(),
                flight.to.clone(),
                format_date(&flight.departure),
                flight.pax.to_string(),
                format_currency(parse_price(&flight.price_per_pax), &flight.currency),
                format_currency(pricing::flight_line_total(flight), &flight.currency),
            ]);
        }
        table
    }

    fn rent_a_car_table(&self, proposal: &Proposal, translator: &Translator) -> TableData {
        let t = |key: &str| translator.t(key);
        let mut table = TableData::new(vec![
            t("column.car_type"),
            t("column.pickup"),
            t("column.date"),
            t("column.return"),
            t("column.days"),
            t("column.price"),
            t("column.total"),
        ])
        .with_column_widths(vec![2.0, 2.5, 1.6, 1.6, 0.9, 1.5, 1.7])
        .with_alignment(numeric_tail(7, 4));

        for car in &proposal.rent_a_car {
            table.add_row(vec![
                car.car_type.clone(),
                car.pickup_location.clone(),
                format_date(&car.pickup_date),
                format_date(&car.return_date),
                car.num_days.to_string(),
                format_currency(parse_price(&car.price_per_day), &car.currency),
                format_currency(pricing::rent_a_car_line_total(car), &car.currency),
            ]);
        }
        table
    }

    fn additional_services_table(&self, proposal: &Proposal, translator: &Translator) -> TableData {
        let t = |key: &str| translator.t(key);
        let mut table = TableData::new(vec![
            t("column.service"),
            t("column.description"),
            t("column.date"),
            t("column.pax"),
            t("column.days"),
            t("column.price"),
            t("column.total"),
        ])
        .with_column_widths(vec![2.2, 3.0, 1.6, 0.8, 0.8, 1.4, 1.6])
        .with_alignment(numeric_tail(7, 3));

        for service in &proposal.additional_services {
            table.add_row(vec![
                service.name.clone(),
                service.description.clone().unwrap_or_default(),
                service.date.as_deref().map(format_date).unwrap_or_default(),
                service.num_pax.to_string(),
                service.num_days.to_string(),
                format_currency(parse_price(&service.price), &service.currency),
                format_currency(pricing::additional_service_line_total(service), &service.currency),
            ]);
        }
        table
    }

    fn summary_table(&self, proposal: &Proposal, totals: &ProposalTotals, translator: &Translator) -> TableData {
        let t = |key: &str| translator.t(key);
        let money = |amount: f64| format_currency(amount, &proposal.currency);

        let mut table = TableData::new(vec![t("section.summary"), t("common.total")])
            .with_column_widths(vec![3.0, 1.0])
            .with_alignment(vec![ColumnAlign::Left, ColumnAlign::Right]);

        let variants = [
            ("section.hotels", totals.hotels, proposal.hotels.len()),
            ("section.transportation", totals.transportation, proposal.transportation.len()),
            ("section.flights", totals.flights, proposal.flights.len()),
            ("section.rent_a_car", totals.rent_a_car, proposal.rent_a_car.len()),
            ("section.additional_services", totals.additional_services, proposal.additional_services.len()),
        ];
        for (key, amount, count) in variants {
            if count > 0 {
                table.add_row(vec![t(key), money(amount)]);
            }
        }

        table.add_row(vec![t("proposal.subtotal"), money(totals.subtotal)]);
        table.add_row(vec![
            format!("{} ({})", t("proposal.margin"), format_percentage(proposal.margin)),
            money(totals.margin_amount),
        ]);
        table.add_row(vec![
            format!("{} ({})", t("proposal.commission"), format_percentage(proposal.commission)),
            money(totals.commission_amount),
        ]);
        table
    }

    fn render(&self, doc: &ProposalDocument, config: &PdfConfig) -> RenderedDocument {
        let proposal = &doc.proposal;
        let mut engine = LayoutEngine::new(config.clone(), doc.language());
        let translator = *engine.translator();
        let t = |key: &str| translator.t(key);

        engine.set_footer_note(format!("{} | {}", doc.company.name, proposal.reference));
        company_header(&mut engine, &doc.company, &t("proposal.title"), Color::NAVY);
        engine.key_value_rows(&self.header_rows(doc, &translator), 2);
        engine.spacer(4.0);

        let style = TableStyle::plain();
        let sections = [
            (
                "section.hotels",
                (!proposal.hotels.is_empty()).then(|| self.hotels_table(proposal, &doc.references, &translator)),
            ),
            (
                "section.transportation",
                (!proposal.transportation.is_empty()).then(|| self.transportation_table(proposal, &translator)),
            ),
            (
                "section.flights",
                (!proposal.flights.is_empty()).then(|| self.flights_table(proposal, &translator)),
            ),
            (
                "section.rent_a_car",
                (!proposal.rent_a_car.is_empty()).then(|| self.rent_a_car_table(proposal, &translator)),
            ),
            (
                "section.additional_services",
                (!proposal.additional_services.is_empty())
                    .then(|| self.additional_services_table(proposal, &translator)),
            ),
        ];
        for (key, table) in sections {
            if let Some(table) = table {
                engine.section_header(&t(key));
                engine.table(&table, &style);
                engine.spacer(3.0);
            }
        }

        let totals = proposal.totals();
        engine.section_header(&t("proposal.summary"));
        engine.table(&self.summary_table(proposal, &totals, &translator), &style);
        engine.text_line(
            format!(
                "{}: {}",
                t("proposal.final_total"),
                format_currency(totals.final_total, &proposal.currency)
            ),
            TextStyle::bold(12.0).with_color(Color::NAVY).aligned(TextAlign::Right),
        );

        if let Some(notes) = proposal.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            engine.spacer(3.0);
            engine.section_header(&t("common.notes"));
            engine.paragraph(notes, TextStyle::regular(config.font_size));
        }

        engine.spacer(4.0);
        engine.paragraph(
            &t("proposal.disclaimer"),
            TextStyle::regular(config.font_size - 1.5).with_color(Color::MID_GRAY),
        );

        let title = format!("{} {}", t("proposal.title"), proposal.reference);
        let document = engine.finish(title);
        tracing::info!(
            "Propuesta {} maquetada: {} páginas, total {:.2} {}",
            proposal.reference,
            document.page_count(),
            totals.final_total,
            proposal.currency
        );

        RenderedDocument {
            file_name: format!("proposal_{}.pdf", proposal.reference),
            document,
        }
    }
}

impl Default for ProposalQuoteTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Texto a la izquierda y columnas numéricas (desde `first_numeric`) a la derecha.
fn numeric_tail(columns: usize, first_numeric: usize) -> Vec<ColumnAlign> {
    (0..columns)
        .map(|col| {
            if col >= first_numeric {
                ColumnAlign::Right
            } else {
                ColumnAlign::Left
            }
        })
        .collect()
}

impl DocumentTemplate for ProposalQuoteTemplate {
    fn layout(&self, data: &TemplateData, config: &PdfConfig) -> DocumentResult<RenderedDocument> {
        self.validate(data)?;
        match data {
            TemplateData::Proposal(doc) => Ok(self.render(doc, config)),
            other => Err(unsupported(self.template_id(), other)),
        }
    }

    fn template_id(&self) -> &str {
        "proposal_quote"
    }

    fn validate(&self, data: &TemplateData) -> DocumentResult<()> {
        let TemplateData::Proposal(doc) = data else {
            return Err(unsupported(self.template_id(), data));
        };
        if doc.proposal.reference.trim().is_empty() {
            return Err(DocumentError::Validation(
                "La propuesta no tiene referencia".to_string(),
            ));
        }
        Ok(())
    }

    fn description(&self) -> &str {
        "Cotización de propuesta de viaje con tablas por servicio y resumen de precios"
    }
}
