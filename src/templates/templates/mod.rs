// Exportar todos los templates disponibles

mod colorful_vouchers;
mod plain_voucher;
mod proposal_quote;

pub use colorful_vouchers::ColorfulVouchersTemplate;
pub use plain_voucher::PlainVoucherTemplate;
pub use proposal_quote::ProposalQuoteTemplate;

use chrono::NaiveDate;

use crate::core::{ColumnAlign, DocumentError, TableData};
use crate::locale::Translator;
use crate::models::{CompanyInfo, Guest, LineItem, ReferenceData, ServiceType, VoucherStatus};
use crate::pdf::{Color, LayoutEngine, TextAlign, TextStyle};
use crate::templates::helpers::{calculate_nights, format_currency, format_date, parse_price};
use crate::templates::template_models::TemplateData;

const HEADER_HEIGHT: f32 = 16.0;

pub(crate) fn unsupported(template_id: &str, data: &TemplateData) -> DocumentError {
    DocumentError::Template(format!(
        "La plantilla {} no admite peticiones '{}'",
        template_id,
        data.template_id()
    ))
}

/// Nombre de la empresa y contacto a la izquierda, título a la derecha.
pub(crate) fn company_header(engine: &mut LayoutEngine, company: &CompanyInfo, title: &str, accent: Color) {
    engine.ensure_space(HEADER_HEIGHT);
    let (left, y, width) = (engine.left(), engine.cursor(), engine.content_width());

    engine.text_at(left, y, width * 0.6, company.name.clone(), TextStyle::bold(15.0).with_color(accent));
    engine.text_at(
        left + width * 0.5,
        y + 1.0,
        width * 0.5,
        title,
        TextStyle::bold(13.0).aligned(TextAlign::Right),
    );

    let small = TextStyle::regular(7.5).with_color(Color::MID_GRAY);
    let contact = company.contact_line();
    if !contact.is_empty() {
        engine.text_at(left, y + 7.0, width * 0.6, contact, small.clone());
    }
    if let Some(address) = &company.address {
        engine.text_at(left, y + 10.5, width * 0.6, address.single_line(), small);
    }

    engine.set_cursor(y + HEADER_HEIGHT - 1.0);
    engine.rule(accent, 1.0);
    engine.spacer(4.0);
}

/// Valor de una entidad de referencia o el marcador localizado.
pub(crate) fn or_placeholder(value: Option<&str>, translator: &Translator) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| translator.t("common.not_available"))
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn date_or_dash(value: &str) -> String {
    or_dash(&format_date(value))
}

/// Filas etiqueta/valor con el detalle de un servicio, total incluido.
pub(crate) fn service_detail_rows(
    item: &LineItem,
    references: &ReferenceData,
    translator: &Translator,
) -> Vec<(String, String)> {
    let t = |key: &str| translator.t(key);
    let mut rows = match item {
        LineItem::Hotel(h) => vec![
            (
                t("column.hotel"),
                or_placeholder(references.hotel(&h.hotel_id).map(|x| x.name.as_str()), translator),
            ),
            (
                t("column.destination"),
                or_placeholder(
                    references
                        .hotel_destination(&h.hotel_id, h.destination_id.as_deref())
                        .map(|d| d.name.as_str()),
                    translator,
                ),
            ),
            (t("column.checkin"), date_or_dash(&h.checkin)),
            (t("column.checkout"), date_or_dash(&h.checkout)),
            (t("column.nights"), calculate_nights(&h.checkin, &h.checkout).to_string()),
            (t("column.rooms"), h.num_rooms.to_string()),
            (t("column.room_type"), or_dash(&h.room_type)),
            (t("column.board"), or_dash(&h.board_type)),
            (t("column.price"), format_currency(parse_price(&h.price_per_night), &h.currency)),
        ],
        LineItem::Transportation(s) => vec![
            (t("column.vehicle"), or_dash(&s.vehicle_type)),
            (t("column.pickup"), or_dash(&s.pickup)),
            (t("column.dropoff"), or_dash(&s.dropoff)),
            (t("column.date"), date_or_dash(&s.date)),
            (t("column.days"), s.num_days.to_string()),
            (t("column.vehicles"), s.num_vehicles.to_string()),
            (t("column.price"), format_currency(parse_price(&s.price_per_day), &s.currency)),
        ],
        LineItem::Flight(f) => vec![
            (t("column.airline"), or_dash(&f.airline)),
            (t("column.flight_number"), or_dash(&f.flight_number)),
            (t("column.from"), or_dash(&f.from)),
            (t("column.to"), or_dash(&f.to)),
            (t("column.departure"), date_or_dash(&f.departure)),
            (t("column.arrival"), date_or_dash(f.arrival.as_deref().unwrap_or(""))),
            (t("column.pax"), f.pax.to_string()),
            (t("column.price"), format_currency(parse_price(&f.price_per_pax), &f.currency)),
        ],
        LineItem::RentACar(r) => vec![
            (t("column.car_type"), or_dash(&r.car_type)),
            (t("column.pickup"), or_dash(&r.pickup_location)),
            (t("column.date"), date_or_dash(&r.pickup_date)),
            (t("column.return"), date_or_dash(&r.return_date)),
            (t("column.days"), r.num_days.to_string()),
            (t("column.cars"), r.num_cars.to_string()),
            (t("column.price"), format_currency(parse_price(&r.price_per_day), &r.currency)),
        ],
        LineItem::AdditionalService(a) => vec![
            (t("column.service"), or_dash(&a.name)),
            (t("column.description"), or_dash(a.description.as_deref().unwrap_or(""))),
            (t("column.date"), date_or_dash(a.date.as_deref().unwrap_or(""))),
            (t("column.pax"), a.num_pax.to_string()),
            (t("column.days"), a.num_days.to_string()),
            (t("column.price"), format_currency(parse_price(&a.price), &a.currency)),
        ],
    };
    rows.push((
        t("column.total"),
        format_currency(item.stored_or_computed_total(), item.currency()),
    ));
    rows
}

/// Tabla de huéspedes con la edad calculada a fecha `today`.
pub(crate) fn guest_table(guests: &[Guest], today: NaiveDate, translator: &Translator) -> TableData {
    let t = |key: &str| translator.t(key);
    let mut table = TableData::new(vec![
        "#".to_string(),
        t("column.name"),
        t("column.passport"),
        t("column.nationality"),
        t("column.birth_date"),
        t("column.age"),
    ])
    .with_column_widths(vec![0.5, 3.0, 2.0, 1.8, 1.8, 0.9])
    .with_alignment(vec![
        ColumnAlign::Center,
        ColumnAlign::Left,
        ColumnAlign::Left,
        ColumnAlign::Left,
        ColumnAlign::Center,
        ColumnAlign::Center,
    ]);

    for (index, guest) in guests.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            guest.full_name(),
            or_dash(&guest.passport_number),
            or_dash(&guest.nationality),
            date_or_dash(&guest.birth_date),
            guest
                .age_on(today)
                .map(|age| age.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table
}

pub(crate) fn service_color(service: ServiceType) -> Color {
    match service {
        ServiceType::Hotel => Color::rgb(41, 98, 255),
        ServiceType::Transportation => Color::rgb(0, 137, 123),
        ServiceType::Flight => Color::rgb(94, 53, 177),
        ServiceType::RentACar => Color::rgb(239, 108, 0),
        ServiceType::AdditionalService => Color::rgb(194, 24, 91),
    }
}

pub(crate) fn status_color(status: VoucherStatus) -> Color {
    match status {
        VoucherStatus::PendingPayment => Color::rgb(245, 166, 35),
        VoucherStatus::Paid => Color::rgb(46, 160, 67),
        VoucherStatus::Completed => Color::rgb(25, 118, 210),
        VoucherStatus::Cancelled => Color::rgb(211, 47, 47),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Language;

    fn hotel_item() -> LineItem {
        serde_json::from_value(serde_json::json!({
            "serviceType": "hotel",
            "hotelId": "missing",
            "checkin": "2024-01-01",
            "checkout": "2024-01-04",
            "numRooms": 2,
            "pricePerNight": "100",
            "currency": "USD"
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_hotel_uses_placeholder() {
        let translator = Translator::new(Language::Turkish);
        let rows = service_detail_rows(&hotel_item(), &ReferenceData::default(), &translator);
        assert_eq!(rows[0].1, "Yok");
        assert_eq!(rows[1].1, "Yok");
        assert_eq!(rows.last().unwrap().1, "$600.00");
    }

    #[test]
    fn test_detail_rows_prefer_stored_total() {
        let translator = Translator::new(Language::English);
        let item = hotel_item().with_stored_total();
        let LineItem::Hotel(mut hotel) = item else {
            panic!("expected hotel");
        };
        hotel.total_price = Some("550".into());
        let rows = service_detail_rows(&LineItem::Hotel(hotel), &ReferenceData::default(), &translator);
        assert_eq!(rows.last().unwrap(), &("Total".to_string(), "$550.00".to_string()));
    }

    #[test]
    fn test_guest_table_computes_age() {
        let guests: Vec<Guest> = serde_json::from_value(serde_json::json!([
            {"firstName": "Ali", "lastName": "Kaya", "birthDate": "1990-06-15"},
            {"firstName": "Zeynep", "lastName": "Kaya"}
        ]))
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let table = guest_table(&guests, today, &Translator::new(Language::English));

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][1], "Ali Kaya");
        assert_eq!(table.rows[0][5], "33");
        assert_eq!(table.rows[1][5], "-");
    }
}
