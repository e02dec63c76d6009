use serde::{Deserialize, Deserializer, Serialize};

use crate::pricing;
use crate::templates::helpers::try_parse_price;

/// Precio tal y como llega del formulario: texto decimal o número JSON.
fn deserialize_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(f64),
        Null(()),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(text) => text,
        RawPrice::Number(number) => number.to_string(),
        RawPrice::Null(()) => String::new(),
    })
}

fn deserialize_optional_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let price = deserialize_price(deserializer)?;
    Ok(if price.trim().is_empty() { None } else { Some(price) })
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceType {
    Hotel,
    Transportation,
    Flight,
    RentACar,
    AdditionalService,
}

impl ServiceType {
    pub fn label_key(&self) -> &'static str {
        match self {
            ServiceType::Hotel => "service.hotel",
            ServiceType::Transportation => "service.transportation",
            ServiceType::Flight => "service.flight",
            ServiceType::RentACar => "service.rent_a_car",
            ServiceType::AdditionalService => "service.additional_service",
        }
    }

    pub fn section_key(&self) -> &'static str {
        match self {
            ServiceType::Hotel => "section.hotels",
            ServiceType::Transportation => "section.transportation",
            ServiceType::Flight => "section.flights",
            ServiceType::RentACar => "section.rent_a_car",
            ServiceType::AdditionalService => "section.additional_services",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelService {
    pub hotel_id: String,
    #[serde(default)]
    pub destination_id: Option<String>,
    #[serde(default)]
    pub checkin: String,
    #[serde(default)]
    pub checkout: String,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub board_type: String,
    #[serde(default = "one")]
    pub num_rooms: u32,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price_per_night: String,
    pub currency: String,
    #[serde(default, deserialize_with = "deserialize_optional_price")]
    pub total_price: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationService {
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub pickup: String,
    #[serde(default)]
    pub dropoff: String,
    #[serde(default)]
    pub date: String,
    #[serde(default = "one")]
    pub num_days: u32,
    #[serde(default = "one")]
    pub num_vehicles: u32,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price_per_day: String,
    pub currency: String,
    #[serde(default, deserialize_with = "deserialize_optional_price")]
    pub total_price: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightService {
    #[serde(default)]
    pub airline: String,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub departure: String,
    #[serde(default)]
    pub arrival: Option<String>,
    #[serde(default = "one")]
    pub pax: u32,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price_per_pax: String,
    pub currency: String,
    #[serde(default, deserialize_with = "deserialize_optional_price")]
    pub total_price: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentACarService {
    #[serde(default)]
    pub car_type: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub pickup_date: String,
    #[serde(default)]
    pub return_date: String,
    #[serde(default = "one")]
    pub num_days: u32,
    #[serde(default = "one")]
    pub num_cars: u32,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price_per_day: String,
    pub currency: String,
    #[serde(default, deserialize_with = "deserialize_optional_price")]
    pub total_price: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalService {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default = "one")]
    pub num_pax: u32,
    #[serde(default = "one")]
    pub num_days: u32,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: String,
    pub currency: String,
    #[serde(default, deserialize_with = "deserialize_optional_price")]
    pub total_price: Option<String>,
}

/// Un servicio contratable; el tipo decide qué campos existen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "serviceType", rename_all = "camelCase")]
pub enum LineItem {
    Hotel(HotelService),
    Transportation(TransportationService),
    Flight(FlightService),
    RentACar(RentACarService),
    AdditionalService(AdditionalService),
}

impl LineItem {
    pub fn service_type(&self) -> ServiceType {
        match self {
            LineItem::Hotel(_) => ServiceType::Hotel,
            LineItem::Transportation(_) => ServiceType::Transportation,
            LineItem::Flight(_) => ServiceType::Flight,
            LineItem::RentACar(_) => ServiceType::RentACar,
            LineItem::AdditionalService(_) => ServiceType::AdditionalService,
        }
    }

    pub fn currency(&self) -> &str {
        match self {
            LineItem::Hotel(s) => &s.currency,
            LineItem::Transportation(s) => &s.currency,
            LineItem::Flight(s) => &s.currency,
            LineItem::RentACar(s) => &s.currency,
            LineItem::AdditionalService(s) => &s.currency,
        }
    }

    fn stored_total(&self) -> Option<&str> {
        match self {
            LineItem::Hotel(s) => s.total_price.as_deref(),
            LineItem::Transportation(s) => s.total_price.as_deref(),
            LineItem::Flight(s) => s.total_price.as_deref(),
            LineItem::RentACar(s) => s.total_price.as_deref(),
            LineItem::AdditionalService(s) => s.total_price.as_deref(),
        }
    }

    /// Total calculado a partir de precio unitario y cantidades.
    pub fn computed_total(&self) -> f64 {
        match self {
            LineItem::Hotel(s) => pricing::hotel_line_total(s),
            LineItem::Transportation(s) => pricing::transportation_line_total(s),
            LineItem::Flight(s) => pricing::flight_line_total(s),
            LineItem::RentACar(s) => pricing::rent_a_car_line_total(s),
            LineItem::AdditionalService(s) => pricing::additional_service_line_total(s),
        }
    }

    /// Total guardado en el bono si existe y es numérico; si no, el calculado.
    pub fn stored_or_computed_total(&self) -> f64 {
        self.stored_total()
            .and_then(try_parse_price)
            .unwrap_or_else(|| self.computed_total())
    }

    /// Copia del servicio con `totalPrice` fijado al total calculado.
    pub fn with_stored_total(&self) -> LineItem {
        let total = Some(format!("{:.2}", self.computed_total()));
        let mut item = self.clone();
        match &mut item {
            LineItem::Hotel(s) => s.total_price = total,
            LineItem::Transportation(s) => s.total_price = total,
            LineItem::Flight(s) => s.total_price = total,
            LineItem::RentACar(s) => s.total_price = total,
            LineItem::AdditionalService(s) => s.total_price = total,
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_hotel() {
        let json = r#"{
            "serviceType": "hotel",
            "hotelId": "h1",
            "checkin": "2024-01-01",
            "checkout": "2024-01-04",
            "numRooms": 2,
            "pricePerNight": "100",
            "currency": "USD"
        }"#;

        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.service_type(), ServiceType::Hotel);
        assert_eq!(item.computed_total(), 600.0);
    }

    #[test]
    fn test_numeric_price_is_accepted() {
        let json = r#"{"serviceType": "flight", "pax": 3, "pricePerPax": 250.5, "currency": "EUR"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.computed_total(), 751.5);
    }

    #[test]
    fn test_negative_unit_price_never_gives_negative_total() {
        let json = r#"{"serviceType": "flight", "pax": 2, "pricePerPax": "-150", "currency": "USD"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.computed_total(), 0.0);

        let json = r#"{"serviceType": "hotel", "hotelId": "h1", "checkin": "2024-01-01", "checkout": "2024-01-03", "pricePerNight": -80, "currency": "USD", "totalPrice": "-160"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.stored_or_computed_total(), 0.0);
    }

    #[test]
    fn test_additional_service_defaults_quantities_to_one() {
        let json = r#"{"serviceType": "additionalService", "name": "Guide", "price": "80", "currency": "USD"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.computed_total(), 80.0);
    }

    #[test]
    fn test_stored_total_wins_when_numeric() {
        let json = r#"{"serviceType": "rentACar", "numDays": 4, "pricePerDay": "50", "currency": "USD", "totalPrice": "180"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.stored_or_computed_total(), 180.0);

        let json = r#"{"serviceType": "rentACar", "numDays": 4, "pricePerDay": "50", "currency": "USD", "totalPrice": "n/a"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.stored_or_computed_total(), 200.0);
    }

    #[test]
    fn test_with_stored_total() {
        let json = r#"{"serviceType": "transportation", "numDays": 2, "pricePerDay": "75.5", "currency": "USD"}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        match item.with_stored_total() {
            LineItem::Transportation(s) => assert_eq!(s.total_price.as_deref(), Some("151.00")),
            other => panic!("unexpected variant {:?}", other.service_type()),
        }
    }
}
