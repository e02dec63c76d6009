//! Cálculo de totales de propuestas.
//!
//! Los totales se suman sin conversión de moneda: cada servicio aporta su
//! importe tal cual, aunque su moneda difiera de la de la propuesta.

use serde::{Deserialize, Serialize};

use crate::models::{
    AdditionalService, FlightService, HotelService, Proposal, RentACarService, TransportationService,
};
use crate::templates::helpers::{calculate_nights, parse_price};

pub fn hotel_line_total(item: &HotelService) -> f64 {
    let nights = calculate_nights(&item.checkin, &item.checkout);
    nights as f64 * parse_price(&item.price_per_night) * item.num_rooms as f64
}

pub fn transportation_line_total(item: &TransportationService) -> f64 {
    parse_price(&item.price_per_day) * item.num_days as f64
}

pub fn flight_line_total(item: &FlightService) -> f64 {
    parse_price(&item.price_per_pax) * item.pax as f64
}

pub fn rent_a_car_line_total(item: &RentACarService) -> f64 {
    parse_price(&item.price_per_day) * item.num_days as f64
}

/// Precio por persona y día.
pub fn additional_service_line_total(item: &AdditionalService) -> f64 {
    parse_price(&item.price) * item.num_pax as f64 * item.num_days as f64
}

pub fn hotels_total(items: &[HotelService]) -> f64 {
    items.iter().map(hotel_line_total).sum()
}

pub fn transportation_total(items: &[TransportationService]) -> f64 {
    items.iter().map(transportation_line_total).sum()
}

pub fn flights_total(items: &[FlightService]) -> f64 {
    items.iter().map(flight_line_total).sum()
}

pub fn rent_a_car_total(items: &[RentACarService]) -> f64 {
    items.iter().map(rent_a_car_line_total).sum()
}

pub fn additional_services_total(items: &[AdditionalService]) -> f64 {
    items.iter().map(additional_service_line_total).sum()
}

/// Margen y comisión se aplican sobre el mismo subtotal, sin encadenarse.
pub fn apply_markup(subtotal: f64, margin: f64, commission: f64) -> f64 {
    subtotal + subtotal * margin / 100.0 + subtotal * commission / 100.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalTotals {
    pub hotels: f64,
    pub transportation: f64,
    pub flights: f64,
    pub rent_a_car: f64,
    pub additional_services: f64,
    pub subtotal: f64,
    pub margin_amount: f64,
    pub commission_amount: f64,
    pub final_total: f64,
}

impl ProposalTotals {
    pub fn calculate(proposal: &Proposal) -> Self {
        let hotels = hotels_total(&proposal.hotels);
        let transportation = transportation_total(&proposal.transportation);
        let flights = flights_total(&proposal.flights);
        let rent_a_car = rent_a_car_total(&proposal.rent_a_car);
        let additional_services = additional_services_total(&proposal.additional_services);

        let subtotal = hotels + transportation + flights + rent_a_car + additional_services;
        let margin_amount = subtotal * proposal.margin / 100.0;
        let commission_amount = subtotal * proposal.commission / 100.0;

        ProposalTotals {
            hotels,
            transportation,
            flights,
            rent_a_car,
            additional_services,
            subtotal,
            margin_amount,
            commission_amount,
            final_total: apply_markup(subtotal, proposal.margin, proposal.commission),
        }
    }
}
