use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::line_item::{
    AdditionalService, FlightService, HotelService, LineItem, RentACarService, TransportationService,
};
use super::voucher::{Voucher, VoucherStatus};
use crate::locale::Language;
use crate::pricing::ProposalTotals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    #[default]
    New,
    Confirmed,
    Cancelled,
}

impl ProposalStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            ProposalStatus::New => "status.new",
            ProposalStatus::Confirmed => "status.confirmed",
            ProposalStatus::Cancelled => "status.cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("La propuesta {reference} está en estado {from:?} y no puede pasar a {to:?}")]
pub struct ProposalTransitionError {
    pub reference: String,
    pub from: ProposalStatus,
    pub to: ProposalStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub reference: String,
    pub client_name: String,
    #[serde(default)]
    pub agency_id: String,
    #[serde(default)]
    pub sales_person_id: String,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub destination_id: Option<String>,
    #[serde(default)]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub hotels: Vec<HotelService>,
    #[serde(default)]
    pub transportation: Vec<TransportationService>,
    #[serde(default)]
    pub flights: Vec<FlightService>,
    #[serde(default)]
    pub rent_a_car: Vec<RentACarService>,
    #[serde(default)]
    pub additional_services: Vec<AdditionalService>,
    #[serde(default)]
    pub margin: f64,
    #[serde(default)]
    pub commission: f64,
    pub currency: String,
    #[serde(default)]
    pub status: ProposalStatus,
    #[serde(default)]
    pub pdf_language: Language,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Proposal {
    pub fn totals(&self) -> ProposalTotals {
        ProposalTotals::calculate(self)
    }

    pub fn total_pax(&self) -> u32 {
        self.adults.saturating_add(self.children)
    }

    /// Todos los servicios en orden de documento: hoteles, traslados,
    /// vuelos, alquiler de coches y servicios adicionales.
    pub fn line_items(&self) -> Vec<LineItem> {
        self.hotels
            .iter()
            .cloned()
            .map(LineItem::Hotel)
            .chain(self.transportation.iter().cloned().map(LineItem::Transportation))
            .chain(self.flights.iter().cloned().map(LineItem::Flight))
            .chain(self.rent_a_car.iter().cloned().map(LineItem::RentACar))
            .chain(self.additional_services.iter().cloned().map(LineItem::AdditionalService))
            .collect()
    }

    pub fn has_services(&self) -> bool {
        !(self.hotels.is_empty()
            && self.transportation.is_empty()
            && self.flights.is_empty()
            && self.rent_a_car.is_empty()
            && self.additional_services.is_empty())
    }

    fn transition(&mut self, to: ProposalStatus) -> Result<(), ProposalTransitionError> {
        if self.status != ProposalStatus::New {
            return Err(ProposalTransitionError {
                reference: self.reference.clone(),
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    /// Confirma la propuesta y devuelve un bono por cada servicio.
    pub fn confirm(&mut self, now: DateTime<Utc>) -> Result<Vec<Voucher>, ProposalTransitionError> {
        self.transition(ProposalStatus::Confirmed)?;
        let vouchers = vouchers_from_proposal(self, now);
        tracing::info!(
            "Propuesta {} confirmada, {} bonos generados",
            self.reference,
            vouchers.len()
        );
        Ok(vouchers)
    }

    pub fn cancel(&mut self) -> Result<(), ProposalTransitionError> {
        self.transition(ProposalStatus::Cancelled)
    }
}

/// Un bono pendiente de pago por servicio, con el total calculado guardado.
pub fn vouchers_from_proposal(proposal: &Proposal, now: DateTime<Utc>) -> Vec<Voucher> {
    proposal
        .line_items()
        .iter()
        .enumerate()
        .map(|(index, item)| Voucher {
            id: format!("{}-V{:02}", proposal.reference, index + 1),
            proposal_id: proposal.id.clone(),
            proposal_reference: proposal.reference.clone(),
            agency_id: Some(proposal.agency_id.clone()).filter(|id| !id.is_empty()),
            client_name: Some(proposal.client_name.clone()),
            service_data: item.with_stored_total(),
            status: VoucherStatus::PendingPayment,
            guests: Vec::new(),
            adults: proposal.adults,
            children: proposal.children,
            total_pax: proposal.total_pax(),
            notes: None,
            created_at: now.to_rfc3339(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Proposal {
        serde_json::from_value(serde_json::json!({
            "id": "p1",
            "reference": "PRP-2024-001",
            "clientName": "Ahmed Yilmaz",
            "agencyId": "a1",
            "adults": 2,
            "children": 1,
            "hotels": [{
                "hotelId": "h1",
                "checkin": "2024-01-01",
                "checkout": "2024-01-04",
                "numRooms": 2,
                "pricePerNight": "100",
                "currency": "USD"
            }],
            "flights": [{"pax": 3, "pricePerPax": "200", "currency": "USD"}],
            "margin": 10,
            "commission": 5,
            "currency": "USD"
        }))
        .unwrap()
    }

    #[test]
    fn test_defaults_from_json() {
        let proposal = sample();
        assert_eq!(proposal.status, ProposalStatus::New);
        assert_eq!(proposal.pdf_language, Language::English);
        assert_eq!(proposal.total_pax(), 3);
        assert!(proposal.has_services());
    }

    #[test]
    fn test_line_items_keep_document_order() {
        let types: Vec<_> = sample().line_items().iter().map(|i| i.service_type()).collect();
        assert_eq!(
            types,
            vec![crate::models::ServiceType::Hotel, crate::models::ServiceType::Flight]
        );
    }

    #[test]
    fn test_confirm_generates_one_voucher_per_service() {
        let mut proposal = sample();
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let vouchers = proposal.confirm(now).unwrap();

        assert_eq!(proposal.status, ProposalStatus::Confirmed);
        assert_eq!(vouchers.len(), 2);
        assert_eq!(vouchers[0].id, "PRP-2024-001-V01");
        assert_eq!(vouchers[0].status, VoucherStatus::PendingPayment);
        assert_eq!(vouchers[0].service_data.stored_or_computed_total(), 600.0);
        assert_eq!(vouchers[1].service_data.stored_or_computed_total(), 600.0);
        assert_eq!(vouchers[1].total_pax, 3);
    }

    #[test]
    fn test_invalid_pdf_language_defaults_to_english() {
        for selector in [serde_json::Value::Null, serde_json::json!(7), serde_json::json!("klingon")] {
            let mut raw = serde_json::to_value(sample()).unwrap();
            raw["pdfLanguage"] = selector;
            let proposal: Proposal = serde_json::from_value(raw).unwrap();
            assert_eq!(proposal.pdf_language, Language::English);
        }
    }

    #[test]
    fn test_total_pax_saturates() {
        let mut proposal = sample();
        proposal.adults = u32::MAX;
        proposal.children = 3;
        assert_eq!(proposal.total_pax(), u32::MAX);
    }

    #[test]
    fn test_only_new_proposals_transition() {
        let mut proposal = sample();
        proposal.cancel().unwrap();
        assert_eq!(proposal.status, ProposalStatus::Cancelled);

        let err = proposal.confirm(Utc::now()).unwrap_err();
        assert_eq!(err.from, ProposalStatus::Cancelled);
        assert_eq!(err.to, ProposalStatus::Confirmed);
        assert_eq!(proposal.status, ProposalStatus::Cancelled);
    }
}
