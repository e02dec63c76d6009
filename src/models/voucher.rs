use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::line_item::LineItem;
use crate::templates::helpers::calculate_age;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherStatus {
    #[default]
    PendingPayment,
    Paid,
    Completed,
    Cancelled,
}

impl VoucherStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            VoucherStatus::PendingPayment => "status.pending_payment",
            VoucherStatus::Paid => "status.paid",
            VoucherStatus::Completed => "status.completed",
            VoucherStatus::Cancelled => "status.cancelled",
        }
    }
}

/// Acciones masivas del listado de bonos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherAction {
    MarkPaid,
    MarkCompleted,
    MarkCancelled,
}

impl VoucherAction {
    pub fn allows(&self, current: VoucherStatus) -> bool {
        match self {
            VoucherAction::MarkPaid => current == VoucherStatus::PendingPayment,
            VoucherAction::MarkCompleted => current == VoucherStatus::Paid,
            VoucherAction::MarkCancelled => {
                matches!(current, VoucherStatus::PendingPayment | VoucherStatus::Paid)
            }
        }
    }

    pub fn target(&self) -> VoucherStatus {
        match self {
            VoucherAction::MarkPaid => VoucherStatus::Paid,
            VoucherAction::MarkCompleted => VoucherStatus::Completed,
            VoucherAction::MarkCancelled => VoucherStatus::Cancelled,
        }
    }
}

impl fmt::Display for VoucherAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoucherAction::MarkPaid => write!(f, "mark_paid"),
            VoucherAction::MarkCompleted => write!(f, "mark_completed"),
            VoucherAction::MarkCancelled => write!(f, "mark_cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BatchError {
    #[error("Acción {action} no permitida para los bonos: {}", .offending_ids.join(", "))]
    InvalidTransition {
        action: VoucherAction,
        offending_ids: Vec<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub passport_number: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub birth_date: String,
}

impl Guest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        calculate_age(&self.birth_date, today)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: String,
    #[serde(default)]
    pub proposal_id: String,
    #[serde(default)]
    pub proposal_reference: String,
    #[serde(default)]
    pub agency_id: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    pub service_data: LineItem,
    #[serde(default)]
    pub status: VoucherStatus,
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub total_pax: u32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Voucher {
    /// Total de pasajeros; si no viene informado se deriva de adultos y niños.
    pub fn pax(&self) -> u32 {
        if self.total_pax > 0 {
            self.total_pax
        } else {
            self.adults.saturating_add(self.children)
        }
    }
}

/// Aplica `action` a todos los bonos o a ninguno.
///
/// Devuelve el número de bonos actualizados. Si alguno no cumple la
/// precondición de la acción, no se modifica ninguno y el error enumera
/// los ids rechazados.
pub fn apply_bulk_action(vouchers: &mut [Voucher], action: VoucherAction) -> Result<usize, BatchError> {
    let offending_ids: Vec<String> = vouchers
        .iter()
        .filter(|v| !action.allows(v.status))
        .map(|v| v.id.clone())
        .collect();

    if !offending_ids.is_empty() {
        tracing::warn!(
            "Acción {} rechazada: {} de {} bonos no la admiten",
            action,
            offending_ids.len(),
            vouchers.len()
        );
        return Err(BatchError::InvalidTransition { action, offending_ids });
    }

    let target = action.target();
    for voucher in vouchers.iter_mut() {
        voucher.status = target;
    }

    tracing::info!("Acción {} aplicada a {} bonos", action, vouchers.len());
    Ok(vouchers.len())
}
