use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::PickupError;
use crate::domain::shared::value_objects::IndustryId;

/// An industry's request for waste collection of a given type and amount.
#[derive(Debug, Clone)]
pub struct PickupRequest {
    pub id: String,
    pub industry_id: IndustryId,
    pub waste_type: WasteType,
    pub amount_kg: u32,
    pub status: PickupStatus,
    pub request_date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl PickupRequest {
    pub fn new(
        industry_id: IndustryId,
        waste_type: WasteType,
        amount_kg: u32,
        notes: Option<String>,
    ) -> Result<Self, PickupError> {
        if amount_kg == 0 {
            return Err(PickupError::AmountNotPositive);
        }

        let request_date = Utc::now();
        Ok(Self {
            id: request_date.timestamp_millis().to_string(),
            industry_id,
            waste_type,
            amount_kg,
            status: PickupStatus::Pending,
            request_date,
            notes: notes.filter(|n| !n.trim().is_empty()),
        })
    }

    /// Constructor for data already persisted in the repository (no
    /// validation).
    pub fn from_repository(
        id: String,
        industry_id: IndustryId,
        waste_type: WasteType,
        amount_kg: u32,
        status: PickupStatus,
        request_date: DateTime<Utc>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            industry_id,
            waste_type,
            amount_kg,
            status,
            request_date,
            notes,
        }
    }

    /// A request can be withdrawn until the waste has actually been
    /// collected.
    pub fn is_cancellable(&self) -> bool {
        matches!(self.status, PickupStatus::Pending | PickupStatus::Assigned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteType {
    Plastic,
    Organic,
    Metal,
    Paper,
    Glass,
    Electronic,
    Textile,
    Chemical,
}

impl std::fmt::Display for WasteType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WasteType::Plastic => write!(f, "plastic"),
            WasteType::Organic => write!(f, "organic"),
            WasteType::Metal => write!(f, "metal"),
            WasteType::Paper => write!(f, "paper"),
            WasteType::Glass => write!(f, "glass"),
            WasteType::Electronic => write!(f, "electronic"),
            WasteType::Textile => write!(f, "textile"),
            WasteType::Chemical => write!(f, "chemical"),
        }
    }
}

impl std::str::FromStr for WasteType {
    type Err = PickupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plastic" => Ok(WasteType::Plastic),
            "organic" => Ok(WasteType::Organic),
            "metal" => Ok(WasteType::Metal),
            "paper" => Ok(WasteType::Paper),
            "glass" => Ok(WasteType::Glass),
            "electronic" => Ok(WasteType::Electronic),
            "textile" => Ok(WasteType::Textile),
            "chemical" => Ok(WasteType::Chemical),
            _ => Err(PickupError::UnknownWasteType),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupStatus {
    Pending,
    Assigned,
    PickedUp,
}

impl std::fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickupStatus::Pending => write!(f, "pending"),
            PickupStatus::Assigned => write!(f, "assigned"),
            PickupStatus::PickedUp => write!(f, "picked_up"),
        }
    }
}

impl std::str::FromStr for PickupStatus {
    type Err = PickupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PickupStatus::Pending),
            "assigned" => Ok(PickupStatus::Assigned),
            "picked_up" => Ok(PickupStatus::PickedUp),
            _ => Err(PickupError::UnknownStatus),
        }
    }
}
