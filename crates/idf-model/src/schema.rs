//! Schema catalogue for equipment integrity records.
//!
//! Each column is known by two names: the display name used in the source
//! spreadsheet export (bit-exact, including spacing and casing) and the
//! canonical snake-case identifier used after normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// How the normalizer treats a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Converted to string form and trimmed.
    Text,
    /// Parsed as a float; unparseable cells become missing.
    Numeric,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Text => "text",
            ColumnKind::Numeric => "numeric",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntegrityColumn {
    UnitId,
    CircuitTag,
    EquipmentId,
    DamageMechanism,
    DesignPressure,
    DesignTemperature,
    LastInspectionDate,
    MaxStcr,
    MaxLtcr,
    RiskRank,
}

impl IntegrityColumn {
    /// Every known column, in catalogue order.
    pub const ALL: [IntegrityColumn; 10] = [
        IntegrityColumn::UnitId,
        IntegrityColumn::CircuitTag,
        IntegrityColumn::EquipmentId,
        IntegrityColumn::DamageMechanism,
        IntegrityColumn::DesignPressure,
        IntegrityColumn::DesignTemperature,
        IntegrityColumn::LastInspectionDate,
        IntegrityColumn::MaxStcr,
        IntegrityColumn::MaxLtcr,
        IntegrityColumn::RiskRank,
    ];

    /// Columns that must be present before any row is inspected.
    pub const REQUIRED: [IntegrityColumn; 4] = [
        IntegrityColumn::UnitId,
        IntegrityColumn::CircuitTag,
        IntegrityColumn::EquipmentId,
        IntegrityColumn::DamageMechanism,
    ];

    /// Header text as it appears in the source export.
    pub fn display_name(&self) -> &'static str {
        match self {
            IntegrityColumn::UnitId => "Unit ID",
            IntegrityColumn::CircuitTag => "Circuit /Equipment Tag",
            IntegrityColumn::EquipmentId => "Equipment ID (Asset ID)",
            IntegrityColumn::DamageMechanism => "Damage Mechanism as per Corrosion Study",
            IntegrityColumn::DesignPressure => "Design Pressure (KPag)",
            IntegrityColumn::DesignTemperature => "Design Temperature (deg. C)",
            IntegrityColumn::LastInspectionDate => "Last Inspection Date",
            IntegrityColumn::MaxStcr => "Max STCR (MPY)",
            IntegrityColumn::MaxLtcr => "Max LTCR (MPY)",
            IntegrityColumn::RiskRank => "Risk Rank",
        }
    }

    pub fn canonical_name(&self) -> &'static str {
        match self {
            IntegrityColumn::UnitId => "unit_id",
            IntegrityColumn::CircuitTag => "circuit_tag",
            IntegrityColumn::EquipmentId => "equipment_id",
            IntegrityColumn::DamageMechanism => "damage_mechanism",
            IntegrityColumn::DesignPressure => "design_pressure_kpag",
            IntegrityColumn::DesignTemperature => "design_temperature_c",
            IntegrityColumn::LastInspectionDate => "last_inspection_date",
            IntegrityColumn::MaxStcr => "max_stcr_mpy",
            IntegrityColumn::MaxLtcr => "max_ltcr_mpy",
            IntegrityColumn::RiskRank => "risk_rank",
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            IntegrityColumn::DesignPressure
            | IntegrityColumn::DesignTemperature
            | IntegrityColumn::MaxStcr
            | IntegrityColumn::MaxLtcr => ColumnKind::Numeric,
            _ => ColumnKind::Text,
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    pub fn description(&self) -> &'static str {
        match self {
            IntegrityColumn::UnitId => "Unit identifier, e.g. 612",
            IntegrityColumn::CircuitTag => "Circuit or equipment tag",
            IntegrityColumn::EquipmentId => "Equipment identifier, e.g. 612C-6003",
            IntegrityColumn::DamageMechanism => "Primary damage mechanism label",
            IntegrityColumn::DesignPressure => "Design pressure in kilopascals gauge, >= 0",
            IntegrityColumn::DesignTemperature => "Design temperature in degrees Celsius",
            IntegrityColumn::LastInspectionDate => "Last inspection date, YYYY-MM-DD",
            IntegrityColumn::MaxStcr => "Maximum short-term corrosion rate (mils per year)",
            IntegrityColumn::MaxLtcr => "Maximum long-term corrosion rate (mils per year)",
            IntegrityColumn::RiskRank => "Low, Medium or High",
        }
    }

    /// Exact-match lookup by source header.
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.display_name() == name)
    }

    pub fn from_canonical_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.canonical_name() == name)
    }
}

impl fmt::Display for IntegrityColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for IntegrityColumn {
    type Err = ModelError;

    /// Accepts either the display name or the canonical identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_name(s)
            .or_else(|| Self::from_canonical_name(s))
            .ok_or_else(|| ModelError::UnknownColumn(s.to_string()))
    }
}
