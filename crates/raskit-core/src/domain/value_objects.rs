//! Domain value objects: profiles, roughness, bank stations, reach lengths.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity, no mutation
//! after assembly. Construction never fails; each type carries a
//! `validate` method and the emitters call it (through
//! [`DomainValidator`](crate::domain::DomainValidator)) before any text is
//! produced.
//!
//! Triplets and pairs serialise as plain TOML arrays, so a model file reads
//! `mannings_n = [0.05, 0.03, 0.05]` rather than a nested table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── StationElevation ─────────────────────────────────────────────────────────

/// One point of a cross-section: horizontal station and bed elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct StationElevation {
    pub station: f64,
    pub elevation: f64,
}

impl StationElevation {
    pub const fn new(station: f64, elevation: f64) -> Self {
        Self { station, elevation }
    }
}

impl From<[f64; 2]> for StationElevation {
    fn from([station, elevation]: [f64; 2]) -> Self {
        Self::new(station, elevation)
    }
}

impl From<StationElevation> for [f64; 2] {
    fn from(p: StationElevation) -> Self {
        [p.station, p.elevation]
    }
}

impl From<(f64, f64)> for StationElevation {
    fn from((station, elevation): (f64, f64)) -> Self {
        Self::new(station, elevation)
    }
}

// ── CrossSectionProfile ──────────────────────────────────────────────────────

/// Ordered station/elevation points describing a channel cross-section.
///
/// Invariant (checked by [`validate`](Self::validate)): at least two points,
/// all finite, stations non-decreasing. A repeated station models a
/// vertical wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrossSectionProfile {
    points: Vec<StationElevation>,
}

impl CrossSectionProfile {
    pub fn new(points: impl IntoIterator<Item = impl Into<StationElevation>>) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    pub fn points(&self) -> &[StationElevation] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First station, or `None` for an empty profile.
    pub fn first_station(&self) -> Option<f64> {
        self.points.first().map(|p| p.station)
    }

    /// Last station, or `None` for an empty profile.
    pub fn last_station(&self) -> Option<f64> {
        self.points.last().map(|p| p.station)
    }

    /// A copy with every elevation raised by `dz`.
    pub fn shifted(&self, dz: f64) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| StationElevation::new(p.station, p.elevation + dz))
                .collect(),
        }
    }

    /// Check the profile invariants. `section` names the profile in errors.
    pub fn validate(&self, section: &str) -> Result<(), DomainError> {
        if self.points.len() < 2 {
            return Err(DomainError::TooFewPoints {
                section: section.to_string(),
                count: self.points.len(),
            });
        }

        for (index, p) in self.points.iter().enumerate() {
            if !p.station.is_finite() || !p.elevation.is_finite() {
                return Err(DomainError::NonFiniteCoordinate {
                    section: section.to_string(),
                    index,
                });
            }
        }

        for (index, pair) in self.points.windows(2).enumerate() {
            if pair[1].station < pair[0].station {
                return Err(DomainError::StationsOutOfOrder {
                    section: section.to_string(),
                    index: index + 1,
                    station: pair[1].station,
                    previous: pair[0].station,
                });
            }
        }

        Ok(())
    }
}

// ── RoughnessZones ───────────────────────────────────────────────────────────

/// Manning's n for the left overbank, main channel and right overbank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct RoughnessZones {
    pub left_overbank: f64,
    pub channel: f64,
    pub right_overbank: f64,
}

impl RoughnessZones {
    pub const fn new(left_overbank: f64, channel: f64, right_overbank: f64) -> Self {
        Self {
            left_overbank,
            channel,
            right_overbank,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        positive("Manning's n (left overbank)", self.left_overbank)?;
        positive("Manning's n (channel)", self.channel)?;
        positive("Manning's n (right overbank)", self.right_overbank)
    }
}

impl From<[f64; 3]> for RoughnessZones {
    fn from([l, c, r]: [f64; 3]) -> Self {
        Self::new(l, c, r)
    }
}

impl From<RoughnessZones> for [f64; 3] {
    fn from(z: RoughnessZones) -> Self {
        [z.left_overbank, z.channel, z.right_overbank]
    }
}

// ── BankStations ─────────────────────────────────────────────────────────────

/// Stations splitting a section into overbank and channel zones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct BankStations {
    pub left: f64,
    pub right: f64,
}

impl BankStations {
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Both banks must lie strictly inside the profile's station extent.
    pub fn validate_within(
        &self,
        profile: &CrossSectionProfile,
        section: &str,
    ) -> Result<(), DomainError> {
        if !(self.left.is_finite() && self.right.is_finite() && self.left < self.right) {
            return Err(DomainError::BankStationsUnordered {
                left: self.left,
                right: self.right,
            });
        }

        let (Some(min), Some(max)) = (profile.first_station(), profile.last_station()) else {
            return Err(DomainError::TooFewPoints {
                section: section.to_string(),
                count: 0,
            });
        };

        for station in [self.left, self.right] {
            if station <= min || station >= max {
                return Err(DomainError::BankStationOutsideProfile {
                    section: section.to_string(),
                    station,
                    min,
                    max,
                });
            }
        }

        Ok(())
    }
}

impl From<[f64; 2]> for BankStations {
    fn from([left, right]: [f64; 2]) -> Self {
        Self::new(left, right)
    }
}

impl From<BankStations> for [f64; 2] {
    fn from(b: BankStations) -> Self {
        [b.left, b.right]
    }
}

// ── ReachLengths ─────────────────────────────────────────────────────────────

/// Distances from a cross-section to the next one downstream, per zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct ReachLengths {
    pub left_overbank: f64,
    pub channel: f64,
    pub right_overbank: f64,
}

impl ReachLengths {
    pub const fn new(left_overbank: f64, channel: f64, right_overbank: f64) -> Self {
        Self {
            left_overbank,
            channel,
            right_overbank,
        }
    }

    /// Same length in every zone.
    pub const fn uniform(length: f64) -> Self {
        Self::new(length, length, length)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        positive("reach length (left overbank)", self.left_overbank)?;
        positive("reach length (channel)", self.channel)?;
        positive("reach length (right overbank)", self.right_overbank)
    }
}

impl From<[f64; 3]> for ReachLengths {
    fn from([l, c, r]: [f64; 3]) -> Self {
        Self::new(l, c, r)
    }
}

impl From<ReachLengths> for [f64; 3] {
    fn from(r: ReachLengths) -> Self {
        [r.left_overbank, r.channel, r.right_overbank]
    }
}

// ── RiverStations ────────────────────────────────────────────────────────────

/// River-station labels of the upstream and downstream cross-sections.
///
/// By convention stations grow upstream, so `upstream > downstream`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiverStations {
    pub upstream: f64,
    pub downstream: f64,
}

impl RiverStations {
    pub const UPSTREAM: f64 = 2000.0;
    pub const DOWNSTREAM: f64 = 1000.0;

    pub const fn new(upstream: f64, downstream: f64) -> Self {
        Self {
            upstream,
            downstream,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !(self.upstream.is_finite()
            && self.downstream.is_finite()
            && self.upstream > self.downstream)
        {
            return Err(DomainError::RiverStationsUnordered {
                upstream: self.upstream,
                downstream: self.downstream,
            });
        }
        Ok(())
    }
}

impl Default for RiverStations {
    fn default() -> Self {
        Self::new(Self::UPSTREAM, Self::DOWNSTREAM)
    }
}

// ── UnitSystem ───────────────────────────────────────────────────────────────

/// Unit system flag written into the project manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitSystem {
    #[default]
    Metric,
    UsCustomary,
}

impl UnitSystem {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::UsCustomary => "us-customary",
        }
    }

    /// The manifest line selecting this unit system.
    pub const fn manifest_line(&self) -> &'static str {
        match self {
            Self::Metric => "SI Units",
            Self::UsCustomary => "English Units",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metric" | "si" => Ok(Self::Metric),
            "us-customary" | "us" | "english" | "imperial" => Ok(Self::UsCustomary),
            other => Err(DomainError::InvalidModel(format!(
                "unknown unit system '{}'",
                other
            ))),
        }
    }
}

// ── helpers ──────────────────────────────────────────────────────────────────

pub(crate) fn positive(field: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::NonPositive { field, value })
    }
}

pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::EmptyName { field })
    } else {
        Ok(())
    }
}
