//! # Unit Types
//!
//! Type-safe wrappers for the engineering units used throughout the engine.
//! These provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The engine uses one consistent SI unit set
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! The engine works in the unit set common to rock-support design practice:
//! - Length: metres (m)
//! - Force: kilonewtons (kN)
//! - Stress/strength: megapascals (MPa)
//! - Pressure/uniform load: kilonewtons per square metre (kN/m²)
//! - Moment: kilonewton-metres per metre width (kN·m/m)
//! - Unit weight: kilonewtons per cubic metre (kN/m³)
//! - Angle: degrees
//!
//! ## Example
//!
//! ```rust
//! use shotcrete_core::units::{Megapascals, KnPerSqMetre, Degrees};
//!
//! let bond = Megapascals(1.0);
//! let as_pressure: KnPerSqMetre = bond.into();
//! assert_eq!(as_pressure.0, 1000.0);
//!
//! let theta = Degrees(60.0);
//! assert!((theta.to_radians() - 1.047).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// 1 MPa = 1000 kN/m²
pub const MPA_TO_KN_M2: f64 = 1000.0;

// ============================================================================
// Length
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metres(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimetres(pub f64);

impl From<Metres> for Millimetres {
    fn from(m: Metres) -> Self {
        Millimetres(m.0 * 1000.0)
    }
}

impl From<Millimetres> for Metres {
    fn from(mm: Millimetres) -> Self {
        Metres(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

// ============================================================================
// Stress & Pressure
// ============================================================================

/// Stress/strength in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Pressure / uniform panel load in kN/m²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerSqMetre(pub f64);

impl From<Megapascals> for KnPerSqMetre {
    fn from(mpa: Megapascals) -> Self {
        KnPerSqMetre(mpa.0 * MPA_TO_KN_M2)
    }
}

impl From<KnPerSqMetre> for Megapascals {
    fn from(kpa: KnPerSqMetre) -> Self {
        Megapascals(kpa.0 / MPA_TO_KN_M2)
    }
}

// ============================================================================
// Moment (strip method, per metre width)
// ============================================================================

/// Moment per metre width in kN·m/m
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnMetresPerMetre(pub f64);

// ============================================================================
// Unit Weight
// ============================================================================

/// Unit weight (density as weight) in kN/m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerCubicMetre(pub f64);

// ============================================================================
// Angle
// ============================================================================

/// Angle in degrees, measured from the horizontal base plane
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Convert to radians for trigonometry
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Metres);
impl_arithmetic!(Millimetres);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(Megapascals);
impl_arithmetic!(KnPerSqMetre);
impl_arithmetic!(KnMetresPerMetre);
impl_arithmetic!(KnPerCubicMetre);
impl_arithmetic!(Degrees);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metres_to_millimetres() {
        let m = Metres(0.1);
        let mm: Millimetres = m.into();
        assert!((mm.0 - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_mpa_to_kn_m2() {
        let mpa = Megapascals(1.5);
        let kpa: KnPerSqMetre = mpa.into();
        assert_eq!(kpa.0, 1500.0);

        let back: Megapascals = kpa.into();
        assert_eq!(back.0, 1.5);
    }

    #[test]
    fn test_degrees_to_radians() {
        let theta = Degrees(60.0);
        assert!((theta.to_radians() - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Kilonewtons(10.0);
        let b = Kilonewtons(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let s = Metres(1.5);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "1.5");

        let roundtrip: Metres = serde_json::from_str(&json).unwrap();
        assert_eq!(s, roundtrip);
    }
}
