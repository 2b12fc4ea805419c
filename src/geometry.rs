//! Angular utilities in (η, φ) space shared by the isolation engine.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// |η| below which a direction is in the barrel.
pub const BARREL_ETA_LIMIT: f64 = 1.479;

/// Direction in detector coordinates: pseudorapidity and azimuth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub eta: f64,
    pub phi: f64,
}

impl Direction {
    pub fn new(eta: f64, phi: f64) -> Self {
        Self { eta, phi }
    }

    /// Direction of a point seen from the origin (the nominal interaction point).
    pub fn from_position(position: &Point3<f64>) -> Self {
        let rho = position.x.hypot(position.y);
        let theta = rho.atan2(position.z);
        Self {
            eta: eta_from_theta(theta),
            phi: position.y.atan2(position.x),
        }
    }
}

/// Detector region of a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Barrel,
    Endcap,
}

impl Region {
    #[inline]
    pub fn from_eta(eta: f64) -> Self {
        if eta.abs() < BARREL_ETA_LIMIT {
            Region::Barrel
        } else {
            Region::Endcap
        }
    }
}

/// Wraps an azimuthal difference into [-π, π].
#[inline]
pub fn delta_phi(phi1: f64, phi2: f64) -> f64 {
    let mut dphi = phi1 - phi2;
    if dphi > PI || dphi < -PI {
        dphi -= TAU * ((dphi + PI) / TAU).floor();
    }
    dphi
}

/// Squared separation in (η, φ).
#[inline]
pub fn delta_r2(a: &Direction, b: &Direction) -> f64 {
    let deta = a.eta - b.eta;
    let dphi = delta_phi(a.phi, b.phi);
    deta * deta + dphi * dphi
}

#[inline]
pub fn delta_r(a: &Direction, b: &Direction) -> f64 {
    delta_r2(a, b).sqrt()
}

/// Pseudorapidity of a polar angle, η = -ln tan(θ/2).
#[inline]
pub fn eta_from_theta(theta: f64) -> f64 {
    -(theta * 0.5).tan().ln()
}

/// Projects an energy onto the transverse plane: E·sinθ = E / cosh η.
#[inline]
pub fn transverse(energy: f64, eta: f64) -> f64 {
    energy / eta.cosh()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn delta_phi_takes_the_short_way_round() {
        assert!(approx_eq(delta_phi(0.5, 0.2), 0.3));
        assert!(approx_eq(delta_phi(PI - 0.1, -PI + 0.1), -0.2));
        assert!(approx_eq(delta_phi(-PI + 0.1, PI - 0.1), 0.2));
        assert!(approx_eq(delta_phi(3.0 * TAU + 0.25, 0.0), 0.25));
    }

    #[test]
    fn delta_r_combines_eta_and_phi() {
        let a = Direction::new(0.0, 0.0);
        let b = Direction::new(0.3, 0.4);
        assert!(approx_eq(delta_r(&a, &b), 0.5));
        assert!(approx_eq(delta_r2(&a, &b), 0.25));
    }

    #[test]
    fn region_boundary_is_on_absolute_eta() {
        assert_eq!(Region::from_eta(0.0), Region::Barrel);
        assert_eq!(Region::from_eta(-1.2), Region::Barrel);
        assert_eq!(Region::from_eta(BARREL_ETA_LIMIT), Region::Endcap);
        assert_eq!(Region::from_eta(-2.1), Region::Endcap);
    }

    #[test]
    fn transverse_projection_matches_sin_theta() {
        let eta = 0.8f64;
        let theta = 2.0 * (-eta).exp().atan();
        assert!(approx_eq(transverse(10.0, eta), 10.0 * theta.sin()));
        assert!(approx_eq(transverse(10.0, 0.0), 10.0));
    }

    #[test]
    fn direction_from_position_on_the_axes() {
        let d = Direction::from_position(&Point3::new(0.0, 1.0, 0.0));
        assert!(approx_eq(d.eta, 0.0));
        assert!(approx_eq(d.phi, std::f64::consts::FRAC_PI_2));

        let forward = Direction::from_position(&Point3::new(1.0, 0.0, 1.0));
        let expected = eta_from_theta(std::f64::consts::FRAC_PI_4);
        assert!(approx_eq(forward.eta, expected));
        assert!(forward.eta > 0.0);
    }
}
