use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use uom::si::{
    angle::radian,
    angular_velocity::radian_per_second,
    f64::{Angle, AngularVelocity, Length, Mass},
    length::meter,
    mass::kilogram,
};

use crate::ParameterError;

/// Gravitational acceleration in m/s², negative because it acts downward.
pub const GRAVITY: f64 = -9.8;

/// Physical constants of a leg: segment masses (kg) and lengths (m).
///
/// Constructed once and never modified. [`Parameters::new`] accepts any
/// values; zero or negative entries are allowed and simply propagate
/// non-finite results through the simulation. Use [`Parameters::validated`]
/// to reject them up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub(crate) m1: f64,
    pub(crate) m2: f64,
    pub(crate) l_f: f64,
    pub(crate) l_t: f64,
}

impl Parameters {
    /// Creates parameters without validation.
    #[must_use]
    pub fn new(m1: f64, m2: f64, l_f: f64, l_t: f64) -> Self {
        Self { m1, m2, l_f, l_t }
    }

    /// Creates parameters, requiring every value to be finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotPositive`] naming the first offending value.
    pub fn validated(m1: f64, m2: f64, l_f: f64, l_t: f64) -> Result<Self, ParameterError> {
        Self::new(m1, m2, l_f, l_t).validate()
    }

    /// Creates parameters from dimensioned quantities.
    #[must_use]
    pub fn from_quantities(m1: Mass, m2: Mass, l_f: Length, l_t: Length) -> Self {
        Self::new(
            m1.get::<kilogram>(),
            m2.get::<kilogram>(),
            l_f.get::<meter>(),
            l_t.get::<meter>(),
        )
    }

    /// Checks that every value is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NotPositive`] naming the first offending value.
    pub fn validate(self) -> Result<Self, ParameterError> {
        for (name, value) in [
            ("m1", self.m1),
            ("m2", self.m2),
            ("l_f", self.l_f),
            ("l_t", self.l_t),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::NotPositive { name, value });
            }
        }
        Ok(self)
    }

    /// Mass of the femur (kg).
    #[must_use]
    pub fn m1(&self) -> f64 {
        self.m1
    }

    /// Mass of the tibia (kg).
    #[must_use]
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Length of the femur (m).
    #[must_use]
    pub fn l_f(&self) -> f64 {
        self.l_f
    }

    /// Length of the tibia (m).
    #[must_use]
    pub fn l_t(&self) -> f64 {
        self.l_t
    }

    /// Moment of inertia of the femur about the hip, `m1 * l_f²`.
    #[must_use]
    pub fn moment_of_inertia_femur(&self) -> f64 {
        self.m1 * self.l_f.powi(2)
    }

    /// Moment of inertia of the tibia about the knee, `m2 * l_t²`.
    #[must_use]
    pub fn moment_of_inertia_tibia(&self) -> f64 {
        self.m2 * self.l_t.powi(2)
    }
}

/// Starting angles (rad) and angular velocities (rad/s) of a leg.
///
/// `theta_k` is the angle between femur and tibia. The dynamics work with the
/// tibia's angle from horizontal instead, see [`InitialConditions::phi`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    pub theta_h: f64,
    pub theta_k: f64,
    pub omega_h: f64,
    pub omega_phi: f64,
}

impl InitialConditions {
    #[must_use]
    pub fn new(theta_h: f64, theta_k: f64, omega_h: f64, omega_phi: f64) -> Self {
        Self {
            theta_h,
            theta_k,
            omega_h,
            omega_phi,
        }
    }

    /// Creates initial conditions from dimensioned quantities.
    #[must_use]
    pub fn from_quantities(
        theta_h: Angle,
        theta_k: Angle,
        omega_h: AngularVelocity,
        omega_phi: AngularVelocity,
    ) -> Self {
        Self::new(
            theta_h.get::<radian>(),
            theta_k.get::<radian>(),
            omega_h.get::<radian_per_second>(),
            omega_phi.get::<radian_per_second>(),
        )
    }

    /// Angle of the tibia from horizontal, `π − (theta_k − theta_h)`.
    #[must_use]
    pub fn phi(&self) -> f64 {
        PI - (self.theta_k - self.theta_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angle::degree, angular_velocity::degree_per_second, length::centimeter};

    #[test]
    fn moments_of_inertia() {
        let params = Parameters::new(2.0, 1.0, 2.0, 1.5);

        assert_relative_eq!(params.moment_of_inertia_femur(), 8.0);
        assert_relative_eq!(params.moment_of_inertia_tibia(), 2.25);
    }

    #[test]
    fn new_accepts_degenerate_values() {
        let params = Parameters::new(0.0, -1.0, 0.0, f64::NAN);

        assert_eq!(params.m1(), 0.0);
        assert_eq!(params.m2(), -1.0);
        assert!(params.l_t().is_nan());
    }

    #[test]
    fn validated_rejects_non_positive_values() {
        assert_eq!(
            Parameters::validated(2.0, 0.0, 2.0, 1.5),
            Err(ParameterError::NotPositive {
                name: "m2",
                value: 0.0
            })
        );
        assert_eq!(
            Parameters::validated(2.0, 1.0, -2.0, 1.5),
            Err(ParameterError::NotPositive {
                name: "l_f",
                value: -2.0
            })
        );
    }

    #[test]
    fn validated_rejects_non_finite_values() {
        let err = Parameters::validated(2.0, 1.0, 2.0, f64::INFINITY).unwrap_err();

        assert!(matches!(err, ParameterError::NotPositive { name: "l_t", .. }));
    }

    #[test]
    fn validated_accepts_physical_values() {
        let params = Parameters::validated(2.0, 1.0, 2.0, 1.5).expect("should be valid");

        assert_eq!(params, Parameters::new(2.0, 1.0, 2.0, 1.5));
    }

    #[test]
    fn parameters_from_quantities_use_si() {
        let params = Parameters::from_quantities(
            Mass::new::<kilogram>(2.0),
            Mass::new::<kilogram>(1.0),
            Length::new::<meter>(2.0),
            Length::new::<centimeter>(150.0),
        );

        assert_relative_eq!(params.l_t(), 1.5, epsilon = 1e-12);
        assert_relative_eq!(params.m1(), 2.0);
    }

    #[test]
    fn phi_from_hip_and_knee_angles() {
        let initial = InitialConditions::new(PI / 8.0, PI / 3.0, 0.0, 0.0);

        assert_relative_eq!(initial.phi(), PI - 5.0 * PI / 24.0, epsilon = 1e-12);
    }

    #[test]
    fn initial_conditions_from_quantities_use_radians() {
        let initial = InitialConditions::from_quantities(
            Angle::new::<degree>(22.5),
            Angle::new::<degree>(60.0),
            AngularVelocity::new::<degree_per_second>(180.0),
            AngularVelocity::new::<radian_per_second>(-1.0),
        );

        assert_relative_eq!(initial.theta_h, PI / 8.0, epsilon = 1e-12);
        assert_relative_eq!(initial.theta_k, PI / 3.0, epsilon = 1e-12);
        assert_relative_eq!(initial.omega_h, PI, epsilon = 1e-12);
        assert_relative_eq!(initial.omega_phi, -1.0);
    }
}
