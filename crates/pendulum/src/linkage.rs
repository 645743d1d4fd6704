use std::f64::consts::PI;

use legswing_core::Stepper;

use crate::{Frame, GRAVITY, InitialConditions, Parameters, Point};

/// A two-segment leg hanging from a fixed hip.
///
/// Holds the constant [`Parameters`] and the dynamic state: the femur angle
/// `theta_h` and tibia angle `phi`, both measured from horizontal, their
/// angular velocities, and the knee angle `theta_k`. The knee angle is
/// recomputed after every step for reporting and never feeds back into the
/// dynamics.
#[derive(Debug, Clone, PartialEq)]
pub struct Linkage {
    parameters: Parameters,
    theta_h: f64,
    phi: f64,
    omega_h: f64,
    omega_phi: f64,
    theta_k: f64,
}

impl Linkage {
    /// Creates a linkage in the given initial configuration.
    #[must_use]
    pub fn new(parameters: Parameters, initial: InitialConditions) -> Self {
        let phi = initial.phi();
        Self {
            parameters,
            theta_h: initial.theta_h,
            phi,
            omega_h: initial.omega_h,
            omega_phi: initial.omega_phi,
            theta_k: knee_angle(initial.theta_h, phi),
        }
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Angle of the femur from horizontal (rad).
    #[must_use]
    pub fn theta_h(&self) -> f64 {
        self.theta_h
    }

    /// Angle of the tibia from horizontal (rad).
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Angular velocity of the femur (rad/s).
    #[must_use]
    pub fn omega_h(&self) -> f64 {
        self.omega_h
    }

    /// Angular velocity of the tibia (rad/s).
    #[must_use]
    pub fn omega_phi(&self) -> f64 {
        self.omega_phi
    }

    /// Angle between femur and tibia (rad), `π + theta_h − phi`.
    #[must_use]
    pub fn theta_k(&self) -> f64 {
        self.theta_k
    }

    #[must_use]
    pub fn moment_of_inertia_femur(&self) -> f64 {
        self.parameters.moment_of_inertia_femur()
    }

    #[must_use]
    pub fn moment_of_inertia_tibia(&self) -> f64 {
        self.parameters.moment_of_inertia_tibia()
    }

    /// Approximate force the tibia exerts on the femur through the knee.
    ///
    /// ```text
    /// v2 = (l_f·ω_h·(sin θ_h + cos θ_h)) · (l_t·ω_φ·(sin φ + cos φ))
    /// T  = −(m2 / l_t) · v2
    /// ```
    ///
    /// This is a coupling term for the femur's torque balance, not an exact
    /// constraint force.
    #[must_use]
    pub fn tension(&self) -> f64 {
        let Parameters { m2, l_f, l_t, .. } = self.parameters;

        let v2 = (l_f * self.omega_h * (self.theta_h.sin() + self.theta_h.cos()))
            * (l_t * self.omega_phi * (self.phi.sin() + self.phi.cos()));

        -(m2 / l_t) * v2
    }

    /// Position of the knee relative to the hip.
    #[must_use]
    pub fn knee(&self) -> Point {
        let l_f = self.parameters.l_f();
        Point::new(l_f * self.theta_h.cos(), -l_f * self.theta_h.sin())
    }

    /// Position of the ankle relative to the hip.
    #[must_use]
    pub fn ankle(&self) -> Point {
        let knee = self.knee();
        let l_t = self.parameters.l_t();
        Point::new(knee.x + l_t * self.phi.cos(), knee.y - l_t * self.phi.sin())
    }

    /// Knee and ankle positions at the current instant.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            knee: self.knee(),
            ankle: self.ankle(),
        }
    }

    /// Advances the linkage by `dt` seconds with an explicit Euler update.
    ///
    /// The tibia is updated first, then the femur. Each velocity is updated
    /// from the angle before it moves, and each angle moves with its freshly
    /// updated velocity. The tension term is evaluated once, before any field
    /// changes.
    ///
    /// No stability checks are made; a large `dt` or degenerate parameters
    /// yield non-finite state rather than an error.
    pub fn advance(&mut self, dt: f64) {
        let Parameters { m1, m2, l_f, l_t } = self.parameters;
        let i_femur = self.moment_of_inertia_femur();
        let i_tibia = self.moment_of_inertia_tibia();
        let tension = self.tension();

        self.omega_phi += -((l_t * m2 * GRAVITY) / i_tibia) * self.phi.cos() * dt;
        self.phi += self.omega_phi * dt;

        self.omega_h += -((l_f * m1 * GRAVITY) / i_femur * self.theta_h.cos()
            + tension * l_f / i_femur * (self.theta_h - self.phi).cos())
            * dt;
        self.theta_h += self.omega_h * dt;

        self.theta_k = knee_angle(self.theta_h, self.phi);
    }
}

impl Stepper<f64> for Linkage {
    type Frame = Frame;

    fn frame(&self) -> Frame {
        Linkage::frame(self)
    }

    fn advance(&mut self, dt: f64) {
        Linkage::advance(self, dt);
    }
}

fn knee_angle(theta_h: f64, phi: f64) -> f64 {
    PI + theta_h - phi
}
