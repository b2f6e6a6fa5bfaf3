//! Configuration for angle handling and Mohr-diagram sampling.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// What to do with a plunge or dip outside [0, 90] degrees.
///
/// Trend and strike are periodic and never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainPolicy {
    /// Use the value as given.
    PassThrough,
    /// Use the value as given and emit a `log::warn!`.
    #[default]
    Warn,
    /// Clamp into [0, 90].
    Clamp,
    /// Fail with [`Error::Domain`].
    Reject,
}

impl DomainPolicy {
    /// Apply the policy to an inclination angle (plunge or dip) in degrees.
    pub fn apply(self, name: &str, degrees: f64) -> Result<f64> {
        if (0.0..=90.0).contains(&degrees) {
            return Ok(degrees);
        }
        match self {
            DomainPolicy::PassThrough => Ok(degrees),
            DomainPolicy::Warn => {
                log::warn!("{name} of {degrees} degrees is outside [0, 90]");
                Ok(degrees)
            }
            DomainPolicy::Clamp => Ok(degrees.clamp(0.0, 90.0)),
            DomainPolicy::Reject => Err(Error::Domain(format!(
                "{name} of {degrees} degrees is outside [0, 90]"
            ))),
        }
    }
}

/// Largest number of planes a single Mohr sweep may sample.
pub const MAX_SWEEP_PLANES: usize = 1_000_000;

/// Parameters for sampling a Mohr diagram over a sweep of planes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MohrConfig {
    /// Cohesion, in the same units as the stress tensor.
    pub cohesion: f64,

    /// Coefficient of friction (dimensionless).
    pub friction: f64,

    /// Strike increment in degrees. Strikes cover [0, 360).
    pub strike_step_deg: f64,

    /// Dip increment in degrees. Dips cover [0, 90] inclusive.
    pub dip_step_deg: f64,

    /// Handling of out-of-range dips.
    pub domain_policy: DomainPolicy,
}

impl Default for MohrConfig {
    fn default() -> Self {
        Self {
            cohesion: 0.0,
            friction: 0.6,
            strike_step_deg: 5.0,
            dip_step_deg: 5.0,
            domain_policy: DomainPolicy::Warn,
        }
    }
}

impl MohrConfig {
    /// A quick sweep for interactive use (15 degree grid).
    pub fn coarse() -> Self {
        Self {
            strike_step_deg: 15.0,
            dip_step_deg: 15.0,
            ..Default::default()
        }
    }

    /// A dense sweep for publication figures (1 degree grid).
    pub fn fine() -> Self {
        Self {
            strike_step_deg: 1.0,
            dip_step_deg: 1.0,
            ..Default::default()
        }
    }

    /// Set the Coulomb parameters.
    pub fn with_coulomb(mut self, cohesion: f64, friction: f64) -> Self {
        self.cohesion = cohesion;
        self.friction = friction;
        self
    }

    /// Parse a JSON document. Missing fields take their default values.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: MohrConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Upper bound on the number of planes the sweep visits.
    ///
    /// Computed in floating point so tiny steps cannot overflow.
    pub fn sweep_size(&self) -> f64 {
        let n_strikes = (360.0 / self.strike_step_deg).floor() + 1.0;
        let n_dips = (90.0 / self.dip_step_deg).floor() + 2.0;
        n_strikes * n_dips
    }

    /// Check that the sweep is finite and the friction is physical.
    pub fn validate(&self) -> Result<()> {
        if !(self.strike_step_deg > 0.0 && self.strike_step_deg.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "strike_step_deg must be positive, got {}",
                self.strike_step_deg
            )));
        }
        if !(self.dip_step_deg > 0.0 && self.dip_step_deg.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "dip_step_deg must be positive, got {}",
                self.dip_step_deg
            )));
        }
        let n_planes = self.sweep_size();
        if n_planes > MAX_SWEEP_PLANES as f64 {
            return Err(Error::InvalidConfig(format!(
                "sweep of {n_planes:.0} planes exceeds the limit of {MAX_SWEEP_PLANES}"
            )));
        }
        if self.friction < 0.0 || !self.friction.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "friction must be non-negative, got {}",
                self.friction
            )));
        }
        if !self.cohesion.is_finite() {
            return Err(Error::InvalidConfig("cohesion must be finite".into()));
        }
        Ok(())
    }
}
