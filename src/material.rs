use ndarray::{
    Array,
    Dimension,
    Zip,
};

/// Lamé's first parameter λ from the P and S wave velocities and the
/// density: `λ = ρ v_P² − 2 ρ v_S²`.
///
/// Units must be mutually consistent, e.g. velocities in m/s with density
/// in kg/m³. Inputs are not checked for physical plausibility.
pub fn lame_lambda(pvel: f64, svel: f64, density: f64) -> f64 {
    density * pvel.powi(2) - 2.0 * density * svel.powi(2)
}

/// Lamé's second parameter μ, the shear modulus: `μ = ρ v_S²`.
///
/// Same unit contract as [`lame_lambda`].
pub fn lame_mu(svel: f64, density: f64) -> f64 {
    density * svel.powi(2)
}

/// Elementwise [`lame_lambda`] over velocity and density fields.
///
/// # Panics
///
/// Panics if the field shapes don't match.
pub fn lame_lambda_field<D>(
    pvel: &Array<f64, D>,
    svel: &Array<f64, D>,
    density: &Array<f64, D>,
) -> Array<f64, D>
where
    D: Dimension,
{
    Zip::from(pvel)
        .and(svel)
        .and(density)
        .map_collect(|&pvel, &svel, &density| lame_lambda(pvel, svel, density))
}

/// Elementwise [`lame_mu`] over velocity and density fields.
///
/// # Panics
///
/// Panics if the field shapes don't match.
pub fn lame_mu_field<D>(svel: &Array<f64, D>, density: &Array<f64, D>) -> Array<f64, D>
where
    D: Dimension,
{
    Zip::from(svel)
        .and(density)
        .map_collect(|&svel, &density| lame_mu(svel, density))
}

/// An isotropic elastic medium described by its seismic velocities and
/// density.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElasticMaterial {
    /// v_P
    pub pvel: f64,
    /// v_S
    pub svel: f64,
    /// rho
    pub density: f64,
}

impl ElasticMaterial {
    /// A water layer, for marine models. SI units.
    pub const WATER: Self = Self {
        pvel: 1500.0,
        svel: 0.0,
        density: 1000.0,
    };

    pub fn lame_lambda(&self) -> f64 {
        lame_lambda(self.pvel, self.svel, self.density)
    }

    pub fn lame_mu(&self) -> f64 {
        lame_mu(self.svel, self.density)
    }
}
