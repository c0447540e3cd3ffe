#![warn(clippy::todo, unused_qualifications)]

pub mod material;
pub mod source;

pub use crate::{
    material::{
        ElasticMaterial,
        lame_lambda,
        lame_lambda_field,
        lame_mu,
        lame_mu_field,
    },
    source::{
        Delay,
        InvalidFrequency,
        RickerWavelet,
        Wavelet,
    },
};
