/// Quadratic extension field backend (`F[X]/(X^2 - residue)`), used to build
/// `Fp2` over `Fp` and `Fp12` over `Fp6`.
pub mod quadratic;
/// Cubic extension field backend (`F[X]/(X^3 - residue)`), used to build
/// `Fp6` over `Fp2`.
pub mod cubic;

pub use cubic::{CubicExtensionField, HasCubicNonResidue};
pub use quadratic::{HasQuadraticNonResidue, QuadraticExtensionField};
