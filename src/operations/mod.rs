mod distance;
mod path_length;
mod scale_factors;

pub use distance::distance;
pub use path_length::{path_length, path_length_split};
pub use scale_factors::{scale_factors, scale_factors_with, ScaleFactors};
