pub mod hsv_sweep;
pub mod linear_gradient;
pub mod power_law_gradient;
