pub mod errors;
pub mod evaluator;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
