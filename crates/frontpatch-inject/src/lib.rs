pub mod splice;

pub use splice::splice;
