pub mod deal;

pub use deal::DealConfig;
