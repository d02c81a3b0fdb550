pub mod preflight;
pub mod relay;
