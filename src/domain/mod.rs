// Domain layer: alarm models and the ports the countdown engine is wired through.

pub mod model;
pub mod ports;
