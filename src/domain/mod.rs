// Domain layer: lesson model and ports. No lesson depends on another.

pub mod model;
pub mod ports;
