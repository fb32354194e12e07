// Domain layer: ticket values and the ports the engine consumes.

pub mod model;
pub mod ports;
