// Domain layer: entity records and the latency port. No dependencies on the
// service layer.

pub mod model;
pub mod ports;
