// Domain layer: poll record shapes and the ports the application depends on.

pub mod model;
pub mod ports;
