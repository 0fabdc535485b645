// Domain layer: the recipe model and the ports the service depends on.

pub mod model;
pub mod ports;
