// Domain layer: week records, phases and the ports the config layer implements.

pub mod model;
pub mod ports;
