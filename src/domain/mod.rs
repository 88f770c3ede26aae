// Domain layer: catalog model and the ports the editor talks through.

pub mod model;
pub mod ports;
