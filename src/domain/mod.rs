// Domain layer: calculator models and the presenter port.

pub mod model;
pub mod ports;
