// Domain layer: records, reports and the store ports. No driver types leak in here.

pub mod model;
pub mod ports;
