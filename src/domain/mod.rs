// Domain layer: models, static reference tables and ports. No I/O lives here.

pub mod catalog;
pub mod model;
pub mod ports;
