// Domain layer: the time pair model and the clock port. No I/O here.

pub mod model;
pub mod ports;
