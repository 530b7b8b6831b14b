// Domain layer: models and the capability traits hosts program against.

pub mod model;
pub mod ports;
