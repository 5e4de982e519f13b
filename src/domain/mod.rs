// Domain layer: data-transfer shapes owned by the backend's API contract,
// and the settings port the transport consumes.

pub mod model;
pub mod ports;
