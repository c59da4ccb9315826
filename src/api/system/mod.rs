// System endpoints: status, payload echo and middleware probes

pub mod handler;
pub mod routes;
