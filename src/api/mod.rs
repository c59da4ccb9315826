// HTTP endpoints grouped by feature

pub mod system;
