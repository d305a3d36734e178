#[allow(dead_code)]
pub mod portal_server;
