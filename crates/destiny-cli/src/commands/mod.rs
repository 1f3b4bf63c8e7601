pub mod call;
pub mod endpoints;
pub mod manifest;
