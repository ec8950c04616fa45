//! Shared wire-format types

pub mod response;

pub use response::{DataResponse, MessageResponse, Status};
