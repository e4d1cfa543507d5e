pub mod client;
pub mod phone;
pub mod report;
pub mod service;
pub mod service_order;
pub mod upload;
