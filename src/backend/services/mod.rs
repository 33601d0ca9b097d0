pub mod content_service;
pub mod permission_service;
