pub mod auth_service;
pub mod like_service;
pub mod match_service;
pub mod profile_service;
pub mod token_service;
