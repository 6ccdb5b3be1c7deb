pub mod domain;
pub mod like_use_cases;
pub mod ports;
pub mod services;
