pub mod domain;
pub mod playlist_use_cases;
pub mod ports;
pub mod services;
