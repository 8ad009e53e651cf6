pub mod distance_rate_controller;
