// Config module
// Contains HTTP client tuning profiles

pub mod client_profiles;

pub use client_profiles::{
    development_profile, get_client_profile, high_performance_profile, stress_test_profile,
    ClientProfile,
};
