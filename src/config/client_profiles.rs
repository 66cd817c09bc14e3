use std::time::Duration;

/// Tuning knobs for the HTTP client used against the target service.
#[derive(Debug, Clone)]
pub struct ClientProfile {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub pool_max_idle_per_host: usize,
}

/// Get client options by profile name
pub fn get_client_profile(profile: &str) -> ClientProfile {
    match profile {
        "dev" => development_profile(),
        "high-perf" => high_performance_profile(),
        "stress" => stress_test_profile(),
        _ => {
            eprintln!("Unknown profile '{}', using 'high-perf' profile", profile);
            high_performance_profile()
        }
    }
}

/// High-performance profile for load testing
///
/// Keeps a large warm connection pool and a request timeout short enough
/// that a stalled target shows up as failed checks instead of a stalled run.
pub fn high_performance_profile() -> ClientProfile {
    ClientProfile {
        request_timeout: Duration::from_secs(10),
        connect_timeout: Duration::from_secs(3),
        pool_max_idle_per_host: 100,
    }
}

/// Development profile for testing and debugging
///
/// Generous timeouts so a target paused in a debugger doesn't flood the
/// report with transport failures.
pub fn development_profile() -> ClientProfile {
    ClientProfile {
        request_timeout: Duration::from_secs(60),
        connect_timeout: Duration::from_secs(10),
        pool_max_idle_per_host: 10,
    }
}

/// Stress profile for maximum pressure
///
/// Aggressive timeouts and a very large pool; slow responses count against
/// the target quickly.
pub fn stress_test_profile() -> ClientProfile {
    ClientProfile {
        request_timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(1),
        pool_max_idle_per_host: 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_falls_back_to_high_perf() {
        let fallback = get_client_profile("no-such-profile");
        let high_perf = high_performance_profile();
        assert_eq!(fallback.request_timeout, high_perf.request_timeout);
        assert_eq!(
            fallback.pool_max_idle_per_host,
            high_perf.pool_max_idle_per_host
        );
    }
}
