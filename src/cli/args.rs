use clap::{Args, Parser, Subcommand};

/// Review Service Load Testing Tool
#[derive(Parser, Debug)]
#[command(name = "review-loadtest")]
#[command(about = "Load testing tool for the PR review assignment service")]
#[command(version)]
pub struct Cli {
    /// Review service base URL
    #[arg(
        long,
        default_value = "http://localhost:8080",
        env = "REVIEW_BASE_URL"
    )]
    pub base_url: String,

    /// HTTP client configuration profile: dev, high-perf, stress
    #[arg(long, default_value = "high-perf")]
    pub client_profile: String,

    /// Test duration in seconds
    #[arg(long, default_value = "60")]
    pub duration: u64,

    /// Metrics reporting interval in seconds
    #[arg(long, default_value = "5")]
    pub report_interval: u64,

    /// Treat duplicate-identifier rejections (400 on team add) as failures
    #[arg(long)]
    pub strict: bool,

    /// Skip the startup health probe against the target
    #[arg(long)]
    pub skip_preflight: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub scenario: Scenario,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Scenario {
    /// Hold a constant review-cycle start rate for the whole run
    SustainedLoad(SustainedLoadArgs),

    /// Fixed pool of virtual users, each looping cycles back to back
    VirtualUsers(VirtualUsersArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SustainedLoadArgs {
    /// Review cycles to start per second
    #[arg(long)]
    pub rate: f64,
}

#[derive(Args, Debug, Clone)]
pub struct VirtualUsersArgs {
    /// Number of concurrent virtual users
    #[arg(long)]
    pub users: usize,

    /// Pause between one user's consecutive cycles, in milliseconds
    #[arg(long, default_value = "0")]
    pub pacing_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sustained_load_invocation() {
        let cli = Cli::try_parse_from([
            "review-loadtest",
            "--base-url",
            "http://target:9090",
            "--duration",
            "30",
            "sustained-load",
            "--rate",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.base_url, "http://target:9090");
        assert_eq!(cli.duration, 30);
        assert!(!cli.strict);
        match cli.scenario {
            Scenario::SustainedLoad(args) => assert_eq!(args.rate, 5.0),
            other => panic!("unexpected scenario: {:?}", other),
        }
    }

    #[test]
    fn parses_virtual_users_with_defaults() {
        let cli = Cli::try_parse_from(["review-loadtest", "virtual-users", "--users", "10"])
            .unwrap();

        assert_eq!(cli.base_url, "http://localhost:8080");
        assert_eq!(cli.duration, 60);
        assert_eq!(cli.report_interval, 5);
        match cli.scenario {
            Scenario::VirtualUsers(args) => {
                assert_eq!(args.users, 10);
                assert_eq!(args.pacing_ms, 0);
            }
            other => panic!("unexpected scenario: {:?}", other),
        }
    }
}
