// CLI module
// Contains command line argument definitions

pub mod args;

pub use args::{Cli, Scenario, SustainedLoadArgs, VirtualUsersArgs};
