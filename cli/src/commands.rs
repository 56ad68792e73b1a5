pub mod demo;
pub mod info;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flightdeck")]
#[command(about = "An airline flight-management console.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Skip the ASCII wordmark
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output (repeat for less)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about this tool
    #[command(alias = "i")]
    Info,
    /// Run the demonstration scenario and print every report
    #[command(alias = "d")]
    Demo,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
