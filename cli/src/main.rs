mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, info};
use flightdeck_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg)
        }
        Commands::Demo => {
            print::header("flight operations walkthrough", cfg.quiet);
            demo::run(&cfg)
        }
    }
}
