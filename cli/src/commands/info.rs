use anyhow::Result;

use flightdeck_common::config::Config;

use crate::terminal::print;

pub fn info(_cfg: &Config) -> Result<()> {
    print::set_key_width(&["Version", "Purpose", "Try"]);
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line(
        "Purpose",
        "model airlines, flights, passengers and crew; audit compliance",
    );
    print::aligned_line("Try", "flightdeck demo");
    print::end_of_program();
    Ok(())
}
