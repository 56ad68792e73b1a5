#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Suppresses the ASCII wordmark before the first report.
    pub no_banner: bool,
    /// Output reduction: 0 full, 1 no banner or headers, 2 summaries only.
    pub quiet: u8,
}
