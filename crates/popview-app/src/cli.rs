use clap::Parser;

/// Popview, a pop-up-capable embedded browser shell.
#[derive(Parser, Debug)]
#[command(name = "popview", version, about)]
pub struct Args {
    /// Start URL, overriding the configured home page.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level directive (e.g. "popview=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable devtools on every surface.
    #[arg(long)]
    pub devtools: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
