use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "product-editor", version, about = "Terminal editor for catalog products")]
pub struct Cli {
    /// Catalog API base URL (overrides config and PRODUCT_EDITOR_API_URL)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT")]
    pub tick_rate: Option<f64>,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT")]
    pub frame_rate: Option<f64>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Run the interactive editor (default)
    Run,
    /// Fetch the category tree once and print how many categories it has
    Health,
}

impl Cli {
    pub fn command(&self) -> Cmd {
        self.cmd.unwrap_or(Cmd::Run)
    }
}
