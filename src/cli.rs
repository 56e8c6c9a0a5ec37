use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "nightscout-openaps",
    version,
    about = "Convert a Nightscout profile into an OpenAPS autotune profile"
)]
pub struct Cli {
    #[arg(help = "Nightscout base url, e.g. https://example.nightscout.site")]
    pub base_url: Option<String>,
    #[arg(long, help = "Profile name to convert instead of the default profile")]
    pub profile: Option<String>,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
}
