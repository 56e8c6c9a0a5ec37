use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = nightscout_openaps::cli::Cli::parse();
    nightscout_openaps::logging::init(cli.verbose);

    if let Err(err) = nightscout_openaps::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
