use clap::Parser;
use lectio_cli::cli_args::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = lectio_cli::run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
