use clap::Parser;
use staffdesk::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = staffdesk::run(cli) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}
