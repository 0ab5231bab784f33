use clap::Parser;
use landed_cost::cli::{run, Cli};
use landed_cost::processors::render_error;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        tracing::debug!("Exiting after error: {:?}", e);
        eprintln!("{}", render_error(&e));
        std::process::exit(e.exit_code());
    }
}
