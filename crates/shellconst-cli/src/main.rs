mod cli;
mod logging;

fn main() {
    logging::init_tracing();
    std::process::exit(cli::run_from_env());
}
