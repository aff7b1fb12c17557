#[macro_use]
extern crate log;

use clap::Parser;
use pathkit::error::format_error;
use pathmap::{run, Opt};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .without_time()
            .finish(),
    )
    .expect("setting tracing default failed");
    tracing_log::LogTracer::init().expect("unable to bridge log records");

    let opt = Opt::parse();
    match run(opt) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("pathmap failed");
            eprintln!("{}", format_error(&e));
            std::process::exit(1);
        }
    }
}
