use quill::{color_enabled, run, Console, Opt};
use rand_chacha::ChaChaRng;
use rand_chacha::rand_core::SeedableRng;
use std::process::ExitCode;
use structopt::StructOpt;
use tracing_subscriber::{prelude::*, EnvFilter};

fn init_tracing(color: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let log_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_ansi(color)
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(log_layer)
        .try_init();
}

fn main() -> ExitCode {
    let opt = Opt::from_args();
    let color = color_enabled(opt.no_color, std::env::var_os("NO_COLOR").as_deref());
    init_tracing(color);

    let mut console = Console::new(std::io::stdout().lock(), color);
    let mut prng = ChaChaRng::from_entropy();
    match run(&opt.action, &mut console, &mut prng) {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(verdict)) if verdict.is_accept() => ExitCode::SUCCESS,
        Ok(Some(_)) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
