use clap::Parser;

use fontsource_downloader::{Args, Config, UnwrapOrDie};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("LOG_LEVEL", "info")).init();

    let args = Args::try_parse().unwrap_or_else(|e| {
        // --help and --version are not failures
        if !e.use_stderr() {
            e.exit()
        }
        let _ = e.print();
        std::process::exit(1)
    });

    let config = Config::from_args(&args);
    let cancel = config.cancel_token();
    let handle = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || handle.cancel()) {
        log::warn!("could not install ctrl-c handler: '{e}'");
    }

    fontsource_downloader::run(&config, &cancel)
        .unwrap_or_die(|e| log::error!("an error occurred: {e}"));
}
