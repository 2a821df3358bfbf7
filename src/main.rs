use clap::Parser;
use log::{error, info};

use swiftnote::{App, Cli, Config, NoteStore, NotesSlot};

fn initialize_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Some(notes_file) = cli.notes_file {
        config.notes_file = notes_file;
    }

    let slot = NotesSlot::new(config.notes_file.clone());
    let store = NoteStore::open(slot);

    let mut app = App::new(store, config, cli.verbose);
    if let Err(e) = app.run(cli.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}
