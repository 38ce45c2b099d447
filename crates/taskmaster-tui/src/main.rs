#![forbid(unsafe_code)]

//! taskmaster binary entry point.

use taskmaster_store::{FileSlot, TaskStore};
use taskmaster_tui::app::AppModel;
use taskmaster_tui::program::Program;
use taskmaster_tui::{cli, logging};

fn main() {
    let opts = cli::Opts::parse();

    if let Err(e) = logging::init(opts.log_file.as_deref()) {
        eprintln!("Failed to open log file: {e}");
        std::process::exit(1);
    }

    let path = opts.store.unwrap_or_else(FileSlot::default_path);
    let store = TaskStore::new(Box::new(FileSlot::new(&path)));

    // Hydrate once; unreadable snapshots degrade to an empty list.
    let tasks = store.load_or_default();

    let model = AppModel::new(tasks);
    let mut program = Program::new(model, store);
    if let Err(e) = program.run() {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
