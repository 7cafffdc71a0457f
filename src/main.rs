use clap::{Arg, Command as ClapCommand, ArgAction};
use chrono::Local;
use log::{error, LevelFilter};
use std::process;

use sedacmeta::utils::logger::Logger;
use sedacmeta::organizer::log_file_name;
use sedacmeta::commands::{CommandFactory, SedacCommandFactory};

fn main() {
    let matches = ClapCommand::new("sedacmeta")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Organize FGDC metadata records in the current directory by collection and dataset")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("inspect")
                .short('i')
                .long("inspect")
                .help("Report record identifiers and sidecars without writing output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };
    Logger::init_global_logger(level);

    let started = Local::now().naive_local();
    let logger = match Logger::new(log_file_name(started)) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing processing log: {}", e);
            process::exit(1);
        }
    };

    let factory = SedacCommandFactory::new();

    let result = factory
        .create_command(&matches, &logger, started)
        .and_then(|command| command.execute());
    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        let _ = logger.close();
        process::exit(1);
    }

    if let Err(e) = logger.close() {
        eprintln!("Error closing processing log: {}", e);
        process::exit(1);
    }
    println!("Program complete");
}
