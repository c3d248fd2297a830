use clap::{Arg, Command}; // Builder-style argument parsing
use std::io;
use std::path::PathBuf;

use learnsmart::auth::user_interface::{list_accounts, login_screen, main_menu, register_screen};
use learnsmart::catalog::user_interface::books_screen;
use learnsmart::utils::io::is_end_of_input;
use learnsmart::utils::logging::initialize_logging;
use learnsmart::{AccountStore, AppConfig, ClickCounter, FileStorage};

fn build_cli() -> Command {
    Command::new("learnsmart")
        .about("Browse IT & AI books with a local account")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .help("Directory holding the account store and log file")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .global(true)
                .help("Log file path (defaults to <DIR>/application.log)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .subcommand(Command::new("register").about("Create a new local account"))
        .subcommand(Command::new("login").about("Log in and browse books"))
        .subcommand(
            Command::new("books")
                .about("List books for a subject without logging in")
                .arg(
                    Arg::new("subject")
                        .long("subject")
                        .help("Subject to list, e.g. computers")
                        .value_name("SUBJECT"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .help("Maximum number of books to fetch")
                        .value_name("N")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(Command::new("accounts").about("List registered accounts"))
}

/// Login, then the book list
fn run_login(
    store: &AccountStore<FileStorage>,
    config: &AppConfig,
    counter: &mut ClickCounter,
) -> io::Result<()> {
    if login_screen(store)?.is_some() {
        books_screen(config, counter)?;
    }
    Ok(())
}

/// Registration continues to the login screen once the account is saved
fn run_register(
    store: &AccountStore<FileStorage>,
    config: &AppConfig,
    counter: &mut ClickCounter,
) -> io::Result<()> {
    if register_screen(store)? {
        run_login(store, config, counter)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = build_cli().get_matches();
    let config = AppConfig::from_matches(&matches);

    // Logging problems should never stop the app
    if let Err(e) = initialize_logging(&config.log_file) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let store = AccountStore::new(FileStorage::new(&config.data_dir));
    let mut counter = ClickCounter::new();

    let result = match matches.subcommand() {
        Some(("register", _)) => run_register(&store, &config, &mut counter),
        Some(("login", _)) => run_login(&store, &config, &mut counter),
        Some(("books", _)) => books_screen(&config, &mut counter),
        Some(("accounts", _)) => {
            list_accounts(&store);
            Ok(())
        }
        _ => main_menu(&store, &config, &mut counter),
    };

    match result {
        // Input closed in the middle of a screen
        Err(e) if is_end_of_input(&e) => {
            println!();
            Ok(())
        }
        other => Ok(other?),
    }
}
