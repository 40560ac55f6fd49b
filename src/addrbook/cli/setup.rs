use addrbook::error::{BookError, Result};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "ADDRBOOK_HOME";

#[derive(Parser, Debug)]
#[command(name = "addrbook", version)]
#[command(about = "Interactive command-line contact book", long_about = None)]
pub struct Cli {
    /// Directory holding contacts.json and config.json
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Contacts per page for `page` (overrides config)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Logs go to stderr so stdout only carries command output.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("addrbook=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// `--data-dir`, then `$ADDRBOOK_HOME`, then the platform data dir.
pub fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BookError::Config("could not determine a data directory".to_string()))
}

pub const HELP_TEXT: &str = "\
Commands:
  hello                              greet
  add <name> <phone>                 add a contact (replaces one with the same name)
  change <name> <phone>              replace a contact's phones
  phone <name>                       show a contact's phones
  show all                           list every contact
  search [query]                     find contacts by name or phone
  page [size]                        list contacts a page at a time
  delete <name>                      remove a contact
  add-phone <name> <phone>           add another phone
  remove-phone <name> <phone>        remove a phone
  edit-phone <name> <old> <new>      change one phone
  birthday <name> <YYYY-MM-DD>       set a birthday
  birthday <name> clear              forget a birthday
  birthdays [days]                   upcoming birthdays
  help                               this text
  exit | close | good bye            quit";
