//! # CLI Layer
//!
//! One possible front end for addrbook: an interactive loop reading one
//! command per line from stdin.
//!
//! This is the only place that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Parses process arguments and command lines
//! - Turns errors into the messages users see
//!
//! Errors inside the loop are printed and the loop carries on; only setup
//! failures (bad config, corrupt contacts file) end the process.

use super::parse::{parse_line, Command, ParseError};
use super::print::{print_contacts, print_messages, print_pages, print_phones};
use super::setup::{init_logging, resolve_data_dir, Cli, HELP_TEXT};
use addrbook::api::{BookApi, CmdMessage, CmdResult};
use addrbook::config::BookConfig;
use addrbook::error::{BookError, Result};
use addrbook::store::fs::FileBackend;
use addrbook::store::StorageBackend;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, info};

struct AppContext {
    api: BookApi<FileBackend>,
    page_size: usize,
    birthday_window: u32,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    info!(
        location = %ctx.api.book().backend().location().display(),
        contacts = ctx.api.book().len(),
        "contact book opened"
    );

    let interactive = io::stdin().is_terminal();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            println!("Good bye!");
            break;
        }
        let line = decode_line(&buf);

        match handle_line(&mut ctx, &line) {
            Flow::Continue => {}
            Flow::Quit => break,
        }
    }

    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = BookConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), ?config, "configuration loaded");

    let backend = FileBackend::new(data_dir).with_file_name(&config.contacts_file);
    let api = BookApi::open(backend)?;

    let page_size = match cli.page_size {
        Some(size) => usize::try_from(size)
            .map_err(|_| BookError::InvalidArgument(format!("page size {} is too large", size)))?,
        None => config.page_size,
    };

    Ok(AppContext {
        api,
        page_size,
        birthday_window: config.birthday_window_days,
    })
}

/// Bytes that are not UTF-8 become U+FFFD, so a bad line is just an
/// unknown name or command.
fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(['\n', '\r'])
        .to_string()
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Flow {
    let command = match parse_line(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Flow::Continue,
        Err(e) => {
            print_messages(&[CmdMessage::error(parse_error_message(&e))]);
            return Flow::Continue;
        }
    };

    match dispatch(ctx, command) {
        Ok(flow) => flow,
        Err(e) => {
            debug!(error = %e, "command failed");
            print_messages(&[CmdMessage::error(error_message(&e))]);
            Flow::Continue
        }
    }
}

fn dispatch(ctx: &mut AppContext, command: Command) -> Result<Flow> {
    match command {
        Command::Hello => println!("How can I help you?"),
        Command::Help => println!("{}", HELP_TEXT),
        Command::Exit => {
            println!("Good bye!");
            return Ok(Flow::Quit);
        }
        Command::Add { name, phone } => print_result(&ctx.api.add(&name, &phone)?),
        Command::Change { name, phone } => print_result(&ctx.api.update(&name, &phone)?),
        Command::Phone { name } => {
            let result = ctx.api.lookup(&name)?;
            for contact in &result.contacts {
                print_phones(contact);
            }
        }
        Command::ShowAll => {
            let result = ctx.api.list()?;
            print_contacts("Contacts:", &result.contacts);
            print_messages(&result.messages);
        }
        Command::Search { query } => {
            let result = ctx.api.search(&query)?;
            print_contacts("Matches:", &result.contacts);
            print_messages(&result.messages);
        }
        Command::Page { size } => {
            let result = ctx.api.paginate(size.unwrap_or(ctx.page_size))?;
            print_pages(&result.pages);
        }
        Command::Delete { name } => print_result(&ctx.api.delete(&name)?),
        Command::AddPhone { name, phone } => print_result(&ctx.api.add_phone(&name, &phone)?),
        Command::RemovePhone { name, phone } => {
            print_result(&ctx.api.remove_phone(&name, &phone)?)
        }
        Command::EditPhone { name, old, new } => {
            print_result(&ctx.api.edit_phone(&name, &old, &new)?)
        }
        Command::Birthday { name, date } => print_result(&ctx.api.set_birthday(&name, &date)?),
        Command::ClearBirthday { name } => print_result(&ctx.api.clear_birthday(&name)?),
        Command::Birthdays { days } => {
            let result = ctx.api.birthdays(days.unwrap_or(ctx.birthday_window))?;
            print_contacts("Upcoming birthdays:", &result.contacts);
            print_messages(&result.messages);
        }
    }
    Ok(Flow::Continue)
}

/// Mutations only report their messages.
fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
}

fn parse_error_message(error: &ParseError) -> String {
    error.to_string()
}

fn error_message(error: &BookError) -> String {
    match error {
        BookError::NotFound(_) => "Contact not found!".to_string(),
        BookError::Validation(_) | BookError::InvalidArgument(_) => "Invalid input!".to_string(),
        BookError::Persistence(_) | BookError::CorruptData(_) | BookError::Config(_) => {
            format!("Storage error: {}", error)
        }
    }
}
