//! `-v`: print every stored contact.

use super::{CommandResult, Console};
use crate::repo::contact_repo::ContactRepository;
use crate::service::contact_service::ContactService;
use std::io::{BufRead, Write};

const ENTRY_DIVIDER: &str = "-+-+-+-+-+-";

/// Prints all contacts, numbered from 1, fields joined by `"; "`.
///
/// Returns the number of contacts printed.
pub fn run_list<R, I, O>(
    service: &ContactService<R>,
    console: &mut Console<I, O>,
) -> CommandResult<usize>
where
    R: ContactRepository,
    I: BufRead,
    O: Write,
{
    let contacts = service.list()?;
    let out = console.out();

    if contacts.is_empty() {
        writeln!(out, "\nThe database is empty.\n")?;
        return Ok(0);
    }

    for (index, contact) in contacts.iter().enumerate() {
        writeln!(out, "Contact {}:", index + 1)?;
        writeln!(out, "{}", contact.fields().join("; "))?;
        writeln!(out, "{ENTRY_DIVIDER}")?;
    }

    Ok(contacts.len())
}
