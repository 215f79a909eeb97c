//! `-s`: look up contacts by name substring.

use super::{CommandResult, Console};
use crate::model::contact::Contact;
use crate::repo::contact_repo::ContactRepository;
use crate::service::contact_service::ContactService;
use std::io::{BufRead, Write};

const RESULT_DIVIDER: &str = "-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+";

/// Prompts for a name and prints the details of every matching contact.
///
/// Returns the matches in store order.
pub fn run_search<R, I, O>(
    service: &ContactService<R>,
    console: &mut Console<I, O>,
) -> CommandResult<Vec<Contact>>
where
    R: ContactRepository,
    I: BufRead,
    O: Write,
{
    let Some(query) = console.prompt("Enter a name to view its details:\n: ")? else {
        return Ok(Vec::new());
    };
    let found = service.search(&query)?;
    let out = console.out();

    match found.as_slice() {
        [] => writeln!(out, "No contact {query} in the database.")?,
        [contact] => {
            writeln!(out, "\n-+-+-+-+ Contact found +-+-+-+-\n")?;
            write_details(out, contact)?;
            writeln!(out, "{RESULT_DIVIDER}")?;
        }
        many => {
            writeln!(out, "\n-+-+-+-+ Contacts found +-+-+-+-\n")?;
            for (index, contact) in many.iter().enumerate() {
                writeln!(out, "{} >", index + 1)?;
                write_details(out, contact)?;
            }
            writeln!(out, "{RESULT_DIVIDER}")?;
        }
    }

    Ok(found)
}

fn write_details<O: Write>(out: &mut O, contact: &Contact) -> std::io::Result<()> {
    writeln!(out, "Name: {}", contact.name)?;
    writeln!(out, "Job: {}", contact.job)?;
    writeln!(out, "Company: {}", contact.company)?;
    writeln!(out, "Email: {}", contact.email)?;
    writeln!(out, "Phone Number: {}", contact.phone)?;
    writeln!(out, "Address: {}\n", contact.address)
}
