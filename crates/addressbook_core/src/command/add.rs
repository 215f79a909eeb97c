//! `-a`: interactive registration loop.

use super::{CommandResult, Console};
use crate::model::contact::Contact;
use crate::repo::contact_repo::{ContactRepository, RepoError};
use crate::service::contact_service::ContactService;
use log::info;
use std::io::{BufRead, Write};

/// Registers contacts until the user enters `q`/`Q` or input ends.
///
/// Returns the number of contacts registered in this session.
pub fn run_add<R, I, O>(
    service: &ContactService<R>,
    console: &mut Console<I, O>,
) -> CommandResult<usize>
where
    R: ContactRepository,
    I: BufRead,
    O: Write,
{
    let mut registered = 0;

    loop {
        writeln!(console.out(), "Press ENTER to register a contact.")?;
        writeln!(console.out(), "Enter 'q' to quit.")?;

        let Some(response) = console.read_line()? else {
            break;
        };
        if response.eq_ignore_ascii_case("q") {
            break;
        }

        let Some(contact) = read_contact(console)? else {
            info!("event=contact_form module=command status=aborted reason=end_of_input");
            break;
        };

        match service.register(&contact) {
            Ok(confirmation) => {
                registered += 1;
                writeln!(console.out(), "{confirmation}")?;
            }
            Err(RepoError::Validation(err)) => {
                info!("event=contact_register module=command status=rejected error={err}");
                writeln!(console.out(), "Name cannot be empty.")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    info!("event=add_session module=command status=ok registered={registered}");
    Ok(registered)
}

fn read_contact<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
) -> CommandResult<Option<Contact>> {
    let Some(name) = console.prompt("Name > ")? else {
        return Ok(None);
    };
    let Some(job) = console.prompt("Job > ")? else {
        return Ok(None);
    };
    let Some(company) = console.prompt("Company > ")? else {
        return Ok(None);
    };
    let Some(email) = console.prompt("Email > ")? else {
        return Ok(None);
    };
    let Some(phone) = console.prompt("Phone > ")? else {
        return Ok(None);
    };
    let Some(address) = console.prompt("Address > ")? else {
        return Ok(None);
    };

    Ok(Some(Contact::from_input(
        &name, job, company, email, phone, address,
    )))
}
