//! `-d`: delete contacts by name, with a numbered menu for ambiguous input.
//!
//! The delete always runs. When nothing matches, or the menu answer is not a
//! listed number, the target stays the raw input and usually affects no rows.

use super::{CommandResult, Console};
use crate::model::contact::title_case;
use crate::repo::contact_repo::{Confirmation, ContactRepository};
use crate::service::contact_service::ContactService;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

/// Menu answer that does not name a listed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoiceError {
    pub input: String,
}

impl Display for InvalidChoiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid menu choice `{}`", self.input)
    }
}

impl Error for InvalidChoiceError {}

/// Maps a 1-based menu answer onto `names`.
pub fn resolve_choice<'a>(
    names: &'a [String],
    answer: &str,
) -> Result<&'a str, InvalidChoiceError> {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| names.get(index))
        .map(String::as_str)
        .ok_or_else(|| InvalidChoiceError {
            input: answer.to_string(),
        })
}

/// Prompts for a name, resolves it against stored contacts and deletes.
pub fn run_delete<R, I, O>(
    service: &ContactService<R>,
    console: &mut Console<I, O>,
) -> CommandResult<Confirmation>
where
    R: ContactRepository,
    I: BufRead,
    O: Write,
{
    let Some(input) = console.prompt("Enter the name to delete: ")? else {
        return Ok(Confirmation::Deleted { rows: 0 });
    };
    let found = service.search(&input)?;
    let mut target = input.clone();

    match found.as_slice() {
        [] => writeln!(console.out(), "No contact {input} in the database.")?,
        [contact] => target = contact.name.clone(),
        many => {
            let names: Vec<String> = many.iter().map(|contact| contact.name.clone()).collect();
            writeln!(
                console.out(),
                "{} {} found in the DB.\n",
                names.len(),
                title_case(&input)
            )?;
            for (index, name) in names.iter().enumerate() {
                writeln!(console.out(), "{} - {name}", index + 1)?;
            }

            let answer = console
                .prompt("Enter the number to delete > ")?
                .unwrap_or_default();
            match resolve_choice(&names, &answer) {
                Ok(name) => target = name.to_string(),
                Err(err) => {
                    info!("event=delete_choice module=command status=rejected error={err}");
                    writeln!(console.out(), "Invalid choice.")?;
                }
            }
        }
    }

    let confirmation = service.delete_by_name(&target)?;
    writeln!(console.out(), "{confirmation}")?;
    Ok(confirmation)
}
