// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::debug;
use rand::Rng;
use std::io::{BufRead, Write};

use crate::clipboard::Clipboard;
use crate::form::Form;

const HELP: &str = "Commands:
  username <value>     set the username
  phone <value>        set the phone number
  birthdate <value>    set the birthdate (YYYY-MM-DD)
  length <8-28>        set the password length
  symbols on|off       include symbols in the padding
  copy                 copy the password to the clipboard until you quit
  show                 print the current password
  help                 print this message
  quit, exit           leave";

/// Reads form commands line by line until `quit` or end of input, printing
/// the current password after every change.
pub(crate) fn run<R, I, O>(
    form: &mut Form<R>,
    clipboard: &mut dyn Clipboard,
    input: I,
    output: &mut O,
) -> std::io::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{HELP}")?;

    for line in input.lines() {
        let line = line?;
        // Only the separator after the command word is dropped, identity
        // values keep their whitespace.
        let line = line.trim_start();
        let (command, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        debug!("Form command '{command}'");

        match command {
            "" => continue,
            "username" => form.set_username(value),
            "phone" => form.set_phone_number(value),
            "birthdate" => form.set_birthdate(value),
            "length" => match value.trim().parse::<usize>() {
                Ok(length) => form.set_length(length),
                Err(_) => {
                    writeln!(output, "Length must be a number, got '{value}'")?;
                    continue;
                }
            },
            "symbols" => match value.trim() {
                "on" => form.set_include_symbols(true),
                "off" => form.set_include_symbols(false),
                _ => {
                    writeln!(output, "Expected 'symbols on' or 'symbols off'")?;
                    continue;
                }
            },
            "copy" => {
                writeln!(output, "{}", form.copy(clipboard).message())?;
                continue;
            }
            "show" => {}
            "help" => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            "quit" | "exit" => break,
            _ => {
                writeln!(output, "Unknown command '{command}', try 'help'")?;
                continue;
            }
        }

        writeln!(
            output,
            "Password: {} (length {}, strength {})",
            form.password(),
            form.options().length,
            form.strength()
        )?;
    }

    Ok(())
}
