// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use clap::{Parser, Subcommand, ValueEnum};

use crate::password::{MAX_LENGTH, MIN_LENGTH};

/// passderive - Personal password derivation.
///
/// Builds a password from the first letters of a username, the last digits of a phone number and a birthdate, padded with random characters to the requested length.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))] // Require at least one subcommand
#[command(propagate_version = true)] // Display version in subcommand help
pub(crate) struct CliArgs {
    #[clap(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Derive a password from the given identity inputs.
    ///
    /// Prints the derived password together with its strength label.
    Derive(DeriveArgs),

    /// Classify the strength of an existing password.
    ///
    /// Prints Weak, Medium or Strong.
    Strength(StrengthArgs),

    /// Fill in the password form line by line on stdin.
    ///
    /// The password is derived again after every change.
    Interactive(InteractiveArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Base arguments for subcommands that share common parameters.
#[derive(Parser, Debug)]
pub(crate) struct BaseArgs {
    /// Path to an optional configuration file.
    #[clap(short, long)]
    pub(crate) config_path: Option<std::path::PathBuf>,

    /// Seed for the random padding, makes the output reproducible.
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

/// Arguments specific to the `derive` subcommand.
#[derive(Parser, Debug)]
pub(crate) struct DeriveArgs {
    #[clap(flatten)] // Inherit arguments from BaseArgs
    pub(crate) base: BaseArgs,

    /// Username, its first three characters are used
    #[clap(short, long, default_value = "")]
    pub(crate) username: String,

    /// Phone number, its last three characters are used
    #[clap(short, long, default_value = "")]
    pub(crate) phone_number: String,

    /// Birthdate as YYYY-MM-DD, used without dashes
    #[clap(short, long, default_value = "")]
    pub(crate) birthdate: String,

    /// The length of the derived password
    #[clap(short, long, value_parser = clap::value_parser!(u8).range(MIN_LENGTH as i64..=MAX_LENGTH as i64))]
    pub(crate) length: Option<u8>,

    /// Pad with letters and digits only
    #[clap(long)]
    pub(crate) no_symbols: bool,

    /// Copy the derived password to the clipboard
    #[clap(long)]
    pub(crate) copy: bool,

    /// Seconds to keep serving the copied password before clearing the clipboard
    #[clap(long, value_name = "SECONDS", default_value = "10", requires = "copy")]
    pub(crate) hold: u64,

    /// Output format
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) output: OutputFormat,
}

/// Arguments specific to the `strength` subcommand.
#[derive(Parser, Debug)]
pub(crate) struct StrengthArgs {
    /// The password to classify
    pub(crate) password: String,
}

/// Arguments specific to the `interactive` subcommand.
#[derive(Parser, Debug)]
pub(crate) struct InteractiveArgs {
    #[clap(flatten)] // Inherit arguments from BaseArgs
    pub(crate) base: BaseArgs,
}
