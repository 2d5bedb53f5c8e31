// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use clap::Parser;
use env_logger::Env;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use std::io;
use std::process::ExitCode;
use std::time::Duration;

use crate::cli::{CliArgs, Command, DeriveArgs, InteractiveArgs, OutputFormat, StrengthArgs};
use crate::clipboard::{copy_password, hold_clipboard, SystemClipboard};
use crate::config::read_config;
use crate::form::Form;
use crate::password::{derive, Identity, Options};
use crate::strength::classify_strength;

mod cli;
mod clipboard;
mod config;
mod form;
mod interactive;
mod password;
mod strength;

const LOG_LEVEL: &'static str = "PASSDERIVE_LOG_LEVEL";

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_LEVEL, "warn")).init();

    let args: CliArgs = CliArgs::parse();
    debug!("CLI args: {:?}", args);

    match args.command {
        Command::Derive(derive_args) => derive_password(derive_args),
        Command::Strength(strength_args) => print_strength(strength_args),
        Command::Interactive(interactive_args) => run_interactive(interactive_args),
    }
}

/// An explicit `--seed` wins over the config file; without either the
/// padding generator is seeded from the thread-local one.
fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn derive_password(derive_args: DeriveArgs) -> ExitCode {
    let config = read_config(derive_args.base.config_path);

    let options = Options::new(
        derive_args
            .length
            .map(usize::from)
            .unwrap_or(config.length),
        config.include_symbols && !derive_args.no_symbols,
    );
    let identity = Identity {
        username: derive_args.username,
        phone_number: derive_args.phone_number,
        birthdate: derive_args.birthdate,
    };

    let mut rng = rng(derive_args.base.seed.or(config.seed));
    let password = derive(&identity, &options, &mut rng);
    let strength = classify_strength(&password);

    match derive_args.output {
        OutputFormat::Text => {
            println!("Password: {password}");
            println!("Strength: {strength}");
        }
        OutputFormat::Json => {
            println!("{}", json!({ "password": password, "strength": strength }));
        }
    }

    if derive_args.copy {
        let mut clipboard = SystemClipboard::default();
        let outcome = copy_password(&password, &mut clipboard);
        println!("{}", outcome.message());
        if !outcome.is_success() {
            return ExitCode::FAILURE;
        }

        // The process owns the clipboard on X11, so it has to stay around.
        println!("Clearing clipboard in {} seconds", derive_args.hold);
        hold_clipboard(&mut clipboard, &password, Duration::from_secs(derive_args.hold));
    }

    ExitCode::SUCCESS
}

fn print_strength(strength_args: StrengthArgs) -> ExitCode {
    println!("{}", classify_strength(&strength_args.password));
    ExitCode::SUCCESS
}

fn run_interactive(interactive_args: InteractiveArgs) -> ExitCode {
    let config = read_config(interactive_args.base.config_path);
    let rng = rng(interactive_args.base.seed.or(config.seed));

    let mut form = Form::new(config.options(), rng);

    match interactive::run(
        &mut form,
        &mut SystemClipboard::default(),
        io::stdin().lock(),
        &mut io::stdout(),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to read form input: {e}");
            ExitCode::FAILURE
        }
    }
}
