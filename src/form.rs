// Copyright (c) 2024 PostFinance AG
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use log::debug;
use rand::Rng;

use crate::clipboard::{copy_password, Clipboard, CopyOutcome};
use crate::password::{derive, Identity, Options};
use crate::strength::{classify_strength, Strength};

/// Current state of the password form. Every setter that changes a value
/// recomputes the password and its strength in full.
pub(crate) struct Form<R: Rng> {
    identity: Identity,
    options: Options,
    password: String,
    strength: Strength,
    rng: R,
}

impl<R: Rng> Form<R> {
    pub(crate) fn new(options: Options, rng: R) -> Self {
        let mut form = Form {
            identity: Identity::default(),
            options,
            password: String::new(),
            strength: Strength::Weak,
            rng,
        };
        form.recompute();
        form
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    pub(crate) fn strength(&self) -> Strength {
        self.strength
    }

    pub(crate) fn options(&self) -> Options {
        self.options
    }

    pub(crate) fn set_username(&mut self, username: &str) {
        if self.identity.username != username {
            self.identity.username = username.to_string();
            self.recompute();
        }
    }

    pub(crate) fn set_phone_number(&mut self, phone_number: &str) {
        if self.identity.phone_number != phone_number {
            self.identity.phone_number = phone_number.to_string();
            self.recompute();
        }
    }

    pub(crate) fn set_birthdate(&mut self, birthdate: &str) {
        if self.identity.birthdate != birthdate {
            self.identity.birthdate = birthdate.to_string();
            self.recompute();
        }
    }

    /// Out of range lengths are clamped, as a slider would.
    pub(crate) fn set_length(&mut self, length: usize) {
        let options = Options::new(length, self.options.include_symbols);
        if options != self.options {
            self.options = options;
            self.recompute();
        }
    }

    pub(crate) fn set_include_symbols(&mut self, include_symbols: bool) {
        if self.options.include_symbols != include_symbols {
            self.options.include_symbols = include_symbols;
            self.recompute();
        }
    }

    pub(crate) fn copy(&self, clipboard: &mut dyn Clipboard) -> CopyOutcome {
        copy_password(&self.password, clipboard)
    }

    fn recompute(&mut self) {
        self.password = derive(&self.identity, &self.options, &mut self.rng);
        self.strength = classify_strength(&self.password);
        debug!(
            "Recomputed password: length {}, strength {}",
            self.password.chars().count(),
            self.strength
        );
    }
}
