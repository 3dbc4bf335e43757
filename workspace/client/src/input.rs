use std::borrow::Cow;

use rustyline::config::Configurer;
use rustyline::highlight::Highlighter;
use rustyline::{ColorMode, Editor};

use rustyline_derive::{Completer, Helper, Hinter, Validator};
use secrecy::{ExposeSecret, Secret, SecretString};

use crate::{Error, Result};

/// Replaces typed characters with asterisks.
#[derive(Completer, Helper, Hinter, Validator)]
struct Mask;

impl Highlighter for Mask {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        use unicode_width::UnicodeWidthStr;
        Cow::Owned("*".repeat(line.width()))
    }

    fn highlight_char(&self, _line: &str, _pos: usize) -> bool {
        true
    }
}

/// Read a passphrase from a masked prompt.
pub(crate) fn read_password(prompt: &str) -> Result<SecretString> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(Mask));
    rl.set_color_mode(ColorMode::Forced);
    rl.set_auto_add_history(false);

    // Pasted input may carry a newline
    let passwd = rl.readline(prompt)?.trim_end_matches('\n').to_string();
    Ok(Secret::new(passwd))
}

/// Read a new passphrase and ask for it again to confirm.
pub(crate) fn read_new_password() -> Result<SecretString> {
    let password = read_password("Password: ")?;
    let confirm = read_password("Confirm password: ")?;
    if password.expose_secret() != confirm.expose_secret() {
        return Err(Error::PasswordMismatch);
    }
    Ok(password)
}
