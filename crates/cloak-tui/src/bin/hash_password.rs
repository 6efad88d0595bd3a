//! Prints an Argon2 hash for `[auth] password_hash` in the console config.

use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    eprint!("Enter password: ");
    io::stderr().flush()?;

    let mut password = String::new();
    io::stdin().read_line(&mut password)?;
    let password = password.trim_end_matches(['\r', '\n']);

    if password.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }

    let hash = cloak_core::hash_password(password)?;
    println!("{hash}");
    Ok(())
}
