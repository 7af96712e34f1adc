//! Prints bcrypt hashes for the passwords given as arguments, for
//! provisioning APP__AUTH__ADMIN_PASSWORD_HASH / APP__AUTH__CLIENT_PASSWORD_HASH.

use anyhow::Result;

use tracker_security::password::PasswordService;

fn main() -> Result<()> {
    let passwords: Vec<String> = std::env::args().skip(1).collect();
    if passwords.is_empty() {
        eprintln!("usage: generate-hashes <password> [<password> ...]");
        std::process::exit(2);
    }

    for password in passwords {
        println!("{}", PasswordService::hash(&password)?);
    }

    Ok(())
}
