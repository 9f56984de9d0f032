//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `contactbook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use contactbook_core::db::open_db_in_memory;
use contactbook_core::{ContactService, SqliteContactRepository};

fn main() {
    println!("contactbook_core version={}", contactbook_core::core_version());

    // Exercise the full CRUD surface against a throwaway in-memory store so
    // the probe never touches the real records.db.
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("storage unavailable: {err}");
            std::process::exit(1);
        }
    };

    let repo = match SqliteContactRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("repository not ready: {err}");
            std::process::exit(1);
        }
    };
    let service = ContactService::new(repo);

    match service.create_contact("Smoke Probe", 1, "probe@localhost") {
        Ok(id) => println!("smoke create ok id={id}"),
        Err(err) => {
            eprintln!("smoke create failed: {err}");
            std::process::exit(1);
        }
    }

    match service.list_contacts() {
        Ok(contacts) => println!("smoke list ok count={}", contacts.len()),
        Err(err) => {
            eprintln!("smoke list failed: {err}");
            std::process::exit(1);
        }
    }
}
