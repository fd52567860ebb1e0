use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::open_store;
use crate::db::queries::delete_report;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        //
        // Confirmation prompt
        //
        let prompt = format!("Delete report #{}? This action is irreversible.", id);

        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion. Deleting an unknown id is a successful no-op:
        // the store holds at most one record per id.
        //
        let mut pool = open_store(&cfg.database)?;

        let affected = delete_report(&mut pool, *id)?;

        if affected == 0 {
            info(format!("No report found with id {} (nothing to delete).", id));
        } else {
            let _ = ttlog(
                &pool.conn,
                "del",
                &format!("report {id}"),
                &format!("Deleted report {id}"),
            );
            success(format!("Report #{} has been deleted.", id));
        }
    }

    Ok(())
}
