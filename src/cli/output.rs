//! Colored terminal output helpers.
//!
//! Status lines go to stderr so stdout carries only results (hashes,
//! yes/no answers, JSON) and can be piped.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::hash::DecodedHash;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of the parameters stored in a hash.
pub fn print_params_table(decoded: &DecodedHash) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Parameter", "Value"]);

    let p = &decoded.params;
    table.add_row(vec!["Time (iterations)".to_string(), p.time.to_string()]);
    table.add_row(vec!["Memory (KiB)".to_string(), p.memory.to_string()]);
    table.add_row(vec!["Parallelism".to_string(), p.parallelism.to_string()]);
    table.add_row(vec!["Key length (bytes)".to_string(), p.key_length.to_string()]);
    table.add_row(vec![
        "Salt length (bytes)".to_string(),
        decoded.salt.len().to_string(),
    ]);

    println!("{table}");
}
