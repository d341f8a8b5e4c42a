//! paysheet main entrypoint.

use paysheet::run;
use paysheet::ui::messages::{error, warning};

fn main() {
    println!();
    if let Err(e) = run() {
        if !e.is_user_facing() {
            warning("This looks like a configuration or deployment problem, not bad input.");
        }
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
