//! worktime main entrypoint.

use worktime::ui::messages::error;
use worktime::{init_tracing, run};

fn main() {
    init_tracing();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
