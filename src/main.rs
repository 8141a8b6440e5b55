//! rDailyStatus main entrypoint.

use rdailystatus::run;
use rdailystatus::ui::messages::error_chain;

fn main() {
    println!();
    if let Err(e) = run() {
        error_chain(&e);
        std::process::exit(1);
    }
}
