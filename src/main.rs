//! schedcache main entrypoint.

use schedcache::run;
use schedcache::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
