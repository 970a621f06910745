//! rworkreport main entrypoint.

use rworkreport::run;

fn main() {
    if let Err(e) = run() {
        rworkreport::ui::messages::error(e);
        std::process::exit(1);
    }
}
