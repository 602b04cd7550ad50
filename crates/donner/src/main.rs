use donner_core::{events, init_logging};

mod app;
mod commands;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Quiet unless --verbose; logs go to stderr either way
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    match commands::run_command(&matches) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            events::log_app_error(e.as_ref());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
