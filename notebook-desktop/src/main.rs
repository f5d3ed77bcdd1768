fn main() {
    env_logger::init();

    if let Err(e) = notebook_desktop_lib::run() {
        eprintln!("notebook: {e}");
        std::process::exit(1);
    }
}
