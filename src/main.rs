fn main() {
    if let Err(e) = hosts_toggle::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
