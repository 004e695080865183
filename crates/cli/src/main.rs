fn main() {
    if let Err(e) = capstan_cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
