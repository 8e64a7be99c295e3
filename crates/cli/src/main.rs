fn main() {
    if let Err(e) = classpath_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
