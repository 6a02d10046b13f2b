fn main() {
    if let Err(e) = deskbot::cli::main() {
        eprintln!("❌ Error: {e}");
        std::process::exit(1);
    }
}
