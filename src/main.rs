use std::process;

fn main() {
    if let Err(e) = matchday::cli::main() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
