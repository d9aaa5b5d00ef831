mod cli;

fn main() {
    if let Err(e) = cli::commands::run() {
        eprintln!("{}", cli::format_error(&e));
        std::process::exit(1);
    }
}
