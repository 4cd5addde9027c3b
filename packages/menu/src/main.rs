use clap::Parser;

/// fsmenu - an interactive menu over basic filesystem operations
#[derive(Parser, Debug)]
#[command(name = "fsmenu")]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() {
    let _args = Args::parse();

    // Session end (exit option, invalid option, closed stdin) is a normal
    // return; only host-level I/O failures are reported.
    if let Err(e) = fsmenu_menu::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
