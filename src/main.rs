use clap::Parser;
use metar_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - results have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("METAR Processor - Aviation Weather Report Parser");
    println!("================================================");
    println!();
    println!("Parse coded METAR bulletins into structured fields, or decode them");
    println!("into plain-language weather summaries.");
    println!();
    println!("USAGE:");
    println!("    metar-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse reports into structured fields (text or JSON)");
    println!("    decode      Decode reports into plain-language summaries");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    metar-processor parse LDZA \"METAR LDZA 030700Z 00000KT 9999 NSW SCT040 15/10 Q1013\"");
    println!("    metar-processor decode LDZA --input reports.txt");
    println!();
    println!("For detailed help on a specific command:");
    println!("    metar-processor help <COMMAND>");
}
