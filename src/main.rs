use clap::Parser;
use fp2lm::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("fp2lm - Flight Planner to Litchi Mission converter");
    println!("==================================================");
    println!();
    println!("Convert survey waypoints exported by a flight-planning tool into");
    println!("Litchi Mission Hub CSV, KML or KMZ missions.");
    println!();
    println!("USAGE:");
    println!("    fp2lm <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert a Flight Planner export into a mission (main command)");
    println!("    orbit       Print camera bearings for a regular-polygon orbit");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert with a photo every 20 meters:");
    println!("    fp2lm convert plan.csv -o mission.csv -d 20m");
    println!();
    println!("    # Read stdin, write KMZ for Google Earth:");
    println!("    cat plan.csv | fp2lm convert -f kmz -o mission.kmz");
    println!();
    println!("    # Absolute altitudes and a 45 degree camera:");
    println!("    fp2lm convert plan.csv --altitude-mode asl --pitch -45");
    println!();
    println!("    # Six-sided orbit, 80 m across:");
    println!("    fp2lm orbit 6 80");
    println!();
    println!("For detailed help on any command, use:");
    println!("    fp2lm <COMMAND> --help");
}
