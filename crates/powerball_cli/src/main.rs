//! Powerball odds simulator CLI
//!
//! Terminal stand-in for the browser app: one subcommand per mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use powerball_core::format::{group_thousands, group_thousands_f2};
use powerball_core::{
    check_ticket, random_ticket, run_bulk, run_fast_win, spawn_realistic, Outcome,
    RealisticConfig, SimEvent, Ticket,
};
use powerball_data::load_drawings;
use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "powerball")]
#[command(about = "Why you won't win the lottery, interactively", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random tickets
    Random {
        /// How many tickets to print
        #[arg(long, default_value_t = 1)]
        count: u32,
    },

    /// Validate a custom ticket and check it against the drawing history
    Custom {
        /// Five white ball numbers, comma separated (e.g. 5,17,23,44,61)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        whites: Vec<i64>,

        /// Powerball number (1-26)
        #[arg(long, allow_hyphen_values = true)]
        powerball: i64,

        /// Historical drawing CSV
        #[arg(long, default_value = "data/powerball_data.csv")]
        data: PathBuf,
    },

    /// Generate and test N unique tickets against all historical drawings
    Bulk {
        /// How many unique tickets to generate
        #[arg(long)]
        count: u64,

        /// Historical drawing CSV
        #[arg(long, default_value = "data/powerball_data.csv")]
        data: PathBuf,

        /// Print the full result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Generate tickets until one matches a historical drawing
    FastWin {
        /// Historical drawing CSV
        #[arg(long, default_value = "data/powerball_data.csv")]
        data: PathBuf,
    },

    /// Simulate real odds: one fixed ticket against random drawings
    Realistic,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Random { count } => {
            for _ in 0..count {
                println!("{}", random_ticket());
            }
        }

        Commands::Custom { whites, powerball, data } => {
            let ticket = match Ticket::from_parts(&whites, powerball) {
                Ok(ticket) => ticket,
                Err(reason) => {
                    println!("Invalid ticket: {}", reason);
                    std::process::exit(1);
                }
            };

            let (drawings, stats) = load_drawings(&data)?;
            println!("Checking {} against {} historical drawings...", ticket, stats.loaded);
            match check_ticket(&ticket, &drawings) {
                Some(date) => println!("WINNER! This ticket was drawn on {}", date),
                None => println!("Not a winner. (You saved $2.)"),
            }
        }

        Commands::Bulk { count, data, json } => {
            let (drawings, stats) = load_drawings(&data)?;
            println!("Loaded {} historical drawings", stats.loaded);

            let mut rng = rand::thread_rng();
            let result = run_bulk(&mut rng, count, &drawings, |done| {
                if done % 1_000 == 0 || done == count {
                    eprint!("\rChecked {} / {} tickets", group_thousands(done), group_thousands(count));
                    let _ = std::io::stderr().flush();
                }
            })?;
            eprintln!();

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!(
                    "{} tickets: {} winners, {} losers",
                    group_thousands(result.tickets.len() as u64),
                    result.wins.len(),
                    group_thousands(result.losses)
                );
                for win in &result.wins {
                    println!("  ticket #{}: {} (drawn {})", win.index + 1, result.tickets[win.index], win.date);
                }
            }
        }

        Commands::FastWin { data } => {
            let (drawings, stats) = load_drawings(&data)?;
            println!(
                "Generating tickets until one matches any of {} drawings...",
                stats.loaded
            );

            let mut rng = rand::thread_rng();
            let outcome = run_fast_win(
                &mut rng,
                &drawings,
                |checked| {
                    eprint!("\rTried {} unique tickets", group_thousands(checked));
                    let _ = std::io::stderr().flush();
                },
                || false,
            )?;
            eprintln!();

            match outcome {
                Outcome::Won(win) => {
                    println!("Winning ticket: {}", win.ticket);
                    println!("Matched drawing date: {}", win.date);
                    println!("Unique tickets tried: {}", group_thousands(win.tickets_checked));
                }
                Outcome::Cancelled => println!("Stopped."),
            }
        }

        Commands::Realistic => {
            let ticket = random_ticket();
            println!("Your ticket: {}", ticket);
            println!("Press Enter to stop.");

            let handle = spawn_realistic(ticket, RealisticConfig::default());

            let token = handle.stop_token();
            thread::spawn(move || {
                let mut line = String::new();
                let _ = std::io::stdin().read_line(&mut line);
                token.request_stop();
            });

            for event in handle.events().iter() {
                match event {
                    SimEvent::Message { text, delay_ms } => {
                        println!("{}", text);
                        if let Some(ms) = delay_ms {
                            thread::sleep(Duration::from_millis(ms));
                        }
                    }
                    SimEvent::Progress(stats) => {
                        eprintln!(
                            "[{} tickets | ${} | {} years]",
                            group_thousands(stats.tickets_generated),
                            group_thousands(stats.money_spent),
                            group_thousands_f2(stats.years_waited)
                        );
                    }
                    SimEvent::Complete(_) => break,
                    SimEvent::Cancelled => {
                        println!("Stopped.");
                        break;
                    }
                }
            }
            handle.join();
        }
    }

    Ok(())
}
