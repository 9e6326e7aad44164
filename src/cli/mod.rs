use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{ReservationService, RoomListing};
use crate::domain::format_cents;

/// Albergo - Hotel Reservation Desk
#[derive(Parser)]
#[command(name = "albergo")]
#[command(about = "A single-session hotel room reservation desk for the command line")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive reservation desk (the default)
    Desk,

    /// List available rooms with their nightly rates
    Rooms {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Price a stay for a room
    Bill {
        /// Room number
        room: u32,

        /// Length of the stay in nights
        nights: i64,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut service = ReservationService::new();

        match self.command.unwrap_or(Commands::Desk) {
            Commands::Desk => run_desk(&mut service, self.verbose),
            Commands::Rooms { format } => run_rooms_command(&service, &format),
            Commands::Bill {
                room,
                nights,
                format,
            } => run_bill_command(&service, room, nights, &format),
        }
    }
}

fn run_rooms_command(service: &ReservationService, format: &str) -> Result<()> {
    let rooms = service.list_available_rooms();
    match format {
        "table" => print_room_table(&rooms),
        "json" => println!("{}", serde_json::to_string_pretty(&rooms)?),
        other => {
            return Err(anyhow::anyhow!(
                "Unknown format '{}'. Valid formats: table, json",
                other
            ));
        }
    }
    Ok(())
}

fn run_bill_command(
    service: &ReservationService,
    room: u32,
    nights: i64,
    format: &str,
) -> Result<()> {
    let quote = service.quote_bill(room, nights)?;
    match format {
        "table" => println!(
            "Room {} ({}), {} night(s): {}",
            quote.number,
            quote.room_type,
            quote.nights,
            format_cents(quote.total)
        ),
        "json" => println!("{}", serde_json::to_string_pretty(&quote)?),
        other => {
            return Err(anyhow::anyhow!(
                "Unknown format '{}'. Valid formats: table, json",
                other
            ));
        }
    }
    Ok(())
}

// ========================
// Interactive desk
// ========================

type Lines<'a> = io::Lines<io::StdinLock<'a>>;

fn run_desk(service: &mut ReservationService, verbose: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("===== Albergo Reservation Desk =====");

    loop {
        print_menu(service);
        let Some(line) = next_line(&mut lines)? else {
            break;
        };

        let choice: u32 = match line.trim().parse() {
            Ok(choice) => choice,
            Err(_) => {
                println!("Invalid input. Please enter a number.");
                continue;
            }
        };

        let outcome = match choice {
            1 => desk_signup(service, &mut lines, verbose),
            2 => desk_login(service, &mut lines, verbose),
            3 => desk_show_rooms(service),
            4 => desk_book(service, &mut lines),
            5 => desk_bill(service, &mut lines),
            6 => desk_my_bookings(service),
            7 => desk_cancel(service, &mut lines),
            8 => break,
            _ => {
                println!("Invalid choice.");
                Ok(())
            }
        };

        // Domain errors are recoverable: report and show the menu again.
        if let Err(err) = outcome {
            eprintln!("Error: {}", err);
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn print_menu(service: &ReservationService) {
    println!();
    if let Some(username) = service.session().username() {
        println!("Logged in as {}", username);
    }
    println!("1. Signup");
    println!("2. Login");
    println!("3. Show Available Rooms");
    println!("4. Book Room");
    println!("5. Calculate Bill");
    println!("6. View My Bookings");
    println!("7. Cancel Booking");
    println!("8. Exit");
    print!("Choose option: ");
    let _ = io::stdout().flush();
}

fn desk_signup(
    service: &mut ReservationService,
    lines: &mut Lines<'_>,
    verbose: bool,
) -> Result<()> {
    let username = prompt(lines, "Username")?;
    let password = prompt(lines, "Password")?;
    service.signup(&username, &password)?;
    println!("Signup successful. You can now log in.");
    if verbose {
        eprintln!("[desk] registered account '{}'", username);
    }
    Ok(())
}

fn desk_login(
    service: &mut ReservationService,
    lines: &mut Lines<'_>,
    verbose: bool,
) -> Result<()> {
    let username = prompt(lines, "Username")?;
    let password = prompt(lines, "Password")?;
    if service.login(&username, &password) {
        println!("Login successful. Welcome, {}!", username);
        if verbose {
            eprintln!("[desk] session user is now '{}'", username);
        }
    } else {
        println!("Login failed: wrong username or password.");
    }
    Ok(())
}

fn desk_show_rooms(service: &ReservationService) -> Result<()> {
    print_room_table(&service.list_available_rooms());
    Ok(())
}

fn desk_book(service: &mut ReservationService, lines: &mut Lines<'_>) -> Result<()> {
    let number = prompt_number(lines, "Room number to book")?;
    service.book(number)?;
    println!("Room {} booked successfully.", number);
    Ok(())
}

fn desk_bill(service: &ReservationService, lines: &mut Lines<'_>) -> Result<()> {
    let number = prompt_number(lines, "Room number")?;
    let nights = prompt_number(lines, "Number of nights")?;
    let quote = service.quote_bill(number, nights)?;
    println!("Total bill: {}", format_cents(quote.total));
    Ok(())
}

fn desk_my_bookings(service: &ReservationService) -> Result<()> {
    let rooms = service.my_bookings()?;
    if rooms.is_empty() {
        println!("No rooms currently booked.");
    } else {
        let numbers: Vec<String> = rooms.iter().map(|n| n.to_string()).collect();
        println!("Booked rooms: {}", numbers.join(", "));
    }
    Ok(())
}

fn desk_cancel(service: &mut ReservationService, lines: &mut Lines<'_>) -> Result<()> {
    let number = prompt_number(lines, "Room number to cancel")?;
    service.cancel(number)?;
    println!("Booking for room {} cancelled.", number);
    Ok(())
}

fn print_room_table(rooms: &[RoomListing]) {
    if rooms.is_empty() {
        println!("No rooms available.");
        return;
    }
    println!("{:<8} {:<8} {:>10}", "ROOM", "TYPE", "RATE");
    println!("{}", "-".repeat(28));
    for room in rooms {
        println!(
            "{:<8} {:<8} {:>10}",
            room.number,
            room.room_type.to_string(),
            format_cents(room.nightly_rate)
        );
    }
}

/// Read the next line from stdin. `None` means the input stream is closed.
fn next_line(lines: &mut Lines<'_>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.context("Failed to read input")?)),
        None => Ok(None),
    }
}

fn prompt(lines: &mut Lines<'_>, label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().context("Failed to flush stdout")?;
    let line = next_line(lines)?.context("Input stream closed")?;
    Ok(line.trim().to_string())
}

fn prompt_number<T: FromStr>(lines: &mut Lines<'_>, label: &str) -> Result<T> {
    let raw = prompt(lines, label)?;
    raw.parse()
        .map_err(|_| anyhow::anyhow!("Invalid number: '{}'", raw))
}
