//! Entry menu.

use std::io;

use crate::ui;

use super::Route;

/// Shows the main menu and returns the chosen route.
pub fn run() -> io::Result<Route> {
    loop {
        ui::heading("MediDesk");
        println!("1) Sign in");
        println!("2) Patients");
        println!("3) To-do notes");
        println!("4) Quit");

        match ui::prompt("Choice: ")?.as_str() {
            "1" => return Ok(Route::Login),
            "2" => return Ok(Route::Patients),
            "3" => return Ok(Route::Todo),
            "4" | "q" => return Ok(Route::Exit),
            _ => println!("Pick one of the listed numbers."),
        }
    }
}
