//! Interactive screens of the client.
//!
//! Each screen owns one loop: it renders, reads a choice, talks to the
//! registry when needed, and hands back the route to show next.

pub mod home;
pub mod login;
pub mod patients;
pub mod todo;

/// Where the main loop goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Patients,
    Todo,
    Exit,
}
