// One error type for the whole app.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Config(String),       // HeartConfig values that can't produce an animation
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Updating the window buffer failed
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(s) => write!(f, "Config error: {s}"),
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
