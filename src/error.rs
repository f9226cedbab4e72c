// A tiny error type for the window and shading layers.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Pushing the framebuffer to the window failed
    BackendInit(String),  // Building the shading backend (thread pool) failed
    Render(String),       // A frame could not be shaded (bad target size, ...)
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::BackendInit(s) => write!(f, "Backend init error: {s}"),
            Error::Render(s) => write!(f, "Render error: {s}"),
        }
    }
}

// Lets `anyhow` wrap us at the binary boundary.
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_subsystem() {
        let e = Error::Render("target is 0x0".into());
        assert_eq!(e.to_string(), "Render error: target is 0x0");
        let e = Error::WindowInit("no display".into());
        assert!(e.to_string().starts_with("Window init error"));
    }
}
