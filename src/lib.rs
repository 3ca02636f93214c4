//! Guard patrol simulation over a rectangular map.
//!
//! A single guard walks straight until the cell ahead is obstructed, turns 90°
//! clockwise in place, and repeats until she leaves the map or revisits an
//! exact (position, heading) state, which proves an infinite loop. The crate
//! answers two questions about a map: how many distinct cells the guard visits
//! before leaving, and how many single-cell obstruction placements would trap
//! her in a loop forever.

pub use {
    self::{direction::*, grid::*, search::*, sim::*},
    clap::Parser,
};

use {
    memmap::Mmap,
    std::{
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, Utf8Error},
    },
};

mod direction;
mod grid;
mod search;
mod sim;

/// Arguments for program execution
#[derive(Parser)]
pub struct Args {
    /// Input file path
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// Print the guard's route painted over the map, in addition to the counts
    #[arg(short, long, default_value_t)]
    pub verbose: bool,
}

impl Args {
    /// Returns the input file path, or a provided default if the field is empty
    pub fn input_file_path<'a>(&'a self, default: &'a str) -> &'a str {
        if self.input_file_path.is_empty() {
            default
        } else {
            &self.input_file_path
        }
    }
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes a `&str`
/// over the file contents to a provided callback function
///
/// # Errors
///
/// Returns an `Err`-wrapped `std::io::Error` if the file can't be opened or
/// mapped, or if its contents aren't valid UTF-8. `f` only runs if no error is
/// encountered.
///
/// # Safety
///
/// This uses `Mmap::map`, which is unsafe: there is no guarantee an external
/// process won't modify the file while this function refers to it as an
/// immutable string slice.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}
