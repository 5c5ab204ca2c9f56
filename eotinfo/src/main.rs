//! Print the contents of an EOT header.
//!
//! Reads the named EOT file (standard input when no path is given) and
//! writes a fixed-format report of its header fields to standard output.

use std::io::Read;

use eot::{header::EotHeader, info, FontData, FontRead};

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(|e| Error(e.to_string()))?;
    let bytes = match &args.input {
        Some(path) => {
            std::fs::read(path).map_err(|e| Error(format!("{}: {e}", path.display())))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| Error(format!("<stdin>: {e}")))?;
            buf
        }
    };
    let header = EotHeader::read(FontData::new(&bytes))
        .map_err(|e| Error(format!("Unrecognized EOT header: {e}")))?;

    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    info::write_report(&header, &mut locked).map_err(|e| Error(e.to_string()))
}

#[derive(Clone)]
struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// main reports errors with Debug; keep it as readable as Display
impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Display the information in an EOT file in a readable way
        cmd args {
            optional input: PathBuf
        }
    }
}
