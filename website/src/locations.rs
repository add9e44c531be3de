use std::io::BufRead;

use docroute::{Location, LocationProvider};
use log::warn;

/// Reads one location per line, e.g. `#/reference/contribute#section2`. Blank lines and lines that are not UTF-8 are skipped.
pub struct StdinLocations<R> {
    input: R,
}

impl<R: BufRead> StdinLocations<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LocationProvider for StdinLocations<R> {
    fn next_location(&mut self) -> Option<Location> {
        let mut bytes = Vec::new();
        loop {
            bytes.clear();
            match self.input.read_until(b'\n', &mut bytes) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(err) => {
                    warn!(target: "locations", "stopped reading locations: {}", err);
                    return None;
                }
            }

            let Ok(line) = std::str::from_utf8(&bytes) else {
                warn!(target: "locations", "skipped a location that is not valid UTF-8");
                continue;
            };

            if !line.trim().is_empty() {
                return Some(Location::parse(line));
            }
        }
    }
}
