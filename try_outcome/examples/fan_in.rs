//! Example fanning work out to threads and collecting the outcomes.
//!
//! Each worker stores its result as a `Try` and sends it back; the main
//! thread unwraps the group in one call and reports the first failure.

use std::io::{self, Write};
use std::thread;

use try_outcome::{Failure, Try, make_try_with, make_try_with_catching, unwrap_try_tuple};

fn parse_dimension(raw: &'static str) -> thread::JoinHandle<Try<u32>> {
    thread::spawn(move || make_try_with(|| raw.parse::<u32>()))
}

fn join(handle: thread::JoinHandle<Try<u32>>) -> Try<u32> {
    handle.join().unwrap_or_else(|payload| Try::from_failure(Failure::from_panic(payload)))
}

fn main() -> Result<(), Failure> {
    let width = join(parse_dimension("80"));
    let height = join(parse_dimension("24"));
    let depth = join(parse_dimension("deep"));

    let mut stdout = io::stdout().lock();
    let (w, h) = unwrap_try_tuple((&width, &height))?;
    writeln!(stdout, "area: {}", w * h).map_err(Failure::new)?;

    match unwrap_try_tuple((width, height, depth)) {
        Ok((w, h, d)) => writeln!(stdout, "volume: {}", w * h * d),
        Err(failure) => writeln!(stdout, "volume unavailable: {failure}"),
    }
    .map_err(Failure::new)?;

    let samples: Vec<u32> = Vec::new();
    let count = u32::try_from(samples.len()).map_err(Failure::new)?;
    match samples.iter().sum::<u32>().checked_div(count) {
        Some(average) => writeln!(stdout, "average: {average}"),
        None => writeln!(stdout, "average unavailable: no samples"),
    }
    .map_err(Failure::new)?;

    let guarded = make_try_with_catching(|| -> Result<u32, Failure> {
        panic!("calibration worker stopped")
    });
    if let Some(failure) = guarded.failure() {
        writeln!(stdout, "calibration unavailable: {failure}").map_err(Failure::new)?;
    }
    Ok(())
}
