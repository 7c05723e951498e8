use std::env;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// Concatenates the named files to standard output, or copies standard input
/// when no paths are given. Arguments are processed strictly left to right;
/// the first failure stops processing. Nothing is treated as a flag, so a
/// path may begin with `-` (including `-` itself, which names a literal
/// file).
fn main() {
    let args: Vec<_> = env::args_os().skip(1).collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.is_empty() {
        if let Err(e) = fcat::cat_stdin(&mut out) {
            fail("standard input", &e);
        }
    } else {
        for arg in &args {
            let path = Path::new(arg);
            if let Err(e) = fcat::cat_file(path, &mut out) {
                fail(path.display(), &e);
            }
        }
    }

    if let Err(e) = out.flush() {
        fail("standard output", &e);
    }
}

/// Writes a single diagnostic line to standard error and exits with status 1.
fn fail<S>(subject: S, e: &io::Error) -> ! where S: fmt::Display {
    eprintln!("fcat: {}: {}", subject, e);
    process::exit(1);
}
