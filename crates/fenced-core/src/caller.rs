//! Recover the enclosing function of a [`Location`](std::panic::Location)
//! from a backtrace.
//!
//! Method-style accessors know where they were called from, through
//! `#[track_caller]`, but not which function that was. On the fatal path
//! (and only there) a backtrace is captured and the frame whose source
//! position matches the access site names the function. Without debug
//! symbols nothing matches and the caller stays unknown.

use std::backtrace::{Backtrace, BacktraceStatus};

/// Function containing `file:line`, from a freshly captured backtrace.
pub(crate) fn function_at(file: &str, line: u32) -> Option<String> {
    let trace = Backtrace::force_capture();
    if trace.status() != BacktraceStatus::Captured {
        return None;
    }
    function_in_trace(&trace.to_string(), file, line)
}

/// Scan a rendered backtrace for the first symbol located at `file:line`.
///
/// Frames are listed innermost first as a symbol line (`  7: path::to::fn`,
/// or an unnumbered line for an inlined symbol) followed by an optional
/// `at <file>:<line>:<column>` line.
fn function_in_trace(trace: &str, file: &str, line: u32) -> Option<String> {
    let mut symbol: Option<&str> = None;
    for entry in trace.lines().map(str::trim) {
        if let Some(location) = entry.strip_prefix("at ") {
            let Some(name) = symbol.take() else {
                continue;
            };
            if parse_location(location)
                .is_some_and(|(path, at)| at == line && same_source(path, file))
            {
                return Some(clean_symbol(name).to_owned());
            }
        } else if !entry.is_empty() {
            symbol = Some(strip_frame_number(entry));
        }
    }
    None
}

fn strip_frame_number(entry: &str) -> &str {
    match entry.split_once(": ") {
        Some((number, name)) if number.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => entry,
    }
}

/// Split `path:line[:column]` into path and line.
fn parse_location(location: &str) -> Option<(&str, u32)> {
    let (rest, last) = location.rsplit_once(':')?;
    let last: u32 = last.parse().ok()?;
    match rest.rsplit_once(':') {
        Some((path, line)) => match line.parse() {
            Ok(line) => Some((path, line)),
            Err(_) => Some((rest, last)),
        },
        None => Some((rest, last)),
    }
}

/// Whether two spellings name the same source file.
///
/// `file!()` is relative to the workspace root while backtraces print
/// absolute paths or paths relative to the working directory, so one must
/// be a whole-component suffix of the other.
fn same_source(a: &str, b: &str) -> bool {
    let a = normalize(a);
    let b = normalize(b);
    a == b || ends_with_component(&a, &b) || ends_with_component(&b, &a)
}

fn normalize(path: &str) -> String {
    let path = path.replace('\\', "/");
    match path.strip_prefix("./") {
        Some(rest) => rest.to_owned(),
        None => path,
    }
}

fn ends_with_component(long: &str, short: &str) -> bool {
    long.strip_suffix(short)
        .is_some_and(|head| head.ends_with('/'))
}

/// Drop a legacy mangling hash and closure segments.
fn clean_symbol(mut name: &str) -> &str {
    if let Some((head, hash)) = name.rsplit_once("::h") {
        if hash.len() == 16 && hash.bytes().all(|b| b.is_ascii_hexdigit()) {
            name = head;
        }
    }
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}
