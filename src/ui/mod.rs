use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green().bold(), msg);
    }
}

pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "ℹ".blue().bold(), msg);
    }
}

pub fn verbose(msg: &str) {
    if is_verbose() && !is_quiet() {
        println!("{}", msg.dimmed());
    }
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}
