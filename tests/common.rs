#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworkweek::models::{DayInput, WORK_WEEK};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rww() -> Command {
    cargo_bin_cmd!("rworkweek")
}

/// Write a config file in the temp dir (colours off unless `yaml` says otherwise).
pub fn setup_test_config(name: &str, yaml: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkweek.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::write(&cfg_path, format!("color: false\n{yaml}")).expect("write test config");
    cfg_path
}

/// Temp path that does not exist yet.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkweek.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Monday → Friday, blank unless overridden with (start, end, lunch).
pub fn build_week(overrides: &[(&str, (&str, &str, &str))]) -> Vec<DayInput> {
    WORK_WEEK
        .iter()
        .map(|day| {
            match overrides.iter().find(|(d, _)| d == day) {
                Some((_, (start, end, lunch))) => DayInput::new(*day, *start, *end, *lunch),
                None => DayInput::blank(*day),
            }
        })
        .collect()
}

/// Same shift Monday → Thursday, Friday as given.
pub fn four_days_and_friday(
    shift: (&'static str, &'static str, &'static str),
    friday: (&'static str, &'static str, &'static str),
) -> Vec<DayInput> {
    build_week(&[
        ("Monday", shift),
        ("Tuesday", shift),
        ("Wednesday", shift),
        ("Thursday", shift),
        ("Friday", friday),
    ])
}
