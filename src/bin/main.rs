use std::io;
use std::process;

use clap::{App, AppSettings};
use tracing_subscriber::EnvFilter;

mod codec;
mod files;
mod fst;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let matches = App::new("rustomata-fst")
        .version("0.1")
        .about("Canonical forms, omega-word pruning, label pairing and derivatives of weighted transducers")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(fst::get_sub_command())
        .subcommand(codec::get_sub_command())
        .get_matches();

    let result = match matches.subcommand() {
        ("fst", Some(fst_matches)) => fst::handle_sub_matches(fst_matches),
        ("codec", Some(codec_matches)) => codec::handle_sub_matches(codec_matches),
        _ => Ok(()),
    };

    if let Err(err) = result {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}
