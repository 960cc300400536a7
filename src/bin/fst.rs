use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use rustomata_fst::fst::{connect, properties};
use rustomata_fst::{canonize, derivative, omega_words, Label};

use crate::files::{input_arg, read_fst};

pub fn get_sub_command() -> App<'static, 'static> {
    SubCommand::with_name("fst")
        .about("transformations of a single automaton")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("canonize")
                .about("sorts arcs by input label and numbers states in depth-first order")
                .arg(input_arg(1)),
        )
        .subcommand(
            SubCommand::with_name("omega")
                .about("removes all states that admit no infinite word")
                .arg(input_arg(1)),
        )
        .subcommand(
            SubCommand::with_name("connect")
                .about("removes all states that are not accessible or not co-accessible")
                .arg(input_arg(1)),
        )
        .subcommand(
            SubCommand::with_name("derive")
                .about("moves the start state along the first arc with the given labels")
                .arg(
                    Arg::with_name("ilabel")
                        .help("input label")
                        .index(1)
                        .required(true),
                )
                .arg(
                    Arg::with_name("olabel")
                        .help("output label")
                        .index(2)
                        .required(true),
                )
                .arg(input_arg(3)),
        )
        .subcommand(
            SubCommand::with_name("info")
                .about("prints sizes and structural properties")
                .arg(input_arg(1)),
        )
        .subcommand(
            SubCommand::with_name("print")
                .about("prints the automaton")
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .help("print as JSON instead of the AT&T format"),
                )
                .arg(input_arg(1)),
        )
}

pub fn handle_sub_matches(fst_matches: &ArgMatches) -> Result<()> {
    match fst_matches.subcommand() {
        ("canonize", Some(matches)) => {
            let mut fst = read_fst(matches)?;
            canonize(&mut fst)?;
            print!("{}", fst);
        }
        ("omega", Some(matches)) => {
            let mut fst = read_fst(matches)?;
            omega_words(&mut fst)?;
            print!("{}", fst);
        }
        ("connect", Some(matches)) => {
            let mut fst = read_fst(matches)?;
            connect(&mut fst)?;
            print!("{}", fst);
        }
        ("derive", Some(matches)) => {
            let ilabel = parse_label(matches, "ilabel")?;
            let olabel = parse_label(matches, "olabel")?;
            let fst = read_fst(matches)?;
            print!("{}", derivative(&fst, ilabel, olabel));
        }
        ("info", Some(matches)) => {
            let fst = read_fst(matches)?;
            let arcs: usize = fst.states().map(|s| fst.num_arcs(s)).sum();
            println!("{:<24}{}", "states", fst.num_states());
            println!("{:<24}{}", "arcs", arcs);
            match fst.start() {
                Some(start) => println!("{:<24}{}", "start", start),
                None => println!("{:<24}none", "start"),
            }
            print!("{}", properties(&fst));
        }
        ("print", Some(matches)) => {
            let fst = read_fst(matches)?;
            if matches.is_present("json") {
                println!("{}", serde_json::to_string_pretty(&fst)?);
            } else {
                print!("{}", fst);
            }
        }
        _ => (),
    }
    Ok(())
}

fn parse_label(matches: &ArgMatches, name: &str) -> Result<Label> {
    let value = matches.value_of(name).unwrap_or_default();
    value
        .parse()
        .with_context(|| format!("{} `{}` is not a label", name, value))
}
