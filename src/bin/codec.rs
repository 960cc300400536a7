use std::rc::Rc;

use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use rustomata_fst::{
    acceptor_to_transducer, acceptor_to_transducer_with_symbols, transducer_to_acceptor,
    transducer_to_acceptor_with_symbols,
};

use crate::files::{input_arg, read_fst, read_symbols, write_symbols};

fn file_arg(name: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name)
        .long(name)
        .takes_value(true)
        .value_name("FILE")
        .help(help)
}

pub fn get_sub_command() -> App<'static, 'static> {
    SubCommand::with_name("codec")
        .about("re-encoding of transducers as acceptors with the Cantor pairing function")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("encode")
                .about("pairs input and output label of every arc")
                .arg(file_arg("isymbols", "input symbol table").requires("osymbols"))
                .arg(file_arg("osymbols", "output symbol table").requires("isymbols"))
                .arg(
                    file_arg("save-symbols", "where to write the combined symbol table")
                        .requires("isymbols"),
                )
                .arg(input_arg(1)),
        )
        .subcommand(
            SubCommand::with_name("decode")
                .about("splits the label of every arc into input and output label")
                .arg(file_arg("symbols", "combined symbol table"))
                .arg(
                    file_arg("save-isymbols", "where to write the input symbol table")
                        .requires("symbols"),
                )
                .arg(
                    file_arg("save-osymbols", "where to write the output symbol table")
                        .requires("symbols"),
                )
                .arg(input_arg(1)),
        )
}

pub fn handle_sub_matches(codec_matches: &ArgMatches) -> Result<()> {
    match codec_matches.subcommand() {
        ("encode", Some(matches)) => {
            let mut fst = read_fst(matches)?;
            match (matches.value_of("isymbols"), matches.value_of("osymbols")) {
                (Some(isymbols), Some(osymbols)) => {
                    fst.set_input_symbols(Some(Rc::new(read_symbols(isymbols)?)));
                    fst.set_output_symbols(Some(Rc::new(read_symbols(osymbols)?)));
                    transducer_to_acceptor_with_symbols(&mut fst)?;
                    if let Some(path) = matches.value_of("save-symbols") {
                        write_symbols(path, fst.input_symbols())?;
                    }
                }
                _ => transducer_to_acceptor(&mut fst)?,
            }
            print!("{}", fst);
        }
        ("decode", Some(matches)) => {
            let mut fst = read_fst(matches)?;
            match matches.value_of("symbols") {
                Some(symbols) => {
                    fst.set_input_symbols(Some(Rc::new(read_symbols(symbols)?)));
                    acceptor_to_transducer_with_symbols(&mut fst)?;
                    if let Some(path) = matches.value_of("save-isymbols") {
                        write_symbols(path, fst.input_symbols())?;
                    }
                    if let Some(path) = matches.value_of("save-osymbols") {
                        write_symbols(path, fst.output_symbols())?;
                    }
                }
                None => acceptor_to_transducer(&mut fst),
            }
            print!("{}", fst);
        }
        _ => (),
    }
    Ok(())
}
