use clap::{
    crate_authors, crate_description, crate_name, crate_version, App, AppSettings, Arg,
    ArgMatches, SubCommand,
};
use emogi_synth::{dataset::Dataset, pattern::Pattern, ExportMode, Task};
use itertools::Itertools;
use std::{error::Error, process};

fn handle_generate(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let task = Task::parse(
        matches.value_of("output").unwrap(),
        matches.value_of("pattern").unwrap(),
        matches.value_of("n").unwrap(),
        matches.value_of("w").unwrap(),
        matches.value_of("mode").unwrap(),
    )?;
    task.run()?;
    Ok(())
}

fn handle_show(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    for base in matches.values_of("DATASET").unwrap() {
        let dataset = Dataset::open(base, matches.is_present("in-memory"))?;
        println!("{}", dataset);
        if matches.is_present("dense") {
            for row in dataset.dense_adjacency()? {
                println!("{}", row.iter().join(", "));
            }
        }
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("generate")
                .about("Generates a dataset in the .bel format")
                .arg(
                    Arg::with_name("output")
                        .help("Base path of the dataset, without the .bel.* extension")
                        .long("output")
                        .short("o")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::with_name("pattern")
                        .help("Graph pattern to construct")
                        .long("pattern")
                        .takes_value(true)
                        .default_value("linked-list")
                        .possible_values(&Pattern::NAMES),
                )
                .arg(
                    Arg::with_name("n")
                        .help("Number of nodes in the graph")
                        .short("n")
                        .long("n-nodes")
                        .takes_value(true)
                        .default_value("256"),
                )
                .arg(
                    Arg::with_name("w")
                        .help("Width or branching factor of the graph")
                        .short("w")
                        .long("width")
                        .takes_value(true)
                        .default_value("8"),
                )
                .arg(
                    Arg::with_name("mode")
                        .help("Buffers all edges (batch) or writes them as generated (stream)")
                        .long("mode")
                        .takes_value(true)
                        .default_value("stream")
                        .possible_values(&ExportMode::NAMES),
                ),
        )
        .subcommand(
            SubCommand::with_name("show")
                .about("Displays the contents of datasets")
                .arg(
                    Arg::with_name("DATASET")
                        .help("Base path of a dataset (graph or graph.bel)")
                        .required(true)
                        .multiple(true),
                )
                .arg(
                    Arg::with_name("dense")
                        .help("Displays the dense adjacency matrix")
                        .long("dense")
                        .takes_value(false),
                )
                .arg(
                    Arg::with_name("in-memory")
                        .help("Loads the files into memory instead of mapping them")
                        .long("in-memory")
                        .takes_value(false),
                ),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("generate") {
        handle_generate(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("show") {
        handle_show(matches)?;
    }
    Ok(())
}

fn main() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
