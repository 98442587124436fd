use std::{env, fs, process};

use sapling::parse;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: sapling <file>");
        process::exit(64);
    }

    let source = match fs::read_to_string(&args[1]) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: failed to read {}: {}", args[1], err);
            process::exit(66);
        }
    };

    match parse(&source) {
        Ok(program) => println!("{:#?}", program),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
