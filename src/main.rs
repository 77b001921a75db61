use std::{fs, process};

use clap::Parser;
use flux::{Error, Locals, Registry};

/// flux evaluates numeric expressions from the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells flux to read expressions from a file, one per line.
    ///
    /// Blank lines and lines starting with `;` are skipped.
    #[arg(short, long)]
    file: bool,

    /// Binds a local variable, as `NAME=VALUE`. May be repeated.
    #[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = parse_define)]
    defines: Vec<(String, f64)>,

    /// Starts from an empty registry instead of the builtin functions and
    /// constants.
    #[arg(long)]
    no_builtins: bool,

    /// Prints the tokens of each expression instead of evaluating it.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Prints the parsed tree of each expression instead of evaluating it.
    #[arg(long)]
    ast: bool,

    /// An expression, or a path when `--file` is given.
    contents: String,
}

fn parse_define(definition: &str) -> Result<(String, f64), String> {
    let (name, value) = definition.split_once('=')
                                  .ok_or_else(|| format!("expected NAME=VALUE, got `{definition}`"))?;
    let value = value.trim()
                     .parse()
                     .map_err(|_| format!("`{}` is not a number", value.trim()))?;
    Ok((name.trim().to_string(), value))
}

fn run(args: &Args, source: &str, registry: &Registry, locals: &Locals) -> Result<(), Error> {
    if args.tokens {
        for token in flux::tokenize(source)? {
            println!("{:?} {:?} @{}", token.kind, token.text, token.position);
        }
    } else if args.ast {
        println!("{}", flux::parse(source)?);
    } else {
        println!("{}", flux::evaluate(source, locals, registry)?);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let registry = if args.no_builtins {
        Registry::new()
    } else {
        Registry::with_builtins()
    };
    let locals: Locals = args.defines.iter().cloned().collect();

    let sources: Vec<&str> = if args.file {
        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with(';'))
              .collect()
    } else {
        vec![script.as_str()]
    };

    for source in sources {
        if let Err(e) = run(&args, source, &registry, &locals) {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
