// llgen: recursive-descent parser generator

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

/// Generate a recursive-descent parser from a grammar file
#[derive(Parser, Debug)]
#[command(name = "llgen", version)]
#[command(about = "Generate a recursive-descent parser from a grammar file", long_about = None)]
struct Args {
    /// Grammar file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the parsed grammar tree instead of generating code
    #[arg(long)]
    tree: bool,

    /// Write the generated parser to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", args.file.display(), e);
            std::process::exit(1);
        }
    };
    info!("read {} ({} bytes)", args.file.display(), source.len());

    if args.tree {
        let grammar = llgen::parse_source(&source).unwrap_or_else(|e| fail(&e));
        println!("{:#?}", grammar);
        return Ok(());
    }

    let module = llgen::compile(&source).unwrap_or_else(|e| fail(&e));

    match &args.output {
        Some(path) => {
            fs::write(path, module.render())?;
            info!("wrote {}", path.display());
        }
        None => print!("{}", module),
    }

    Ok(())
}

fn fail(err: &llgen::Error) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}
