use clap::Parser;
use patharg::InputArg;
use std::error::Error;
use std::io::Read;
use std::process::exit;
use wasurf::{ExportDesc, ImportDesc, Module};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The module to read. If not provided or is '-', read from
    /// standard input.
    #[arg(default_value_t)]
    pub input: InputArg,

    /// Encode the raw input bytes as a printable string payload
    /// instead of reading them as a module.
    #[arg(long, default_value_t = false)]
    pub encode: bool,

    /// Enable verbose output, including a debug representation of
    /// the decoded module.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut input = cli.input.open().unwrap_or_else(|e| abort(&cli, e));
    let mut binary = Vec::new();
    input
        .read_to_end(&mut binary)
        .unwrap_or_else(|e| abort(&cli, e));

    if cli.encode {
        println!("{}", wasurf::embed::encode(&binary));
        return;
    }

    let module = wasurf::read_module(&binary).unwrap_or_else(|e| abort(&cli, e));
    print_surface(&module);

    if cli.verbose {
        println!("{module:#?}");
    }
}

fn print_surface(module: &Module) {
    println!("version {}", module.version);

    for import in &module.imports {
        let desc = match &import.desc {
            ImportDesc::Func(idx) => format!("func (type {})", idx.0),
            ImportDesc::Table(t) => format!("table {t:?}"),
            ImportDesc::Mem(m) => format!("mem {:?}", m.limits),
            ImportDesc::Global(g) => format!("global {g:?}"),
        };
        println!("import {}.{}: {desc}", import.module, import.name);
    }

    for export in &module.exports {
        let desc = match export.desc {
            ExportDesc::Func(idx) => format!("func {}", idx.0),
            ExportDesc::Table(idx) => format!("table {}", idx.0),
            ExportDesc::Mem(idx) => format!("mem {}", idx.0),
            ExportDesc::Global(idx) => format!("global {}", idx.0),
        };
        println!("export {}: {desc}", export.name);
    }
}

fn abort<T>(cli: &Cli, err: impl Error) -> T {
    eprintln!("ERROR: {err}");

    let mut sources = Vec::new();
    let mut current = err.source();
    while let Some(cause) = current {
        sources.push(cause);
        current = cause.source();
    }
    if !sources.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in sources.iter().enumerate() {
            eprintln!("    {i}: {cause}");
        }
    }

    if cli.verbose {
        eprintln!("\nDEBUG OUTPUT:\n{err:?}");
    }

    exit(1)
}
