/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 *
 * 2025 Tendsin Mende
 */
//! # Pare-cli
//!
//! CLI interface to `parec`

use clap::{Parser, ValueEnum};
use parec::{
    pare_fmt::{FormatConfig, Indentation},
    Mode, Pipeline, PipelineError, Target,
};
use std::{path::PathBuf, process::ExitCode};
use yansi::Paint;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum ModeArg {
    ///Voids no-ops and empty blocks, and reports a handful of textual heuristics.
    Void,
    ///Voids no-ops and echoes the first statement of functions.
    Resonance,
}

impl From<ModeArg> for Mode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Void => Mode::Void,
            ModeArg::Resonance => Mode::Resonance,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pare")]
#[command(version, about, long_about = "Syntactic simplifier for Python sources.")]
struct Args {
    ///The source file that gets simplified.
    #[arg()]
    src_file: PathBuf,

    ///Which transformer variant is used.
    #[arg(long, short, value_enum, default_value_t = ModeArg::Void)]
    mode: ModeArg,

    ///Name of the output file. Defaults to `<name>_<mode>.<ext>` next to the source file.
    #[arg(long, short)]
    output: Option<PathBuf>,

    ///Does not put the manifest in front of the output.
    #[arg(long, default_value_t = false)]
    no_manifest: bool,

    ///Prints the result instead of writing it to a file.
    #[arg(long, default_value_t = false)]
    stdout: bool,

    ///Indents with tabs instead of spaces.
    #[arg(long, default_value_t = false)]
    tabs: bool,

    ///Number of spaces per indentation level.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    indent: u16,

    ///Only prints the parsed syntax tree as an S-expression.
    #[arg(long, default_value_t = false)]
    dump_ast: bool,
}

fn dump_ast(pipeline: &Pipeline, args: &Args) -> ExitCode {
    let file = args.src_file.to_string_lossy().into_owned();
    let source = match std::fs::read_to_string(&args.src_file) {
        Ok(src) => src,
        Err(e) => {
            eprintln!("{}: could not read {file}: {e}", "Error".bold().red());
            return ExitCode::FAILURE;
        }
    };
    match pipeline.parse(&source) {
        Ok(tree) => match serde_lexpr::to_string(&tree) {
            Ok(sexpr) => {
                println!("{sexpr}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}: could not serialize tree: {e}", "Error".bold().red());
                ExitCode::FAILURE
            }
        },
        Err(errors) => {
            for err in errors {
                err.report(&file, &source);
            }
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();

    let indentation = if args.tabs {
        Indentation::Tabs
    } else {
        Indentation::Spaces(usize::from(args.indent))
    };

    //configure parec based on the args and execute
    let mut pipeline = Pipeline::new(args.mode.into())
        .with_format(FormatConfig::default().with_indentation(indentation));
    if args.no_manifest {
        pipeline = pipeline.without_manifest();
    }

    if args.dump_ast {
        return dump_ast(&pipeline, &args);
    }

    if args.stdout {
        pipeline = pipeline.with_target(Target::buffer());
    } else if let Some(output) = &args.output {
        pipeline = pipeline.with_target(Target::file(output));
    }

    match pipeline.execute_on_file(&args.src_file) {
        Ok(synthesized) => {
            match &synthesized.target {
                Target::Buffer(content) => print!("{content}"),
                Target::File(path) => {
                    eprintln!("{}: {}", "Synthesized".bold().green(), path.display());
                }
                Target::Sibling => {}
            }
            let proof = match pipeline.mode {
                Mode::Void => format!("{} changes", synthesized.outcome.record.len()),
                Mode::Resonance => synthesized.outcome.record.resonance_summary(),
            };
            eprintln!("{}: {proof}", "Proof".bold());
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let PipelineError::MissingSource(_) = &err {
                eprintln!("{}: {err}", "Error".bold().red());
            } else {
                err.report(&args.src_file.to_string_lossy());
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::Args;

    #[test]
    fn indent_must_be_positive() {
        assert!(Args::try_parse_from(["pare", "a.py", "--indent", "0"]).is_err());
        let args = Args::try_parse_from(["pare", "a.py", "--indent", "2"]).unwrap();
        assert_eq!(args.indent, 2);
    }
}
