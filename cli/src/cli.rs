//! Command-line arguments and the compile loop.

use crate::summary;
use clap::Parser;
use soma_compiler::{load_config, CompileError, Compiler};
use soma_session::{persist, BuildConfig, MemorySink, SinkError};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "somac", version, about = "Compile species anatomy definitions")]
pub struct Cli {
    /// JSON build config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not validate shapes
    #[arg(long)]
    pub skip_shapes: bool,

    /// Write each template to an in-memory sink after compiling
    #[arg(long)]
    pub persist: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Species definition files
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Errors that stop a somac run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}: {source}", path.display())]
    Compile {
        path: PathBuf,
        #[source]
        source: CompileError,
    },

    #[error("{species}: {source}")]
    Persist {
        species: String,
        #[source]
        source: SinkError,
    },

    #[error(transparent)]
    Config(CompileError),

    #[error("Cannot write output: {0}")]
    Output(#[from] io::Error),
}

impl Cli {
    /// The effective build config: file (if any), then flags.
    pub fn build_config(&self) -> Result<BuildConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_config(path).map_err(CliError::Config)?,
            None => BuildConfig::default(),
        };
        if self.skip_shapes {
            config.validate_shapes = false;
        }
        Ok(config)
    }

    /// Compile every file in order, stopping at the first failure.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let compiler = Compiler::with_config(self.build_config()?);
        let mut sink = MemorySink::new();

        for path in &self.files {
            let template = compiler
                .compile_file(path)
                .map_err(|source| CliError::Compile {
                    path: path.clone(),
                    source,
                })?;
            write!(out, "{}", summary(&template))?;

            if self.persist {
                persist(&mut sink, &template).map_err(|source| CliError::Persist {
                    species: template.name().to_string(),
                    source,
                })?;
            }
        }

        if self.persist {
            info!(nodes = sink.nodes().len(), edges = sink.edges().len(), "sink contents");
            writeln!(
                out,
                "persisted {} nodes, {} edges",
                sink.nodes().len(),
                sink.edges().len()
            )?;
        }
        Ok(())
    }
}
