//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use conf_tree::Format;

/// conf - Query values from JSON and YAML configuration files
#[derive(Parser, Debug)]
#[command(name = "conf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Source format, overriding detection from the file extension
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print the value stored under a dotted key
    ///
    /// Examples:
    ///   conf get app.yaml db.host
    ///   conf get app.json db.port --type int
    ///   conf get app.json db.timeout --type int --default 30
    Get {
        /// Configuration file
        file: PathBuf,

        /// Dotted key, e.g. `db.credentials.user`
        key: String,

        /// Require the value to have this type
        #[arg(short, long, value_enum, default_value_t = ValueType::Any)]
        r#type: ValueType,

        /// Value printed when the key is unset or has another type
        #[arg(short, long)]
        default: Option<String>,
    },

    /// List the entries of a list or map value
    List {
        /// Configuration file
        file: PathBuf,

        /// Dotted key; the whole file when omitted
        key: Option<String>,
    },

    /// Print the number of elements in a list value
    Count {
        /// Configuration file
        file: PathBuf,

        /// Dotted key
        key: String,
    },
}

/// Value types accepted by `conf get --type`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Any,
    Int,
    Float,
    String,
    Bool,
}

/// Source formats accepted by `--format`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    #[value(alias = "yml")]
    Yaml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Format::Json,
            FormatArg::Yaml => Format::Yaml,
        }
    }
}
