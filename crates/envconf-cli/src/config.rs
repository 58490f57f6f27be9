use clap::{Parser, Subcommand, ValueEnum};
use envconf_std::env::ReadEnv;

const ENV_PREFIX: &str = "ENVCONF_PREFIX";

#[derive(Parser, Debug)]
#[command(name = "envconf")]
#[command(about = "Read environment variables through envconf key normalization", long_about = None)]
pub struct Args {
    /// Prefix prepended to every key. Falls back to ENVCONF_PREFIX.
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the variable name a key resolves to
    Key { raw: String },
    /// Print a variable's value in canonical form
    Get {
        key: String,
        #[arg(long = "type", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
        /// Fail with a diagnostic instead of a bare exit status
        #[arg(long)]
        required: bool,
    },
    /// Print every variable under the prefix as NAME=value
    List,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Bool,
    Duration,
    #[value(name = "float64")]
    Float64,
    Int,
    #[value(name = "int64")]
    Int64,
    Uint,
    #[value(name = "uint64")]
    Uint64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prefix: String,
    pub command: Command,
}

pub fn from_env_with_provider<E: ReadEnv>(env_provider: &E) -> Config {
    from_args(Args::parse(), env_provider)
}

pub fn from_args<E: ReadEnv>(args: Args, env_provider: &E) -> Config {
    let prefix = args
        .prefix
        .or_else(|| env_provider.var(ENV_PREFIX).ok())
        .unwrap_or_default();

    Config {
        prefix,
        command: args.command,
    }
}
