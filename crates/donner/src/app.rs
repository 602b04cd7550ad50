use clap::{Arg, ArgAction, Command};

fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .help("Only run commands that are listed in the config")
        .action(ArgAction::SetTrue)
}

fn fallback_arg() -> Arg {
    Arg::new("fallback")
        .long("fallback")
        .help("Run commands missing from the config directly on the host")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("donner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run short commands inside docker and docker-compose containers")
        .long_about("donner reads .donner.yml from the current directory, where commands are mapped to strategies. A strategy wraps the command in docker or docker-compose, so 'donner run rails s' becomes 'docker-compose run app rails s'.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Path to the config file (default: $DONNER_CONFIG or ./.donner.yml)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run a command through its configured strategy")
                .arg(strict_arg())
                .arg(fallback_arg())
                .arg(
                    Arg::new("command")
                        .help("Command to run, followed by its arguments")
                        .required(true)
                        .num_args(1..)
                        .trailing_var_arg(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("aliases")
                .about("Print shell aliases for every configured command")
                .arg(strict_arg())
                .arg(fallback_arg())
        )
}
