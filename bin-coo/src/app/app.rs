use log::info;
use clap::{Parser, Subcommand};

use super::cmd::{op, prompt, show, transpose};
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// Add two matrices.
    Add(op::Args),
    /// Subtract the second matrix from the first.
    Sub(op::Args),
    /// Multiply two matrices.
    Mul(op::Args),
    Transpose(transpose::Args),
    Show(show::Args),
    /// Ask for the input files and the operation interactively.
    Prompt(prompt::Args),
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        use log::LevelFilter::*;
        let level = match &self.command { 
            Cmd::Add(args) | 
            Cmd::Sub(args) | 
            Cmd::Mul(args)       => args.log,
            Cmd::Transpose(args) => args.log,
            Cmd::Show(args)      => args.log,
            Cmd::Prompt(args)    => args.log,
        };
        match level {
            1 => Info,
            2 => Debug,
            3 => Trace,
            _ => Off,
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> { 
        self.init_logger();

        info!("args: {:?}", self.args);
        info!("int-type: {}", std::any::type_name::<Int>());

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        if let Err(e) = coo_matrix::util::log::init_simple_logger(l) { 
            eprintln!("failed to init logger: {e}");
        }
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> { 
        guard_panic(||
            match &self.args.command { 
                Cmd::Add(args)       => op::dispatch(Op::Add, args),
                Cmd::Sub(args)       => op::dispatch(Op::Sub, args),
                Cmd::Mul(args)       => op::dispatch(Op::Mul, args),
                Cmd::Transpose(args) => transpose::dispatch(args),
                Cmd::Show(args)      => show::dispatch(args),
                Cmd::Prompt(args)    => prompt::dispatch(args),
            }
        )
    }
}

#[cfg(test)]
mod tests { 
    use clap::CommandFactory;
    use super::*;

    #[test]
    fn verify_cli() { 
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parse_args() { 
        let args = CliArgs::parse_from(["coo", "mul", "a.txt", "b.txt", "-o", "c.txt", "--log", "2"]);
        assert!(matches!(&args.command, Cmd::Mul(a) if a.first == "a.txt" && a.second == "b.txt"));
        assert_eq!(args.log_level(), log::LevelFilter::Debug);

        let args = CliArgs::parse_from(["coo", "show", "a.txt"]);
        assert_eq!(args.log_level(), log::LevelFilter::Off);
    }
}
