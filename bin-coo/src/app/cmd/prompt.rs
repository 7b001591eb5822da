use std::io::{BufRead, Write};
use coo_matrix::io::save;
use coo_matrix::MatTrait;
use crate::app::err::*;
use crate::app::utils::*;

pub fn dispatch(_args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut app = App::new(stdin.lock(), stdout.lock());
    app.run()
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App<I, O>
where I: BufRead, O: Write {
    input: I,
    output: O,
}

impl<I, O> App<I, O>
where I: BufRead, O: Write {
    pub fn new(input: I, output: O) -> Self { 
        App { input, output }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let first = self.ask("Enter the path of the first matrix file: ")?;
        self.banner("Processing file")?;
        let a = load_mat(&first)?;
        self.banner("Completed")?;

        let second = self.ask("Enter the path of the second matrix file: ")?;
        let b = if first == second { 
            a.clone()
        } else { 
            self.banner("Processing file")?;
            load_mat(&second)?
        };
        self.banner("Completed")?;

        let output = self.ask("Enter the path for the output file: ")?;
        ensure!(!output.is_empty(), "output path is empty.");

        self.say("Which operation would you like to do:")?;
        self.say("1. Add")?;
        self.say("2. Subtract")?;
        self.say("3. Multiply")?;
        let choice = self.ask("Enter your choice: ")?;

        self.banner("Performing operation")?;

        let Some(op) = Op::from_choice(&choice) else { 
            return Ok("Not a valid operation.".to_string())
        };

        let c = op.apply(&a, &b)?;
        save(&c, &output)?;

        let (m, n) = c.shape();
        Ok(format!("{m}x{n} matrix with {} entries written to {output}", c.nnz()))
    }

    fn ask(&mut self, msg: &str) -> Result<String, Box<dyn std::error::Error>> { 
        write!(self.output, "{msg}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 { 
            return err!("unexpected end of input.")
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, msg: &str) -> Result<(), Box<dyn std::error::Error>> { 
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    fn banner(&mut self, label: &str) -> Result<(), Box<dyn std::error::Error>> { 
        let line = "-".repeat(20);
        self.say(&format!("{line} {label} {line}"))
    }
}
