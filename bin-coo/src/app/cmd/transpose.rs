use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let a = load_mat(&args.input)?;
    let t = a.transpose();
    emit(&t, args.output.as_deref(), args.json)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub input: String,

    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long)]
    pub json: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
