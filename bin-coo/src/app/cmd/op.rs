use log::info;
use coo_matrix::MatTrait;
use crate::app::utils::*;

pub fn dispatch(op: Op, args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let (a, b) = load_pair(&args.first, &args.second)?;

    info!("{op}: {:?} ({} entries), {:?} ({} entries)", a.shape(), a.nnz(), b.shape(), b.nnz());

    let c = op.apply(&a, &b)?;
    emit(&c, args.output.as_deref(), args.json)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    /// Path of the first matrix file.
    pub first: String,

    /// Path of the second matrix file.
    pub second: String,

    /// Write the result here instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(long)]
    pub json: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
