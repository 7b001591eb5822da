use coo_matrix::MatTrait;
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let a = load_mat(&args.input)?;
    let mut res = a.dump();

    if args.stats { 
        res.push_str(&format!("\nnnz: {}, density: {:.4}", a.nnz(), a.density()));
        if a.is_square() { 
            res.push_str(", square");
        }
    }

    Ok(res)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub input: String,

    /// Also print the number of entries and the density.
    #[arg(short, long)]
    pub stats: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}
