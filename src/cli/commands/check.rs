use anyhow::{Result, bail};
use clap::Args;

use crate::cli::Output;
use crate::cpf::{self, Cpf};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// CPF numbers, masked (529.982.247-25) or bare (52998224725)
    #[arg(required = true, value_name = "CPF")]
    pub numbers: Vec<String>,
}

pub fn execute(args: CheckArgs, output: &Output) -> Result<()> {
    let mut invalid = 0usize;

    for number in &args.numbers {
        if cpf::validate(number) {
            let message = Cpf::parse(number)
                .map(|c| format!("valid ({c})"))
                .unwrap_or_else(|| "valid".to_string());
            output.verdict(number, &message, true);
        } else {
            invalid += 1;
            output.verdict(number, "invalid", false);
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} CPF number(s) are invalid", args.numbers.len());
    }
    Ok(())
}
