use clap::Parser;
use eyre::Result;
use smallcurve::{Curve, FieldElement};

#[derive(Parser)]
#[command(name = "div", about = "Modular division x / y in the base field")]
pub struct DivCmd {
    #[clap(allow_negative_numbers = true, help = "Dividend")]
    x: i64,

    #[clap(allow_negative_numbers = true, help = "Divisor")]
    y: i64,
}

impl DivCmd {
    pub fn run(&self, curve: &Curve) -> Result<()> {
        let p = curve.modulus();
        let quotient = FieldElement::new(self.x, p).div(&FieldElement::new(self.y, p))?;

        println!("{} / {} = {quotient} (mod {p})", self.x, self.y);
        Ok(())
    }
}
