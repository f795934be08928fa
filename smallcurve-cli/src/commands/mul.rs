use clap::Parser;
use eyre::{Result, ensure};
use smallcurve::Curve;

use super::PointArgs;

#[derive(Parser)]
#[command(name = "mul", about = "Scalar multiplication [n]P")]
pub struct MulCmd {
    #[clap(allow_negative_numbers = true, help = "Scalar multiplier (may be negative)")]
    n: i64,

    #[command(flatten)]
    point: PointArgs,
}

impl MulCmd {
    pub fn run(&self, curve: &Curve) -> Result<()> {
        let p = self.point.point(curve)?;

        let affine = curve.mul(&p, self.n);
        let projective = curve.mul_projective(&p, self.n);
        tracing::debug!(%affine, %projective, "affine and projective results");

        ensure!(
            affine == projective,
            "affine ({affine}) and projective ({projective}) results disagree"
        );

        println!("[{}]{p} = {affine}", self.n);
        Ok(())
    }
}
