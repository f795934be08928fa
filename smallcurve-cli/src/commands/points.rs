use clap::Parser;
use eyre::Result;
use smallcurve::Curve;

#[derive(Parser)]
#[command(name = "points", about = "List every point on the curve")]
pub struct PointsCmd {}

impl PointsCmd {
    pub fn run(&self, curve: &Curve) -> Result<()> {
        if curve.modulus() > 10_000 {
            tracing::warn!(modulus = curve.modulus(), "enumeration is quadratic in the modulus");
        }

        let mut count = 1;
        for point in curve.points() {
            println!("{point}");
            count += 1;
        }

        println!("Infinity");
        println!("order: {count}");
        Ok(())
    }
}
