use clap::Parser;
use eyre::Result;
use smallcurve::Curve;

use super::PointArgs;

#[derive(Parser)]
#[command(name = "sample", about = "Print P and Q = P*3*6 + P for a base point P")]
pub struct SampleCmd {
    #[command(flatten)]
    point: PointArgs,
}

impl SampleCmd {
    pub fn run(&self, curve: &Curve) -> Result<()> {
        let p = self.point.point(curve)?;

        println!("Prime base: {}", curve.modulus());
        println!("Elliptic curve: ({},{})", curve.a(), curve.b());
        println!("P: {p}");

        let s = curve.mul(&p, 3);
        tracing::debug!(%s, "P*3");
        let t = curve.mul(&s, 6);
        tracing::debug!(%t, "P*3*6");
        let q = curve.add(&p, &t);

        println!("Q = P*3*6 + P: {q}");
        Ok(())
    }
}
