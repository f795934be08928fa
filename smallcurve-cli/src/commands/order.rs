use clap::Parser;
use eyre::Result;
use smallcurve::Curve;

use super::PointArgs;

#[derive(Parser)]
#[command(name = "order", about = "Order of P in the curve group")]
pub struct OrderCmd {
    #[command(flatten)]
    point: PointArgs,
}

impl OrderCmd {
    pub fn run(&self, curve: &Curve) -> Result<()> {
        let p = self.point.point(curve)?;
        let order = curve.point_order(&p)?;
        tracing::info!(%p, order, "computed point order");

        println!("order of {p}: {order}");
        Ok(())
    }
}
