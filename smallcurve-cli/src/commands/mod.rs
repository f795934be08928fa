use clap::Args;
use eyre::Result;
use smallcurve::{AffinePoint, Curve};

mod div;
pub use div::*;

mod mul;
pub use mul::*;

mod order;
pub use order::*;

mod points;
pub use points::*;

mod sample;
pub use sample::*;

/// Curve parameters shared by every subcommand.
#[derive(Args)]
pub struct CurveArgs {
    #[clap(
        short = 'p',
        long,
        global = true,
        env = "SMALLCURVE_MODULUS",
        default_value_t = 7,
        allow_negative_numbers = true,
        help = "Prime field modulus"
    )]
    pub modulus: i64,

    #[clap(
        short = 'a',
        long = "coeff-a",
        global = true,
        env = "SMALLCURVE_A",
        default_value_t = 2,
        allow_negative_numbers = true,
        help = "Curve coefficient a in y^2 = x^3 + ax + b"
    )]
    pub a: i64,

    #[clap(
        short = 'b',
        long = "coeff-b",
        global = true,
        env = "SMALLCURVE_B",
        default_value_t = 1,
        allow_negative_numbers = true,
        help = "Curve coefficient b in y^2 = x^3 + ax + b"
    )]
    pub b: i64,
}

impl CurveArgs {
    pub fn build(&self) -> Result<Curve> {
        Ok(Curve::new(self.a, self.b, self.modulus)?)
    }
}

/// Affine coordinates of a base point.
#[derive(Args)]
pub struct PointArgs {
    #[clap(short, default_value_t = 1, allow_negative_numbers = true, help = "x-coordinate")]
    pub x: i64,

    #[clap(short, default_value_t = 2, allow_negative_numbers = true, help = "y-coordinate")]
    pub y: i64,
}

impl PointArgs {
    pub fn point(&self, curve: &Curve) -> Result<AffinePoint> {
        let point = curve.point(self.x, self.y)?;
        tracing::debug!(%point, "base point");
        Ok(point)
    }
}
