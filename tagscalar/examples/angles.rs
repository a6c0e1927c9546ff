//! Degrees and radians as distinct tags over the same `f64`, with the conversion between them written by hand.

use tagscalar::{Scalar, Tag};

#[derive(Tag)]
#[tag(name = "deg")]
pub enum Deg {}

#[derive(Tag)]
#[tag(name = "rad")]
pub enum Rad {}

pub type Degrees = Scalar<Deg>;
pub type Radians = Scalar<Rad>;

fn to_radians(angle: Degrees) -> Radians {
    Radians::new(angle.value().to_radians())
}

fn sin(angle: Radians) -> f64 {
    angle.value().sin()
}

fn main() {
    let mut heading = Degrees::new(30.0);
    heading += Degrees::new(60.0);
    assert_eq!(heading, Degrees::new(90.0));

    // `sin(heading)` would not compile: the argument must be in radians.
    let s = sin(to_radians(heading));
    assert!((s - 1.0).abs() < 1e-12);

    let fraction_of_turn = heading / Degrees::new(360.0);
    assert_eq!(fraction_of_turn, 0.25);

    let compact: Scalar<Deg, f32> = heading.cast();
    println!("{:?} as f32 is {:?}", heading, compact);
}
