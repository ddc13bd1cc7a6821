//! Walk an Akima curve through a sine table in both directions, then trace a
//! cubic Bézier.

use std::error::Error;

use curvekit::{akima, bezier};

fn main() -> Result<(), Box<dyn Error>> {
    let points: Vec<[f64; 2]> = (0..=12_i32)
        .map(|i| {
            let x = f64::from(i) * std::f64::consts::FRAC_PI_6;
            [x, x.sin()]
        })
        .collect();

    // Forward: start at the first interval and chain to the right.
    let mut interval = akima::first(&points)?;
    loop {
        let mid = (interval.x1() + interval.x2()) / 2.0;
        println!(
            "[{:.3}, {:.3}] f({mid:.3}) = {:+.5}  sin = {:+.5}",
            interval.x1(),
            interval.x2(),
            interval.point_at(mid),
            mid.sin()
        );
        match interval.next(&points) {
            Some(next) => interval = next,
            None => break,
        }
    }

    // Backward: the same chain from the right end.
    let mut interval = akima::last(&points)?;
    let mut steps = 1;
    while let Some(prev) = interval.prev(&points) {
        interval = prev;
        steps += 1;
    }
    assert_eq!(steps, points.len() - 1);
    println!("walked {steps} intervals back to x = {}", interval.x1());

    let control = [[0.0, 0.0], [1.0, 2.0], [3.0, 2.0], [4.0, 0.0]];
    for point in bezier::samples(&control, 5) {
        println!("bezier {:?}", point.as_slice());
    }

    Ok(())
}
