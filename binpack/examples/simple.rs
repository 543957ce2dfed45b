use binpack::{random_rect, Pack, Vec2};
use rand::{rngs::SmallRng, SeedableRng};

fn main() {
    env_logger::init();

    let mut rng = SmallRng::seed_from_u64(5);
    let mut pack = Pack::new();

    for _ in 0..12 {
        pack.push(random_rect(&mut rng, 8, 64));
    }

    pack.sort();
    pack.pack(Vec2::new(256.0, 256.0));

    println!("Packed into {} bins", pack.bins().len());
    println!("Dimensions: {:?}", pack.dimensions());

    for placed in pack.output() {
        println!("{:>3}: {:?}", placed.index, placed.rect);
    }
}
