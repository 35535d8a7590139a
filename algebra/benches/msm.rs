use ark_std::{rand::SeedableRng, time::Instant};
use quill_algebra::{
    bls12_381::{BLSG1, BLSG2},
    prelude::*,
};
use rand_chacha::ChaChaRng;

fn time_msm<G: Group>(label: &str, count: usize, prng: &mut ChaChaRng) {
    let points: Vec<G> = (0..count).map(|_| G::random(prng)).collect();
    let scalars: Vec<G::ScalarType> = (0..count).map(|_| G::ScalarType::random(prng)).collect();

    let points_ptr = points.iter().collect::<Vec<&G>>();
    let scalars_ptr = scalars.iter().collect::<Vec<&G::ScalarType>>();

    let start = Instant::now();
    let _ = G::multi_exp(&scalars_ptr, &points_ptr);
    let elapsed = start.elapsed();

    println!("{}: {} points", label, count);
    println!("  total time: {} s", elapsed.as_secs_f32());
    println!("  average time: {} us", elapsed.as_micros() / count as u128);
}

fn main() {
    let mut prng = ChaChaRng::from_entropy();

    // query vectors are one element per wire, so small sizes matter most
    for count in [16usize, 256, 4096] {
        time_msm::<BLSG1>("BLS12-381 G1", count, &mut prng);
        time_msm::<BLSG2>("BLS12-381 G2", count, &mut prng);
    }
}
