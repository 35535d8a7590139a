use rand_chacha::{
    rand_core::{CryptoRng, RngCore, SeedableRng},
    ChaChaRng,
};

fn fixed_seed_rng() -> ChaChaRng {
    // arbitrary seed
    let seed = [
        7, 0, 0, 0, 41, 0, 0, 0, 113, 2, 0, 0, 9, 77, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];
    ChaChaRng::from_seed(seed)
}

/// Should be used only for tests and benchmarks, never for a real trusted setup.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> impl RngCore + CryptoRng {
    fixed_seed_rng()
}

/// Should be used only for tests and benchmarks, never for a real trusted setup.
///
/// Setting `DETERMINISTIC_TEST_RNG=1` makes every call return the same stream.
#[cfg(feature = "std")]
pub fn test_rng() -> impl RngCore + CryptoRng {
    let is_deterministic =
        std::env::vars().any(|(key, val)| key == "DETERMINISTIC_TEST_RNG" && val == "1");
    if is_deterministic {
        fixed_seed_rng()
    } else {
        ChaChaRng::from_entropy()
    }
}
