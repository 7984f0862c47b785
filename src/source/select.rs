//! Uniform random selection over the provider registry.

use rand::Rng;

use crate::error::{MuralError, Result};

use super::Provider;

/// Pick one provider uniformly at random.
///
/// A single-element registry short-circuits without consulting the
/// RNG; an empty registry is a fatal precondition violation.
pub fn pick<'a, R: Rng>(providers: &'a [Provider], rng: &mut R) -> Result<&'a Provider> {
    match providers.len() {
        0 => Err(MuralError::Configuration(
            "no wallpaper sources configured".into(),
        )),
        1 => Ok(&providers[0]),
        len => Ok(&providers[rng.random_range(0..len)]),
    }
}
