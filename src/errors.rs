//! Inspecting chains of wrapped errors.

use std::error::Error;

/// Iterates `err` followed by each of its transitive sources.
pub fn chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

/// First error of concrete type `E` in the chain of `err`, `err` itself included.
pub fn error_as<'a, E>(err: &'a (dyn Error + 'static)) -> Option<&'a E>
where
    E: Error + 'static,
{
    chain(err).find_map(|e| e.downcast_ref::<E>())
}
