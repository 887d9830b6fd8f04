
#[cfg(feature = "std")]
mod property_equivalence;
