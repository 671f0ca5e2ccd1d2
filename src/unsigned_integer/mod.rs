/// Fixed-width, multi-limb unsigned integer arithmetic used as the
/// representative type backing the prime fields.
pub mod element;
