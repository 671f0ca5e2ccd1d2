/// Generic Montgomery-form prime field backend, parameterised by a modulus
/// marker type and a limb count.
pub mod montgomery_backed_prime_field;
