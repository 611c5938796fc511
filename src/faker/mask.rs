use rand::Rng;

/// Fill a mask: `#` becomes a digit, `%` a non-zero digit and `@` an
/// uppercase ASCII letter. Everything else is copied through.
pub fn fill_mask<R: Rng + ?Sized>(rng: &mut R, mask: &str) -> String {
    let mut result = String::with_capacity(mask.len());
    for ch in mask.chars() {
        match ch {
            '#' => result.push(char::from(b'0' + rng.gen_range(0..10u8))),
            '%' => result.push(char::from(b'1' + rng.gen_range(0..9u8))),
            '@' => result.push(char::from(b'A' + rng.gen_range(0..26u8))),
            other => result.push(other),
        }
    }
    result
}
