use crate::error::Result;
use crate::layout::CountryLayout;
use crate::models::IbanFields;
use crate::util::random_digits;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates `count` formally valid IBANs for `layout`, reproducible by seed.
pub fn generate_ibans(layout: &CountryLayout, count: usize, seed: u64) -> Result<Vec<IbanFields>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(generate_one(layout, &mut rng)?);
    }
    log::debug!(
        "generated {} {} IBANs (seed {})",
        out.len(),
        layout.country_code(),
        seed
    );
    Ok(out)
}

fn generate_one<R: Rng + ?Sized>(layout: &CountryLayout, rng: &mut R) -> Result<IbanFields> {
    let bank_code = random_digits(rng, layout.bank_code_length());
    let branch_code = random_digits(rng, layout.branch_code_length());
    let account_number = random_digits(rng, layout.account_number_length());
    layout.compose(None, &bank_code, &branch_code, &account_number)
}
