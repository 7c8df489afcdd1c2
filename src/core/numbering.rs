use rand::Rng;

/// Generate a sample invoice number: `INV-{year}-{4-digit random}`.
///
/// The suffix is drawn uniformly from 1000..=9999, so numbers are *not*
/// guaranteed unique. That is acceptable for a demo/fixture generator; real
/// billing would need a sequence or UUID source instead.
pub fn random_invoice_number<R: Rng + ?Sized>(rng: &mut R, year: i32) -> String {
    format!("INV-{year}-{}", rng.gen_range(1000..=9999))
}

/// Check that a string matches the `INV-<year>-<4 digits>` sample pattern.
pub fn is_sample_number(number: &str) -> bool {
    let Some(rest) = number.strip_prefix("INV-") else {
        return false;
    };
    let Some((year, suffix)) = rest.split_once('-') else {
        return false;
    };
    year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
        && suffix.len() == 4
        && suffix.chars().all(|c| c.is_ascii_digit())
}
