use rand::Rng;

pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let digit = rng.gen_range(0..10);
        out.push(char::from(b'0' + digit as u8));
    }
    out
}

/// Trims and upper-cases a raw identifier.
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Pads `value` on the right with `fill` up to `len` characters, or cuts it.
pub fn fit_right(value: &str, len: usize, fill: char) -> String {
    let mut out: String = value.chars().take(len).collect();
    let count = out.chars().count();
    out.extend(std::iter::repeat(fill).take(len - count));
    out
}

/// Pads `value` on the right with `fill` up to `len` characters; never cuts.
pub fn pad_right(value: &str, len: usize, fill: char) -> String {
    let count = value.chars().count();
    let mut out = value.to_string();
    out.extend(std::iter::repeat(fill).take(len.saturating_sub(count)));
    out
}

/// Renders an IBAN in groups of four characters separated by a space.
pub fn to_paper_format(iban: &str) -> String {
    let mut out = String::with_capacity(iban.len() + iban.len() / 4);
    for (idx, ch) in iban.chars().enumerate() {
        if idx > 0 && idx % 4 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Removes the grouping spaces of the paper format.
pub fn from_paper_format(paper: &str) -> String {
    paper.chars().filter(|ch| *ch != ' ').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn paper_format_groups_by_four() {
        assert_eq!(
            to_paper_format("IT60X0542811101000000123456"),
            "IT60 X054 2811 1010 0000 0012 3456"
        );
        assert_eq!(to_paper_format("BE68539007547034"), "BE68 5390 0754 7034");
        assert_eq!(to_paper_format(""), "");
        assert_eq!(
            from_paper_format("IT60 X054 2811 1010 0000 0012 3456"),
            "IT60X0542811101000000123456"
        );
    }

    #[test]
    fn fit_and_pad() {
        assert_eq!(fit_right("12", 4, ' '), "12  ");
        assert_eq!(fit_right("123456", 4, ' '), "1234");
        assert_eq!(pad_right("123456", 4, '*'), "123456");
        assert_eq!(pad_right("12", 4, '*'), "12**");
    }

    #[test]
    fn random_digits_are_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let digits = random_digits(&mut rng, 32);
        assert_eq!(digits.len(), 32);
        assert!(digits.chars().all(|ch| ch.is_ascii_digit()));
    }
}
