use rand::seq::SliceRandom;
use rand::Rng;

/// Decorative alternatives for a lowercase ASCII letter. Every set is
/// non-empty; letters outside a-z have no alternatives.
pub fn alternatives(c: char) -> Option<&'static [&'static str]> {
    let set: &'static [&'static str] = match c {
        'a' => &["α", "ą", "å", "à", "á", "â", "ã", "ä", "æ"],
        'b' => &["β", "b̶", "b̷", "b̸"],
        'c' => &["c̶", "c̷", "c̸", "ç"],
        'd' => &["d̶", "d̷", "d̸", "đ"],
        'e' => &["ε", "ę", "è", "é", "ê", "ë"],
        'f' => &["f̶", "f̷", "f̸"],
        'g' => &["g̶", "g̷", "g̸"],
        'h' => &["h̶", "h̷", "h̸"],
        'i' => &["ι", "ì", "í", "î", "ï"],
        'j' => &["j̶", "j̷", "j̸"],
        'k' => &["k̶", "k̷", "k̸"],
        'l' => &["l̶", "l̷", "l̸", "ł"],
        'm' => &["m̶", "m̷", "m̸"],
        'n' => &["n̶", "n̷", "n̸", "ñ"],
        'o' => &["ο", "ò", "ó", "ô", "õ", "ö", "ø"],
        'p' => &["p̶", "p̷", "p̸"],
        'q' => &["q̶", "q̷", "q̸"],
        'r' => &["r̶", "r̷", "r̸"],
        's' => &["s̶", "s̷", "s̸", "š"],
        't' => &["t̶", "t̷", "t̸"],
        'u' => &["υ", "ù", "ú", "û", "ü"],
        'v' => &["v̶", "v̷", "v̸"],
        'w' => &["w̶", "w̷", "w̸"],
        'x' => &["x̶", "x̷", "x̸"],
        'y' => &["y̶", "y̷", "y̸", "ý"],
        'z' => &["z̶", "z̷", "z̸", "ž"],
        _ => return None,
    };
    Some(set)
}

/// Restyle a name one character at a time. Letters are looked up
/// lowercase and replaced by a uniformly random glyph from their
/// alternative set (a fresh draw per character, per call); everything
/// else passes through unchanged. Total on all input, including "".
pub fn style_name(name: &str, rng: &mut impl Rng) -> String {
    let mut styled = String::with_capacity(name.len());
    for ch in name.chars() {
        match alternatives(ch.to_ascii_lowercase()).and_then(|set| set.choose(rng)) {
            Some(glyph) => styled.push_str(glyph),
            None => styled.push(ch),
        }
    }
    styled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_lowercase_letter_maps_into_its_set() {
        let mut rng = rand::thread_rng();
        for c in 'a'..='z' {
            let set = alternatives(c).unwrap();
            assert!(!set.is_empty(), "empty glyph set for '{c}'");
            for _ in 0..20 {
                let styled = style_name(&c.to_string(), &mut rng);
                assert!(
                    set.contains(&styled.as_str()),
                    "styled '{c}' -> {styled:?} not in its glyph set"
                );
            }
        }
    }

    #[test]
    fn uppercase_letters_use_the_lowercase_set() {
        let mut rng = rand::thread_rng();
        let set = alternatives('a').unwrap();
        let styled = style_name("A", &mut rng);
        assert!(set.contains(&styled.as_str()));
    }

    #[test]
    fn non_letters_pass_through_unchanged() {
        let mut rng = rand::thread_rng();
        for input in ["7", " ", "!", "-", "😀", "д", "3 2 1."] {
            assert_eq!(style_name(input, &mut rng), input);
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let mut rng = rand::thread_rng();
        assert_eq!(style_name("", &mut rng), "");
    }

    #[test]
    fn mixed_input_keeps_separators_in_place() {
        let mut rng = rand::thread_rng();
        let styled = style_name("jo hn-7", &mut rng);
        // One output glyph per input char; separators survive verbatim.
        let parts: Vec<&str> = styled.split(' ').collect();
        assert_eq!(parts.len(), 2);
        assert!(styled.contains('-'));
        assert!(styled.ends_with('7'));
    }

    #[test]
    fn seeded_rng_makes_styling_deterministic() {
        let a = style_name("alice", &mut StdRng::seed_from_u64(7));
        let b = style_name("alice", &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
