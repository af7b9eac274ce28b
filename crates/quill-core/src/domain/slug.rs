/// Turkish letters folded to their ASCII base after lower-casing.
const TRANSLITERATIONS: [(char, char); 6] = [
    ('ı', 'i'),
    ('ş', 's'),
    ('ğ', 'g'),
    ('ü', 'u'),
    ('ö', 'o'),
    ('ç', 'c'),
];

/// Derive a URL slug from a post title.
///
/// Lower-cases the title, turns spaces into hyphens and folds the Turkish
/// diacritics above. Nothing else is stripped, and uniqueness is left to the
/// storage layer.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' => '-',
            c => TRANSLITERATIONS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_turkish_title() {
        assert_eq!(slugify("Merhaba Dünya"), "merhaba-dunya");
        assert_eq!(slugify("Çığ Düştü Şöyle"), "cig-dustu-soyle");
    }

    #[test]
    fn test_slugify_upper_case_diacritics() {
        assert_eq!(slugify("ŞEKER ÖĞÜN ÇAY"), "seker-ogun-cay");
    }

    #[test]
    fn test_slugify_keeps_other_characters() {
        assert_eq!(slugify("Rust 2024: What's New?"), "rust-2024:-what's-new?");
        assert_eq!(slugify("a  b"), "a--b");
    }

    #[test]
    fn test_slugify_properties() {
        let titles = [
            "Hello World",
            "İstanbul'da Güneşli Bir Gün",
            "  leading and trailing  ",
            "ÇÖĞÜŞI ışık",
            "already-a-slug",
        ];

        for title in titles {
            let slug = slugify(title);
            assert!(!slug.contains(' '), "{slug:?} contains a space");
            assert_eq!(slug, slug.to_lowercase(), "{slug:?} is not lower-case");
            for (from, _) in TRANSLITERATIONS {
                assert!(!slug.contains(from), "{slug:?} still contains {from}");
            }
        }
    }
}
