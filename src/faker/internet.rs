use rand::Rng;

/// Domains reserved for documentation; mail to them never leaves the box.
pub static SAFE_EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

/// Build a mailbox on a reserved domain from a person's name.
///
/// Names are transliterated to lowercase ASCII first so Cyrillic and
/// accented locales still yield valid addresses.
pub fn safe_email<R: Rng + ?Sized>(rng: &mut R, first_name: &str, last_name: &str) -> String {
    let first = slug(first_name);
    let last = slug(last_name);
    let first = if first.is_empty() { "user".to_string() } else { first };
    let last = if last.is_empty() { "customer".to_string() } else { last };

    let user = match rng.gen_range(0..4u8) {
        0 => format!("{}.{}", first, last),
        1 => format!("{}.{}{}", last, first, rng.gen_range(10..100u32)),
        2 => format!("{}{}", first, rng.gen_range(1..10000u32)),
        _ => format!("{}{}{}", &first[..1], last, rng.gen_range(1..1000u32)),
    };
    let domain = SAFE_EMAIL_DOMAINS[rng.gen_range(0..SAFE_EMAIL_DOMAINS.len())];
    format!("{}@{}", user, domain)
}

/// Lowercase ASCII rendition of a name, keeping only `[a-z0-9]`.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        let lower: String = ch.to_lowercase().collect();
        for c in lower.chars() {
            if c.is_ascii_alphanumeric() {
                out.push(c);
            } else {
                out.push_str(transliterate(c));
            }
        }
    }
    out
}

fn transliterate(c: char) -> &'static str {
    match c {
        // Latin with diacritics
        'á' | 'à' | 'â' | 'ä' | 'ą' | 'ã' => "a",
        'č' | 'ć' | 'ç' => "c",
        'ď' | 'đ' => "d",
        'é' | 'è' | 'ê' | 'ë' | 'ě' | 'ę' => "e",
        'í' | 'ì' | 'î' | 'ï' => "i",
        'ľ' | 'ĺ' | 'ł' => "l",
        'ň' | 'ń' | 'ñ' => "n",
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => "o",
        'ř' | 'ŕ' => "r",
        'š' | 'ś' => "s",
        'ť' => "t",
        'ú' | 'ù' | 'û' | 'ü' | 'ů' => "u",
        'ý' | 'ÿ' => "y",
        'ž' | 'ź' | 'ż' => "z",
        'ß' => "ss",
        // Cyrillic (Russian, Bulgarian, Serbian)
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'ђ' => "dj",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' | 'ы' => "i",
        'й' | 'ј' => "j",
        'к' => "k",
        'л' => "l",
        'љ' => "lj",
        'м' => "m",
        'н' => "n",
        'њ' => "nj",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'ћ' => "c",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "c",
        'ч' => "ch",
        'џ' => "dz",
        'ш' => "sh",
        'щ' => "sht",
        'ъ' => "a",
        'ь' => "",
        'ю' => "yu",
        'я' => "ya",
        _ => "",
    }
}
