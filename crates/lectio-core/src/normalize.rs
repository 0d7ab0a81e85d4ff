//! Diacritic folding for book names and celebration queries.
//!
//! Only the Latin letters that appear in book names and saints' names across the
//! supported languages are folded, in precomposed or decomposed form. Everything
//! else passes through unchanged.

/// Replace accented Latin letters with their unaccented base letters.
///
/// Ligatures expand (`æ` becomes `ae`), so the output may be longer than the input.
/// Combining marks are dropped, so decomposed input (`e` followed by U+0301) folds
/// the same way as its precomposed form.
pub fn fold_diacritics(input: &str) -> String {
    let mut folded = String::with_capacity(input.len());
    for ch in input.chars() {
        match fold_char(ch) {
            Folded::Same => folded.push(ch),
            Folded::Drop => {}
            Folded::One(base) => folded.push(base),
            Folded::Two(first, second) => {
                folded.push(first);
                folded.push(second);
            }
        }
    }
    folded
}

enum Folded {
    Same,
    Drop,
    One(char),
    Two(char, char),
}

fn fold_char(ch: char) -> Folded {
    if ch.is_ascii() {
        return Folded::Same;
    }
    if is_combining_mark(ch) {
        return Folded::Drop;
    }
    let base = match ch {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'Ç' | 'Ć' | 'Č' => 'C',
        'ç' | 'ć' | 'č' => 'c',
        'Ď' => 'D',
        'ď' => 'd',
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'Į' => 'I',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'Ł' => 'L',
        'ł' => 'l',
        'Ñ' | 'Ń' | 'Ň' => 'N',
        'ñ' | 'ń' | 'ň' => 'n',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ő' => 'O',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'Ř' => 'R',
        'ř' => 'r',
        'Ś' | 'Š' | 'Ș' => 'S',
        'ś' | 'š' | 'ș' => 's',
        'Ť' | 'Ț' => 'T',
        'ť' | 'ț' => 't',
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' => 'U',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'Ý' | 'Ÿ' => 'Y',
        'ý' | 'ÿ' => 'y',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        'ź' | 'ż' | 'ž' => 'z',
        'Æ' => return Folded::Two('A', 'E'),
        'æ' => return Folded::Two('a', 'e'),
        'Œ' => return Folded::Two('O', 'E'),
        'œ' => return Folded::Two('o', 'e'),
        'ß' => return Folded::Two('s', 's'),
        _ => return Folded::Same,
    };
    Folded::One(base)
}

fn is_combining_mark(ch: char) -> bool {
    matches!(
        ch,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_ligatures() {
        assert_eq!(fold_diacritics("Thérèse"), "Therese");
        assert_eq!(fold_diacritics("Brébeuf"), "Brebeuf");
        assert_eq!(fold_diacritics("Cæsar Œuvre"), "Caesar OEuvre");
    }

    #[test]
    fn decomposed_marks_are_dropped() {
        assert_eq!(fold_diacritics("Ge\u{301}nesis"), "Genesis");
        assert_eq!(fold_diacritics("The\u{301}re\u{300}se"), "Therese");
        assert_eq!(fold_diacritics("E\u{301}XODUS"), "EXODUS");
        assert_eq!(fold_diacritics("Jo\u{308}\u{323}el"), "Joel");
    }

    #[test]
    fn leaves_ascii_and_other_scripts_alone() {
        assert_eq!(fold_diacritics("1 Cor 13:1-13"), "1 Cor 13:1-13");
        assert_eq!(fold_diacritics("Ἰησοῦς"), "Ἰησοῦς");
    }
}
