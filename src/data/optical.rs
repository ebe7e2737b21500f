//! Visual-lookalike ASCII renderings.
//!
//! These are chosen for how a glyph *looks* rather than what it means or how
//! it sounds, so `ß` becomes `B` instead of `ss` and Cyrillic `Р` becomes `P`
//! instead of `R`. Codepoints absent here fall back to the pedantic rendering.

pub(crate) static OPTICAL: &[(u32, &str)] = &[
    // Latin-1 supplement
    (0x00A1, "!"),
    (0x00A2, "c"),
    (0x00A3, "L"),
    (0x00A5, "Y"),
    (0x00A6, "|"),
    (0x00A9, "(c)"),
    (0x00AB, "<<"),
    (0x00AD, "-"),
    (0x00AE, "(R)"),
    (0x00B0, "o"),
    (0x00B1, "+-"),
    (0x00B2, "2"),
    (0x00B3, "3"),
    (0x00B5, "u"),
    (0x00B7, "."),
    (0x00B9, "1"),
    (0x00BB, ">>"),
    (0x00BF, "?"),
    (0x00C6, "AE"),
    (0x00D0, "D"),
    (0x00D7, "x"),
    (0x00D8, "O"),
    (0x00DE, "P"),
    (0x00DF, "B"),
    (0x00E6, "ae"),
    (0x00F0, "d"),
    (0x00F7, "-:-"),
    (0x00F8, "o"),
    (0x00FE, "p"),
    // Latin extended
    (0x0110, "D"),
    (0x0111, "d"),
    (0x0126, "H"),
    (0x0127, "h"),
    (0x0131, "i"),
    (0x0141, "L"),
    (0x0142, "l"),
    (0x0152, "OE"),
    (0x0153, "oe"),
    (0x017F, "f"),
    (0x0192, "f"),
    // Greek
    (0x0391, "A"),
    (0x0392, "B"),
    (0x0395, "E"),
    (0x0396, "Z"),
    (0x0397, "H"),
    (0x0399, "I"),
    (0x039A, "K"),
    (0x039C, "M"),
    (0x039D, "N"),
    (0x039F, "O"),
    (0x03A1, "P"),
    (0x03A4, "T"),
    (0x03A5, "Y"),
    (0x03A7, "X"),
    (0x03B1, "a"),
    (0x03B2, "B"),
    (0x03B3, "y"),
    (0x03B9, "i"),
    (0x03BA, "k"),
    (0x03BD, "v"),
    (0x03BF, "o"),
    (0x03C1, "p"),
    (0x03C4, "t"),
    (0x03C5, "u"),
    (0x03C7, "x"),
    (0x03C9, "w"),
    // Cyrillic
    (0x0405, "S"),
    (0x0406, "I"),
    (0x0408, "J"),
    (0x0410, "A"),
    (0x0412, "B"),
    (0x0415, "E"),
    (0x0417, "3"),
    (0x041A, "K"),
    (0x041C, "M"),
    (0x041D, "H"),
    (0x041E, "O"),
    (0x0420, "P"),
    (0x0421, "C"),
    (0x0422, "T"),
    (0x0423, "Y"),
    (0x0425, "X"),
    (0x042C, "b"),
    (0x0430, "a"),
    (0x0431, "6"),
    (0x0433, "r"),
    (0x0435, "e"),
    (0x043E, "o"),
    (0x043F, "n"),
    (0x0440, "p"),
    (0x0441, "c"),
    (0x0443, "y"),
    (0x0445, "x"),
    (0x044C, "b"),
    (0x0455, "s"),
    (0x0456, "i"),
    (0x0458, "j"),
    // General punctuation
    (0x2010, "-"),
    (0x2011, "-"),
    (0x2012, "-"),
    (0x2013, "-"),
    (0x2014, "-"),
    (0x2015, "-"),
    (0x2018, "'"),
    (0x2019, "'"),
    (0x201A, ","),
    (0x201B, "'"),
    (0x201C, "\""),
    (0x201D, "\""),
    (0x201E, ",,"),
    (0x201F, "\""),
    (0x2022, "*"),
    (0x2026, "..."),
    (0x2032, "'"),
    (0x2033, "\""),
    (0x2039, "<"),
    (0x203A, ">"),
    (0x2044, "/"),
    // Letterlike symbols and currency
    (0x20AC, "E"),
    (0x2122, "TM"),
    (0x2212, "-"),
    (0x2215, "/"),
    (0x2216, "\\"),
    (0x2217, "*"),
    (0x2223, "|"),
];
