//! Audio language spellings and codes, keyed by canonical name.
//!
//! Codes that are also common English words (`dan`, `fin`, `per`, `ben`,
//! `may`, ...) are left out on purpose.

/// Synthetic tag for releases carrying more than one audio track.
pub const DUAL_AUDIO: &str = "Dual Audio";

pub const LANGUAGES: &[(&str, &[&str])] = &[
    ("English", &["english", "eng", "engl"]),
    ("Hindi", &["hindi", "hin", "hind"]),
    ("Tamil", &["tamil", "tam"]),
    ("Telugu", &["telugu", "tel", "tlg"]),
    ("Malayalam", &["malayalam", "mal", "mlm"]),
    ("Kannada", &["kannada", "kan", "kn"]),
    ("Bengali", &["bengali", "bangla", "beng"]),
    ("Marathi", &["marathi", "mara"]),
    ("Punjabi", &["punjabi", "panjabi", "pbi"]),
    ("Gujarati", &["gujarati", "guj"]),
    ("Urdu", &["urdu", "urd"]),
    ("Odia", &["odia", "oriya"]),
    ("Assamese", &["assamese", "asm"]),
    ("Bhojpuri", &["bhojpuri", "bho"]),
    ("Nepali", &["nepali", "nep"]),
    ("Sinhala", &["sinhala", "sinhalese"]),
    ("Japanese", &["japanese", "jap", "jpn", "jp"]),
    ("Korean", &["korean", "kor", "kr"]),
    ("Chinese", &["chinese", "mandarin", "chi", "chn", "zho"]),
    ("Cantonese", &["cantonese", "yue"]),
    ("Spanish", &["spanish", "espanol", "castellano", "spa", "esp"]),
    ("French", &["french", "francais", "fre", "fra", "vff", "truefrench"]),
    ("German", &["german", "deutsch", "ger", "deu"]),
    ("Italian", &["italian", "italiano", "ita"]),
    ("Russian", &["russian", "rus"]),
    ("Portuguese", &["portuguese", "portugues", "por", "ptbr"]),
    ("Arabic", &["arabic", "ara"]),
    ("Turkish", &["turkish", "turkce", "tur"]),
    ("Persian", &["persian", "farsi", "fas"]),
    ("Indonesian", &["indonesian", "bahasa"]),
    ("Malay", &["malay", "msa"]),
    ("Thai", &["thai", "tha"]),
    ("Vietnamese", &["vietnamese", "vie"]),
    ("Filipino", &["filipino", "tagalog", "tgl"]),
    ("Dutch", &["dutch", "nederlands", "nld", "dut"]),
    ("Swedish", &["swedish", "swe"]),
    ("Norwegian", &["norwegian", "norsk", "nob"]),
    ("Danish", &["danish", "dansk"]),
    ("Finnish", &["finnish", "suomi"]),
    ("Polish", &["polish", "polski", "pol"]),
    ("Czech", &["czech", "cze", "ces"]),
    ("Hungarian", &["hungarian", "magyar", "hun"]),
    ("Greek", &["greek", "gre", "ell"]),
    ("Hebrew", &["hebrew", "heb"]),
    ("Ukrainian", &["ukrainian", "ukr"]),
    ("Romanian", &["romanian", "rum", "ron"]),
    ("Bulgarian", &["bulgarian", "bul"]),
    ("Croatian", &["croatian", "hrv"]),
    ("Serbian", &["serbian", "srp"]),
    (DUAL_AUDIO, &["dual", "audio"]),
];
