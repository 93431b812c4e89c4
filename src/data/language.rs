//! UI language codes and the IronOS locale hashing scheme.
//!
//! IronOS does not store locale strings on the device. The UI language
//! setting is a 16-bit hash: SHA-1 over the UTF-8 bytes of the language
//! code, the 160-bit digest interpreted as a big integer and reduced
//! modulo 0xFFFF. The constants in [`LanguageCode`] are the pre-computed
//! hashes for the locales shipped with the firmware; the algorithm must
//! be reproduced exactly for wire compatibility.

use sha1::{Digest, Sha1};

/// Known IronOS language codes with their canonical 16-bit hash values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum LanguageCode {
    /// Belarusian.
    Be = 60301,
    /// Bulgarian.
    Bg = 15395,
    /// Czech.
    Cs = 36791,
    /// Danish.
    Da = 63942,
    /// German.
    De = 5496,
    /// Greek.
    El = 5003,
    /// English.
    En = 41431,
    /// Spanish.
    Es = 38713,
    /// Estonian.
    Et = 18074,
    /// Finnish.
    Fi = 25411,
    /// French.
    Fr = 38783,
    /// Croatian.
    Hr = 49773,
    /// Hungarian.
    Hu = 19902,
    /// Italian.
    It = 57867,
    /// Japanese.
    JaJp = 2385,
    /// Lithuanian.
    Lt = 5183,
    /// Norwegian Bokmål.
    Nb = 31043,
    /// Dutch.
    Nl = 22266,
    /// Dutch (Belgium).
    NlBe = 55046,
    /// Polish.
    Pl = 55968,
    /// Portuguese.
    Pt = 56922,
    /// Romanian.
    Ro = 61480,
    /// Russian.
    Ru = 26979,
    /// Slovak.
    Sk = 13916,
    /// Slovenian.
    Sl = 21931,
    /// Serbian (Cyrillic).
    SrCyrl = 41427,
    /// Serbian (Latin).
    SrLatn = 61017,
    /// Swedish.
    Sv = 65456,
    /// Turkish.
    Tr = 9120,
    /// Ukrainian.
    Uk = 29374,
    /// Vietnamese.
    Vi = 20758,
    /// Cantonese (Hong Kong).
    YueHk = 17119,
    /// Chinese (Simplified).
    ZhCn = 44731,
    /// Chinese (Traditional).
    ZhTw = 34289,
}

impl LanguageCode {
    /// All known language codes.
    pub const ALL: [LanguageCode; 34] = [
        Self::Be,
        Self::Bg,
        Self::Cs,
        Self::Da,
        Self::De,
        Self::El,
        Self::En,
        Self::Es,
        Self::Et,
        Self::Fi,
        Self::Fr,
        Self::Hr,
        Self::Hu,
        Self::It,
        Self::JaJp,
        Self::Lt,
        Self::Nb,
        Self::Nl,
        Self::NlBe,
        Self::Pl,
        Self::Pt,
        Self::Ro,
        Self::Ru,
        Self::Sk,
        Self::Sl,
        Self::SrCyrl,
        Self::SrLatn,
        Self::Sv,
        Self::Tr,
        Self::Uk,
        Self::Vi,
        Self::YueHk,
        Self::ZhCn,
        Self::ZhTw,
    ];

    /// The canonical on-device hash for this language.
    pub fn as_hash(self) -> u16 {
        self as u16
    }

    /// Reverse-lookup a language from its on-device hash.
    ///
    /// Returns `None` if the hash is not in the compiled table. The device
    /// may report a valid hash for a language this library does not know;
    /// that is not an error.
    pub fn from_hash(hash: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|code| code.as_hash() == hash)
    }

    /// The language code string as the firmware spells it.
    pub fn code(self) -> &'static str {
        match self {
            Self::Be => "BE",
            Self::Bg => "BG",
            Self::Cs => "CS",
            Self::Da => "DA",
            Self::De => "DE",
            Self::El => "EL",
            Self::En => "EN",
            Self::Es => "ES",
            Self::Et => "ET",
            Self::Fi => "FI",
            Self::Fr => "FR",
            Self::Hr => "HR",
            Self::Hu => "HU",
            Self::It => "IT",
            Self::JaJp => "JA_JP",
            Self::Lt => "LT",
            Self::Nb => "NB",
            Self::Nl => "NL",
            Self::NlBe => "NL_BE",
            Self::Pl => "PL",
            Self::Pt => "PT",
            Self::Ro => "RO",
            Self::Ru => "RU",
            Self::Sk => "SK",
            Self::Sl => "SL",
            Self::SrCyrl => "SR_CYRL",
            Self::SrLatn => "SR_LATN",
            Self::Sv => "SV",
            Self::Tr => "TR",
            Self::Uk => "UK",
            Self::Vi => "VI",
            Self::YueHk => "YUE_HK",
            Self::ZhCn => "ZH_CN",
            Self::ZhTw => "ZH_TW",
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A UI language value as read from or written to the device.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// A language in the compiled known-code table.
    Code(LanguageCode),
    /// A hash with no entry in the known-code table, kept as-is.
    Hash(u16),
    /// A free-text language code, hashed on encode.
    Custom(String),
}

impl Language {
    /// The 16-bit wire value for this language.
    pub fn to_hash(&self) -> u16 {
        match self {
            Self::Code(code) => code.as_hash(),
            Self::Hash(hash) => *hash,
            Self::Custom(code) => hash_language_code(code),
        }
    }

    /// Build a language from a raw on-device hash, falling back to
    /// [`Language::Hash`] when the value is not in the known-code table.
    pub fn from_hash(raw: u16) -> Self {
        LanguageCode::from_hash(raw)
            .map(Self::Code)
            .unwrap_or(Self::Hash(raw))
    }
}

impl From<LanguageCode> for Language {
    fn from(code: LanguageCode) -> Self {
        Self::Code(code)
    }
}

/// Hash a free-text language code the way the firmware does.
///
/// SHA-1 over the UTF-8 bytes, digest taken as a 160-bit big-endian
/// integer, reduced modulo 0xFFFF.
pub fn hash_language_code(code: &str) -> u16 {
    let digest = Sha1::digest(code.as_bytes());
    digest
        .iter()
        .fold(0u32, |acc, &byte| ((acc << 8) | u32::from(byte)) % 0xFFFF) as u16
}
