//! ISO 639-1 language table: code, English name, native name.

/// One row of the ISO 639-1 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

const fn lang(code: &'static str, name: &'static str, native_name: &'static str) -> Language {
    Language {
        code,
        name,
        native_name,
    }
}

/// All ISO 639-1 languages, ordered by code.
pub static LANGUAGES: &[Language] = &[
    lang("aa", "Afar", "Afaraf"),
    lang("ab", "Abkhaz", "\u{0430}\u{04a7}\u{0441}\u{0443}\u{0430} \u{0431}\u{044b}\u{0437}\u{0448}\u{04d9}\u{0430}"),
    lang("ae", "Avestan", "avesta"),
    lang("af", "Afrikaans", "Afrikaans"),
    lang("ak", "Akan", "Akan"),
    lang("am", "Amharic", "\u{12a0}\u{121b}\u{122d}\u{129b}"),
    lang("an", "Aragonese", "aragon\u{00e9}s"),
    lang("ar", "Arabic", "\u{0627}\u{0644}\u{0639}\u{0631}\u{0628}\u{064a}\u{0629}"),
    lang("as", "Assamese", "\u{0985}\u{09b8}\u{09ae}\u{09c0}\u{09af}\u{09bc}\u{09be}"),
    lang("av", "Avaric", "\u{0430}\u{0432}\u{0430}\u{0440} \u{043c}\u{0430}\u{0446}\u{04c0}"),
    lang("ay", "Aymara", "aymar aru"),
    lang("az", "Azerbaijani", "az\u{0259}rbaycan dili"),
    lang("ba", "Bashkir", "\u{0431}\u{0430}\u{0448}\u{04a1}\u{043e}\u{0440}\u{0442} \u{0442}\u{0435}\u{043b}\u{0435}"),
    lang("be", "Belarusian", "\u{0431}\u{0435}\u{043b}\u{0430}\u{0440}\u{0443}\u{0441}\u{043a}\u{0430}\u{044f} \u{043c}\u{043e}\u{0432}\u{0430}"),
    lang("bg", "Bulgarian", "\u{0431}\u{044a}\u{043b}\u{0433}\u{0430}\u{0440}\u{0441}\u{043a}\u{0438} \u{0435}\u{0437}\u{0438}\u{043a}"),
    lang("bi", "Bislama", "Bislama"),
    lang("bm", "Bambara", "bamanankan"),
    lang("bn", "Bengali", "\u{09ac}\u{09be}\u{0982}\u{09b2}\u{09be}"),
    lang("bo", "Tibetan", "\u{0f56}\u{0f7c}\u{0f51}\u{0f0b}\u{0f61}\u{0f72}\u{0f42}"),
    lang("br", "Breton", "brezhoneg"),
    lang("bs", "Bosnian", "bosanski jezik"),
    lang("ca", "Catalan", "Catal\u{00e0}"),
    lang("ce", "Chechen", "\u{043d}\u{043e}\u{0445}\u{0447}\u{0438}\u{0439}\u{043d} \u{043c}\u{043e}\u{0442}\u{0442}"),
    lang("ch", "Chamorro", "Chamoru"),
    lang("co", "Corsican", "corsu"),
    lang("cr", "Cree", "\u{14c0}\u{1426}\u{1403}\u{152d}\u{140d}\u{140f}\u{1423}"),
    lang("cs", "Czech", "\u{010d}e\u{0161}tina"),
    lang("cu", "Old Church Slavonic", "\u{0469}\u{0437}\u{044b}\u{043a}\u{044a} \u{0441}\u{043b}\u{043e}\u{0432}\u{0463}\u{043d}\u{044c}\u{0441}\u{043a}\u{044a}"),
    lang("cv", "Chuvash", "\u{0447}\u{04d1}\u{0432}\u{0430}\u{0448} \u{0447}\u{04d7}\u{043b}\u{0445}\u{0438}"),
    lang("cy", "Welsh", "Cymraeg"),
    lang("da", "Danish", "dansk"),
    lang("de", "German", "Deutsch"),
    lang("dv", "Divehi", "\u{078b}\u{07a8}\u{0788}\u{07ac}\u{0780}\u{07a8}"),
    lang("dz", "Dzongkha", "\u{0f62}\u{0fab}\u{0f7c}\u{0f44}\u{0f0b}\u{0f41}"),
    lang("ee", "Ewe", "E\u{028b}egbe"),
    lang("el", "Greek", "\u{0395}\u{03bb}\u{03bb}\u{03b7}\u{03bd}\u{03b9}\u{03ba}\u{03ac}"),
    lang("en", "English", "English"),
    lang("eo", "Esperanto", "Esperanto"),
    lang("es", "Spanish", "Espa\u{00f1}ol"),
    lang("et", "Estonian", "eesti"),
    lang("eu", "Basque", "euskara"),
    lang("fa", "Persian", "\u{0641}\u{0627}\u{0631}\u{0633}\u{06cc}"),
    lang("ff", "Fula", "Fulfulde"),
    lang("fi", "Finnish", "suomi"),
    lang("fj", "Fijian", "vosa Vakaviti"),
    lang("fo", "Faroese", "f\u{00f8}royskt"),
    lang("fr", "French", "Fran\u{00e7}ais"),
    lang("fy", "Western Frisian", "Frysk"),
    lang("ga", "Irish", "Gaeilge"),
    lang("gd", "Scottish Gaelic", "G\u{00e0}idhlig"),
    lang("gl", "Galician", "galego"),
    lang("gn", "Guaran\u{00ed}", "Ava\u{00f1}e'\u{1ebd}"),
    lang("gu", "Gujarati", "\u{0a97}\u{0ac1}\u{0a9c}\u{0ab0}\u{0abe}\u{0aa4}\u{0ac0}"),
    lang("gv", "Manx", "Gaelg"),
    lang("ha", "Hausa", "\u{0647}\u{064e}\u{0648}\u{064f}\u{0633}\u{064e}"),
    lang("he", "Hebrew", "\u{05e2}\u{05d1}\u{05e8}\u{05d9}\u{05ea}"),
    lang("hi", "Hindi", "\u{0939}\u{093f}\u{0928}\u{094d}\u{0926}\u{0940}"),
    lang("ho", "Hiri Motu", "Hiri Motu"),
    lang("hr", "Croatian", "Hrvatski"),
    lang("ht", "Haitian", "Krey\u{00f2}l ayisyen"),
    lang("hu", "Hungarian", "magyar"),
    lang("hy", "Armenian", "\u{0540}\u{0561}\u{0575}\u{0565}\u{0580}\u{0565}\u{0576}"),
    lang("hz", "Herero", "Otjiherero"),
    lang("ia", "Interlingua", "Interlingua"),
    lang("id", "Indonesian", "Bahasa Indonesia"),
    lang("ie", "Interlingue", "Interlingue"),
    lang("ig", "Igbo", "As\u{1ee5}s\u{1ee5} Igbo"),
    lang("ii", "Nuosu", "\u{a188}\u{a320}\u{a4bf} Nuosuhxop"),
    lang("ik", "Inupiaq", "I\u{00f1}upiaq"),
    lang("io", "Ido", "Ido"),
    lang("is", "Icelandic", "\u{00cd}slenska"),
    lang("it", "Italian", "Italiano"),
    lang("iu", "Inuktitut", "\u{1403}\u{14c4}\u{1483}\u{144e}\u{1450}\u{1466}"),
    lang("ja", "Japanese", "\u{65e5}\u{672c}\u{8a9e}"),
    lang("jv", "Javanese", "basa Jawa"),
    lang("ka", "Georgian", "\u{10e5}\u{10d0}\u{10e0}\u{10d7}\u{10e3}\u{10da}\u{10d8}"),
    lang("kg", "Kongo", "Kikongo"),
    lang("ki", "Kikuyu", "G\u{0129}k\u{0169}y\u{0169}"),
    lang("kj", "Kwanyama", "Kuanyama"),
    lang("kk", "Kazakh", "\u{049b}\u{0430}\u{0437}\u{0430}\u{049b} \u{0442}\u{0456}\u{043b}\u{0456}"),
    lang("kl", "Kalaallisut", "kalaallisut"),
    lang("km", "Khmer", "\u{1781}\u{17c1}\u{1798}\u{179a}\u{1797}\u{17b6}\u{179f}\u{17b6}"),
    lang("kn", "Kannada", "\u{0c95}\u{0ca8}\u{0ccd}\u{0ca8}\u{0ca1}"),
    lang("ko", "Korean", "\u{d55c}\u{ad6d}\u{c5b4}"),
    lang("kr", "Kanuri", "Kanuri"),
    lang("ks", "Kashmiri", "\u{0915}\u{0936}\u{094d}\u{092e}\u{0940}\u{0930}\u{0940}"),
    lang("ku", "Kurdish", "Kurd\u{00ee}"),
    lang("kv", "Komi", "\u{043a}\u{043e}\u{043c}\u{0438} \u{043a}\u{044b}\u{0432}"),
    lang("kw", "Cornish", "Kernewek"),
    lang("ky", "Kyrgyz", "\u{041a}\u{044b}\u{0440}\u{0433}\u{044b}\u{0437}\u{0447}\u{0430}"),
    lang("la", "Latin", "latine"),
    lang("lb", "Luxembourgish", "L\u{00eb}tzebuergesch"),
    lang("lg", "Ganda", "Luganda"),
    lang("li", "Limburgish", "Limburgs"),
    lang("ln", "Lingala", "Ling\u{00e1}la"),
    lang("lo", "Lao", "\u{0e9e}\u{0eb2}\u{0eaa}\u{0eb2}\u{0ea5}\u{0eb2}\u{0ea7}"),
    lang("lt", "Lithuanian", "lietuvi\u{0173} kalba"),
    lang("lu", "Luba-Katanga", "Kiluba"),
    lang("lv", "Latvian", "latvie\u{0161}u valoda"),
    lang("mg", "Malagasy", "fiteny malagasy"),
    lang("mh", "Marshallese", "Kajin M\u{0327}aje\u{013c}"),
    lang("mi", "M\u{0101}ori", "te reo M\u{0101}ori"),
    lang("mk", "Macedonian", "\u{043c}\u{0430}\u{043a}\u{0435}\u{0434}\u{043e}\u{043d}\u{0441}\u{043a}\u{0438} \u{0458}\u{0430}\u{0437}\u{0438}\u{043a}"),
    lang("ml", "Malayalam", "\u{0d2e}\u{0d32}\u{0d2f}\u{0d3e}\u{0d33}\u{0d02}"),
    lang("mn", "Mongolian", "\u{041c}\u{043e}\u{043d}\u{0433}\u{043e}\u{043b} \u{0445}\u{044d}\u{043b}"),
    lang("mr", "Marathi", "\u{092e}\u{0930}\u{093e}\u{0920}\u{0940}"),
    lang("ms", "Malay", "Bahasa Melayu"),
    lang("mt", "Maltese", "Malti"),
    lang("my", "Burmese", "\u{1017}\u{1019}\u{102c}\u{1005}\u{102c}"),
    lang("na", "Nauru", "Dorerin Naoero"),
    lang("nb", "Norwegian Bokm\u{00e5}l", "Norsk bokm\u{00e5}l"),
    lang("nd", "Northern Ndebele", "isiNdebele"),
    lang("ne", "Nepali", "\u{0928}\u{0947}\u{092a}\u{093e}\u{0932}\u{0940}"),
    lang("ng", "Ndonga", "Owambo"),
    lang("nl", "Dutch", "Nederlands"),
    lang("nn", "Norwegian Nynorsk", "Norsk nynorsk"),
    lang("no", "Norwegian", "Norsk"),
    lang("nr", "Southern Ndebele", "isiNdebele"),
    lang("nv", "Navajo", "Din\u{00e9} bizaad"),
    lang("ny", "Chichewa", "chiChe\u{0175}a"),
    lang("oc", "Occitan", "occitan"),
    lang("oj", "Ojibwe", "\u{140a}\u{14c2}\u{1511}\u{14c8}\u{142f}\u{14a7}\u{140e}\u{14d0}"),
    lang("om", "Oromo", "Afaan Oromoo"),
    lang("or", "Oriya", "\u{0b13}\u{0b21}\u{0b3c}\u{0b3f}\u{0b06}"),
    lang("os", "Ossetian", "\u{0438}\u{0440}\u{043e}\u{043d} \u{00e6}\u{0432}\u{0437}\u{0430}\u{0433}"),
    lang("pa", "Panjabi", "\u{0a2a}\u{0a70}\u{0a1c}\u{0a3e}\u{0a2c}\u{0a40}"),
    lang("pi", "P\u{0101}li", "\u{092a}\u{093e}\u{0934}\u{093f}"),
    lang("pl", "Polish", "Polski"),
    lang("ps", "Pashto", "\u{067e}\u{069a}\u{062a}\u{0648}"),
    lang("pt", "Portuguese", "Portugu\u{00ea}s"),
    lang("qu", "Quechua", "Runa Simi"),
    lang("rm", "Romansh", "rumantsch grischun"),
    lang("rn", "Kirundi", "Ikirundi"),
    lang("ro", "Romanian", "Rom\u{00e2}n\u{0103}"),
    lang("ru", "Russian", "\u{0420}\u{0443}\u{0441}\u{0441}\u{043a}\u{0438}\u{0439}"),
    lang("rw", "Kinyarwanda", "Ikinyarwanda"),
    lang("sa", "Sanskrit", "\u{0938}\u{0902}\u{0938}\u{094d}\u{0915}\u{0943}\u{0924}\u{092e}\u{094d}"),
    lang("sc", "Sardinian", "sardu"),
    lang("sd", "Sindhi", "\u{0938}\u{093f}\u{0928}\u{094d}\u{0927}\u{0940}"),
    lang("se", "Northern Sami", "Davvis\u{00e1}megiella"),
    lang("sg", "Sango", "y\u{00e2}ng\u{00e2} t\u{00ee} s\u{00e4}ng\u{00f6}"),
    lang("si", "Sinhala", "\u{0dc3}\u{0dd2}\u{0d82}\u{0dc4}\u{0dbd}"),
    lang("sk", "Slovak", "sloven\u{010d}ina"),
    lang("sl", "Slovenian", "sloven\u{0161}\u{010d}ina"),
    lang("sm", "Samoan", "gagana fa'a Samoa"),
    lang("sn", "Shona", "chiShona"),
    lang("so", "Somali", "Soomaaliga"),
    lang("sq", "Albanian", "Shqip"),
    lang("sr", "Serbian", "\u{0441}\u{0440}\u{043f}\u{0441}\u{043a}\u{0438} \u{0458}\u{0435}\u{0437}\u{0438}\u{043a}"),
    lang("ss", "Swati", "SiSwati"),
    lang("st", "Southern Sotho", "Sesotho"),
    lang("su", "Sundanese", "Basa Sunda"),
    lang("sv", "Swedish", "Svenska"),
    lang("sw", "Swahili", "Kiswahili"),
    lang("ta", "Tamil", "\u{0ba4}\u{0bae}\u{0bbf}\u{0bb4}\u{0bcd}"),
    lang("te", "Telugu", "\u{0c24}\u{0c46}\u{0c32}\u{0c41}\u{0c17}\u{0c41}"),
    lang("tg", "Tajik", "\u{0442}\u{043e}\u{04b7}\u{0438}\u{043a}\u{04e3}"),
    lang("th", "Thai", "\u{0e44}\u{0e17}\u{0e22}"),
    lang("ti", "Tigrinya", "\u{1275}\u{130d}\u{122d}\u{129b}"),
    lang("tk", "Turkmen", "T\u{00fc}rkmen\u{00e7}e"),
    lang("tl", "Tagalog", "Wikang Tagalog"),
    lang("tn", "Tswana", "Setswana"),
    lang("to", "Tonga", "faka Tonga"),
    lang("tr", "Turkish", "T\u{00fc}rk\u{00e7}e"),
    lang("ts", "Tsonga", "Xitsonga"),
    lang("tt", "Tatar", "\u{0442}\u{0430}\u{0442}\u{0430}\u{0440} \u{0442}\u{0435}\u{043b}\u{0435}"),
    lang("tw", "Twi", "Twi"),
    lang("ty", "Tahitian", "Reo Tahiti"),
    lang("ug", "Uyghur", "\u{0626}\u{06c7}\u{064a}\u{063a}\u{06c7}\u{0631}\u{0686}\u{06d5}"),
    lang("uk", "Ukrainian", "\u{0423}\u{043a}\u{0440}\u{0430}\u{0457}\u{043d}\u{0441}\u{044c}\u{043a}\u{0430}"),
    lang("ur", "Urdu", "\u{0627}\u{0631}\u{062f}\u{0648}"),
    lang("uz", "Uzbek", "\u{040e}\u{0437}\u{0431}\u{0435}\u{043a}"),
    lang("ve", "Venda", "Tshiven\u{1e13}a"),
    lang("vi", "Vietnamese", "Ti\u{1ebf}ng Vi\u{1ec7}t"),
    lang("vo", "Volap\u{00fc}k", "Volap\u{00fc}k"),
    lang("wa", "Walloon", "walon"),
    lang("wo", "Wolof", "Wollof"),
    lang("xh", "Xhosa", "isiXhosa"),
    lang("yi", "Yiddish", "\u{05d9}\u{05d9}\u{05b4}\u{05d3}\u{05d9}\u{05e9}"),
    lang("yo", "Yoruba", "Yor\u{00f9}b\u{00e1}"),
    lang("za", "Zhuang", "Sa\u{026f} cue\u{014b}\u{0185}"),
    lang("zh", "Chinese", "\u{4e2d}\u{6587}"),
    lang("zu", "Zulu", "isiZulu"),
];
