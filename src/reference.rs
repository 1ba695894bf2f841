/// `(country_code, country_name, template, is_sepa, currency_code)`.
///
/// Template symbols after the country code: `0` IBAN check digit, `B` bank
/// code, `S` branch code, `K` national check, `C` account number.
pub type CountryEntry = (&'static str, &'static str, &'static str, bool, &'static str);

pub const COUNTRY_TABLE: &[CountryEntry] = &[
    ("AL", "ALBANIA", "AL00BBBBBBBBCCCCCCCCCCCCCCCC", true, "ALL"),
    ("AD", "ANDORRA", "AD00BBBBSSSSCCCCCCCCCCCC", true, "EUR"),
    ("SA", "SAUDI ARABIA", "SA00BBCCCCCCCCCCCCCCCCCC", false, "SAR"),
    ("AT", "AUSTRIA", "AT00BBBBBCCCCCCCCCCC", true, "EUR"),
    ("AZ", "AZERBAIJAN", "AZ00BBBBCCCCCCCCCCCCCCCCCCCC", false, "AZN"),
    ("BH", "BAHRAIN", "BH00BBBBCCCCCCCCCCCCCC", false, "BHD"),
    ("BE", "BELGIUM", "BE00BBBCCCCCCCKK", true, "EUR"),
    ("BA", "BOSNIA AND HERZEGOVINA", "BA00BBBSSSCCCCCCCCKK", false, "BAM"),
    ("BG", "BULGARIA", "BG00BBBBSSSSCCCCCCCCCC", true, "BGN"),
    ("CR", "COSTA RICA", "CR00KBBBCCCCCCCCCCCCCC", false, "CRC"),
    ("HR", "CROATIA", "HR00BBBBBBBCCCCCCCCCC", true, "EUR"),
    ("CY", "CYPRUS", "CY00BBBSSSSSCCCCCCCCCCCCCCCC", true, "EUR"),
    ("CZ", "CZECH REPUBLIC", "CZ00BBBBSSSSSSCCCCCCCCCC", true, "CZK"),
    ("DK", "DENMARK", "DK00BBBBCCCCCCCCCC", true, "DKK"),
    ("EE", "ESTONIA", "EE00BBSSCCCCCCCCCCCK", true, "EUR"),
    ("FO", "FAROE ISLANDS", "FO00CCCCCCCCCCCCCC", false, "DKK"),
    ("FI", "FINLAND", "FI00BBBBBBCCCCCCCK", true, "EUR"),
    ("FR", "FRANCE", "FR00BBBBBSSSSSCCCCCCCCCCCKK", true, "EUR"),
    ("DE", "GERMANY", "DE00BBBBBBBBCCCCCCCCCC", true, "EUR"),
    ("GE", "GEORGIA", "GE00BBCCCCCCCCCCCCCCCC", false, "GEL"),
    ("GI", "GIBRALTAR", "GI00BBBBCCCCCCCCCCCCCCC", true, "GIP"),
    ("GR", "GREECE", "GR00BBBBBBBCCCCCCCCCCCCCCCC", true, "EUR"),
    ("GL", "GREENLAND", "GL00BBBBCCCCCCCCCC", false, "DKK"),
    ("HU", "HUNGARY", "HU00BBBBBBBCCCCCCCCCCCCCCCCC", true, "HUF"),
    ("IS", "ICELAND", "IS00BBBBSSCCCCCCCCCCCCCCCC", true, "ISK"),
    ("IE", "IRELAND", "IE00BBBBSSSSSSCCCCCCCC", true, "EUR"),
    ("IL", "ISRAEL", "IL00BBBSSSCCCCCCCCCCCCC", false, "ILS"),
    ("IT", "ITALY", "IT00KBBBBBSSSSSCCCCCCCCCCCC", true, "EUR"),
    ("LV", "LATVIA", "LV00BBBBCCCCCCCCCCCCC", true, "EUR"),
    ("LB", "LEBANON", "LB00BBBBCCCCCCCCCCCCCCCCCCCC", false, "LBP"),
    ("LI", "LIECHTENSTEIN", "LI00BBBBBCCCCCCCCCCCC", true, "CHF"),
    ("LT", "LITHUANIA", "LT00BBBBBCCCCCCCCCCC", true, "EUR"),
    ("LU", "LUXEMBOURG", "LU00BBBCCCCCCCCCCCCC", true, "EUR"),
    ("KZ", "KAZAKHSTAN", "KZ00BBBCCCCCCCCCCCCC", false, "KZT"),
    ("KW", "KUWAIT", "KW00BBBBCCCCCCCCCCCCCCCCCCCCCC", false, "KWD"),
    ("XK", "KOSOVO", "XK00BBSSCCCCCCCCCCKK", false, "EUR"),
    ("MK", "NORTH MACEDONIA", "MK00BBBCCCCCCCCCCKK", false, "MKD"),
    ("MT", "MALTA", "MT00BBBBSSSSSCCCCCCCCCCCCCCCCCC", true, "EUR"),
    ("MR", "MAURITANIA", "MR00BBBBBSSSSSCCCCCCCCCCCKK", false, "MRU"),
    ("MU", "MAURITIUS", "MU00BBBBBBSSCCCCCCCCCCCCCCCCCC", false, "MUR"),
    ("MD", "MOLDOVA", "MD00BBCCCCCCCCCCCCCCCCCC", false, "MDL"),
    ("MC", "MONACO", "MC00BBBBBSSSSSCCCCCCCCCCCKK", true, "EUR"),
    ("ME", "MONTENEGRO", "ME00BBBCCCCCCCCCCCCCKK", false, "EUR"),
    ("NL", "NETHERLANDS", "NL00BBBBCCCCCCCCCC", true, "EUR"),
    ("NO", "NORWAY", "NO00BBBBCCCCCCK", true, "NOK"),
    ("PL", "POLAND", "PL00BBBSSSSKCCCCCCCCCCCCCCCC", true, "PLN"),
    ("PT", "PORTUGAL", "PT00BBBBBBBBCCCCCCCCCCCKK", true, "EUR"),
    ("DO", "DOMINICAN REPUBLIC", "DO00BBBBCCCCCCCCCCCCCCCCCCCC", false, "DOP"),
    ("RO", "ROMANIA", "RO00BBBBCCCCCCCCCCCCCCCC", true, "RON"),
    ("SM", "SAN MARINO", "SM00KBBBBBSSSSSCCCCCCCCCCCC", true, "EUR"),
    ("RS", "SERBIA", "RS00BBBCCCCCCCCCCCCCKK", false, "RSD"),
    ("SK", "SLOVAKIA", "SK00BBBBSSSSSSCCCCCCCCCC", true, "EUR"),
    ("SI", "SLOVENIA", "SI00BBSSSCCCCCCCCKK", true, "EUR"),
    ("ES", "SPAIN", "ES00BBBBSSSSKKCCCCCCCCCC", true, "EUR"),
    ("SE", "SWEDEN", "SE00BBBBCCCCCCCCCCCCCCCC", true, "SEK"),
    ("CH", "SWITZERLAND", "CH00BBBBBCCCCCCCCCCCC", true, "CHF"),
    ("TR", "TURKEY", "TR00BBBBBKCCCCCCCCCCCCCCCC", false, "TRY"),
    ("TN", "TUNISIA", "TN00BBBBBCCCCCCCCCCCCCCC", false, "TND"),
    ("GB", "UNITED KINGDOM", "GB00BBBBSSSSSSCCCCCCCC", true, "GBP"),
];

/// Country whose layout carries the domestic CIN check.
pub const DOMESTIC_COUNTRY: &str = "IT";
