//! The built-in table of public top-level domains.
//!
//! This is a private module. Its public items are re-exported by the crate
//! root.
//!
//! The table is a snapshot of the delegated top-level domains listed in the
//! IANA root zone database, stored lower-case and strictly sorted so that
//! membership can be decided by binary search. It is data, not logic: when
//! the registry changes, the table is regenerated wholesale rather than
//! edited by hand.

use crate::config::Config;
use tracing::trace;

//------------ Lookup --------------------------------------------------------

/// Returns whether `label` is a delegated public top-level domain.
///
/// The label is ASCII-lower-cased before lookup, so `"COM"` and `"com"` are
/// both members. Internationalized top-level domains are present in their
/// punycode form only (e.g. `"xn--p1ai"`); no IDNA conversion is performed.
pub fn is_tld(label: &str) -> bool {
    let folded = label.to_ascii_lowercase();
    TLD_TABLE.binary_search(&folded.as_str()).is_ok()
}

/// Decides TLD validity for `label` under the given configuration.
///
/// A private TLD matcher, if configured, is consulted first and a match
/// succeeds without ever touching the built-in table. A miss falls back to
/// the table; the private data extends the registry, it does not replace it.
pub(crate) fn tld_is_valid(label: &str, config: &Config) -> bool {
    if let Some(matcher) = config.private_tld.as_ref() {
        if matcher.matches(label) {
            return true;
        }
    }
    let known = is_tld(label);
    if !known {
        trace!("label {:?} is not a registered top-level domain", label);
    }
    known
}

//------------ TLD_TABLE -----------------------------------------------------

/// All delegated top-level domains, lower-case, strictly sorted.
static TLD_TABLE: &[&str] = &[
    "ac", "academy", "accountant", "accountants", "actor", "ad", "ae",
    "aero", "af", "ag", "agency", "ai", "airforce", "al", "am", "amsterdam",
    "ao", "apartments", "app", "aq", "ar", "archi", "army", "arpa", "art",
    "as", "asia", "at", "attorney", "au", "auction", "audio", "auto",
    "autos", "aw", "ax", "az", "ba", "baby", "band", "bank", "bar",
    "barcelona", "bargains", "bayern", "bb", "bd", "be", "beauty", "beer",
    "berlin", "best", "bet", "bf", "bg", "bh", "bi", "bid", "bike", "bingo",
    "bio", "biz", "bj", "black", "blog", "blue", "bm", "bn", "bo", "boston",
    "boutique", "box", "br", "broker", "brussels", "bs", "bt", "build",
    "builders", "business", "buzz", "bw", "by", "bz", "bzh", "ca", "cab",
    "cafe", "cam", "camera", "camp", "capetown", "capital", "car", "cards",
    "care", "careers", "cars", "casa", "cash", "casino", "cat", "cc", "cd",
    "center", "ceo", "cf", "cg", "ch", "channel", "chat", "cheap",
    "christmas", "church", "ci", "city", "ck", "cl", "claims", "cleaning",
    "click", "clinic", "clothing", "cloud", "club", "cm", "cn", "co",
    "coach", "codes", "coffee", "college", "cologne", "com", "community",
    "company", "computer", "condos", "construction", "consulting", "contact",
    "contractors", "cooking", "cool", "coop", "country", "coupons",
    "courses", "cr", "credit", "creditcard", "cricket", "cruises", "cu",
    "cv", "cw", "cx", "cy", "cymru", "cz", "dance", "data", "date", "dating",
    "day", "de", "deals", "degree", "delivery", "democrat", "dental",
    "dentist", "design", "dev", "diamonds", "diet", "digital", "direct",
    "directory", "discount", "dj", "dk", "dm", "do", "doctor", "dog",
    "domains", "download", "dubai", "durban", "dz", "earth", "ec", "edu",
    "education", "ee", "eg", "email", "energy", "engineer", "engineering",
    "enterprises", "equipment", "er", "es", "estate", "et", "eu", "eus",
    "events", "exchange", "expert", "exposed", "express", "fail", "faith",
    "family", "fan", "fans", "farm", "fashion", "fi", "film", "finance",
    "financial", "fish", "fishing", "fit", "fitness", "fj", "fk", "flights",
    "florist", "flowers", "fm", "fo", "foo", "football", "forsale", "forum",
    "foundation", "fr", "fun", "fund", "furniture", "futbol", "fyi", "ga",
    "gal", "gallery", "game", "games", "garden", "gay", "gd", "ge", "gf",
    "gg", "gh", "gi", "gift", "gifts", "gives", "gl", "glass", "global",
    "gm", "gmbh", "gn", "gold", "golf", "gov", "gp", "gq", "gr", "graphics",
    "gratis", "green", "gripe", "group", "gs", "gt", "gu", "guide", "guru",
    "gw", "gy", "hair", "hamburg", "haus", "health", "healthcare", "help",
    "helsinki", "hk", "hm", "hn", "hockey", "holdings", "holiday", "homes",
    "horse", "hospital", "host", "hosting", "house", "how", "hr", "ht", "hu",
    "icu", "id", "ie", "il", "im", "immo", "in", "inc", "industries", "info",
    "ink", "institute", "insure", "int", "international", "investments",
    "io", "iq", "ir", "irish", "is", "istanbul", "it", "je", "jewelry", "jm",
    "jo", "jobs", "joburg", "jp", "ke", "kg", "kh", "ki", "kim", "kitchen",
    "kiwi", "km", "kn", "koeln", "kp", "kr", "kw", "ky", "kyoto", "kz", "la",
    "land", "lawyer", "lb", "lc", "lease", "legal", "lgbt", "li", "life",
    "lighting", "limited", "limo", "link", "live", "lk", "loan", "loans",
    "lol", "london", "love", "lr", "ls", "lt", "ltd", "lu", "luxury", "lv",
    "ly", "ma", "madrid", "makeup", "management", "market", "marketing",
    "markets", "mba", "mc", "md", "me", "media", "melbourne", "memorial",
    "men", "menu", "mg", "mh", "miami", "mil", "mk", "ml", "mm", "mn", "mo",
    "mobi", "moda", "moe", "mom", "money", "monster", "mortgage", "moscow",
    "motorcycles", "movie", "mp", "mq", "mr", "ms", "mt", "mu", "museum",
    "mv", "mw", "mx", "my", "mz", "na", "nagoya", "name", "navy", "nc", "ne",
    "net", "network", "new", "news", "nf", "ng", "ni", "ninja", "nl", "no",
    "now", "np", "nr", "nrw", "nu", "nyc", "nz", "observer", "okinawa", "om",
    "one", "online", "ooo", "org", "organic", "osaka", "pa", "page", "paris",
    "partners", "parts", "party", "pe", "pet", "pf", "pg", "ph", "phd",
    "photo", "photography", "photos", "pics", "pictures", "pink", "pizza",
    "pk", "pl", "place", "plumbing", "plus", "pm", "pn", "poker", "porn",
    "post", "pr", "press", "pro", "productions", "prof", "promo",
    "properties", "property", "ps", "pt", "pub", "pw", "py", "qa", "quebec",
    "racing", "radio", "re", "recipes", "red", "rehab", "reise", "reisen",
    "rent", "rentals", "repair", "report", "republican", "rest",
    "restaurant", "review", "reviews", "rich", "rio", "rip", "ro", "rocks",
    "rodeo", "rs", "rsvp", "ru", "ruhr", "run", "rw", "ryukyu", "sa",
    "saarland", "sale", "salon", "sarl", "sb", "sc", "school", "science",
    "scot", "sd", "se", "security", "services", "sex", "sexy", "sg", "sh",
    "shoes", "shop", "shopping", "show", "si", "singles", "site", "sk",
    "ski", "sl", "sm", "sn", "so", "soccer", "social", "software", "solar",
    "solutions", "space", "sport", "sr", "ss", "st", "stockholm", "store",
    "stream", "studio", "study", "style", "su", "sucks", "supplies",
    "supply", "support", "surf", "surgery", "sv", "swiss", "sx", "sy",
    "sydney", "systems", "sz", "taipei", "tax", "taxi", "tc", "td", "team",
    "tech", "technology", "tel", "tennis", "tf", "tg", "th", "theater",
    "tips", "tires", "tirol", "tj", "tk", "tl", "tm", "tn", "to", "today",
    "tokyo", "tools", "top", "tours", "town", "toys", "tr", "trade",
    "trading", "training", "travel", "tt", "tube", "tv", "tw", "tz", "ua",
    "ug", "uk", "university", "uno", "us", "uy", "uz", "va", "vacations",
    "vc", "ve", "vegas", "ventures", "vet", "vg", "vi", "viajes", "video",
    "villas", "vin", "vip", "vision", "vlaanderen", "vn", "vodka", "vote",
    "voting", "voyage", "vu", "wales", "watch", "webcam", "website",
    "wedding", "wf", "wien", "wiki", "win", "wine", "work", "works", "world",
    "ws", "wtf", "xn--3e0b707e", "xn--90a3ac", "xn--90ae", "xn--90ais",
    "xn--d1alf", "xn--e1a4c", "xn--fiqs8s", "xn--fiqz9s", "xn--h2brj9c",
    "xn--j1amh", "xn--j6w193g", "xn--kprw13d", "xn--kpry57d", "xn--l1acc",
    "xn--lgbbat1ad8j", "xn--mgb9awbf", "xn--mgba3a4f16a", "xn--mgbaam7a8h",
    "xn--mgbayh7gpa", "xn--mgberp4a5d4ar", "xn--mix891f", "xn--node",
    "xn--o3cw4h", "xn--p1ai", "xn--pgbs0dh", "xn--qxam", "xn--wgbh1c",
    "xn--wgbl6a", "xn--ygbi2ammx", "xxx", "xyz", "ye", "yoga", "yokohama",
    "yt", "za", "zip", "zm", "zone", "zuerich", "zw",
];

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table_is_strictly_sorted() {
        // Binary search relies on this.
        assert!(TLD_TABLE.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn well_known_members() {
        for tld in ["com", "net", "org", "uk", "de", "museum", "xn--p1ai"] {
            assert!(is_tld(tld), "{} should be in the table", tld);
        }
    }

    #[test]
    fn lookup_folds_case() {
        assert!(is_tld("COM"));
        assert!(is_tld("Com"));
    }

    #[test]
    fn non_members() {
        for label in ["neely", "internal", "local", "1", "", "example"] {
            assert!(!is_tld(label), "{} should not be in the table", label);
        }
    }

    #[test]
    fn private_set_short_circuits_table() {
        use crate::config::TldMatcher;

        let config = Config::new().with_private_tld(TldMatcher::set(["neely"]));
        assert!(tld_is_valid("neely", &config));
        assert!(tld_is_valid("NEELY", &config));
        // A miss still falls back to the built-in table.
        assert!(tld_is_valid("com", &config));
        assert!(!tld_is_valid("frobz", &config));
    }
}
