use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// Illumina legacy "/1" "/2" mate suffix.
static SUFFIX_MATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/[12]$").unwrap());
// 454/Sanger ".f" ".r" direction suffix.
static SUFFIX_454: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.[fr]$").unwrap());
// Casava 1.8+ structured header; group 1 is the
// instrument:run:flowcell:lane:tile:x:y coordinate part shared by both mates.
static CASAVA_1_8: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^@([a-zA-Z0-9_-]+:\d+:[a-zA-Z0-9_-]+:\d+:\d+:[0-9-]+:[0-9-]+)(\s+|:)[12]:[YN]:\d*[02468]:?[ACGTN_+\d]*$",
    )
    .unwrap()
});

/// Reduce a read-name token to the form shared by both mates of a pair.
///
/// Suffix conventions are tried in a fixed priority order: mate suffix, then
/// 454 suffix, then the Casava 1.8 structured header. A token matching none
/// of them is used as-is, with a warning — pairing may still succeed if both
/// mates carry identical raw names.
pub fn normalize_read_name<'a>(token: &'a str, file: &str) -> Cow<'a, str> {
    if let Some(m) = SUFFIX_MATE.find(token) {
        return Cow::Borrowed(&token[..m.start()]);
    }
    if let Some(m) = SUFFIX_454.find(token) {
        return Cow::Borrowed(&token[..m.start()]);
    }
    if let Some(caps) = CASAVA_1_8.captures(token) {
        if let Some(m) = caps.get(1) {
            return Cow::Borrowed(m.as_str());
        }
    }
    log::warn!("new read name pattern: {token} in file: {file}");
    Cow::Borrowed(token)
}
