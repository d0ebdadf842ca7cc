// Percent-encoding for expanded values

/// RFC 3986 reserved characters (gen-delims and sub-delims)
const RESERVED: [char; 18] = [
    ':', '/', '?', '#', '[', ']', '@', '!', '$', '&', '(', ')', '*', '+', ',', ';', '=', '\'',
];

pub fn is_unreserved(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '~')
}

pub fn is_reserved(ch: char) -> bool {
    RESERVED.contains(&ch)
}

/// Encode every UTF-8 byte of `ch` as an uppercase `%XX` octet
pub fn pct_encode_char(ch: char) -> String {
    let mut buf = [0u8; 4];
    ch.encode_utf8(&mut buf)
        .bytes()
        .map(|byte| format!("%{:02X}", byte))
        .collect()
}

/// Percent-encode everything outside the unreserved set, and outside the
/// reserved set too unless `allow_reserved` is set.
pub fn pct_encode(input: &str, allow_reserved: bool) -> String {
    if !allow_reserved {
        // urlencoding keeps exactly the unreserved set
        return urlencoding::encode(input).into_owned();
    }

    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        if is_unreserved(ch) || is_reserved(ch) {
            output.push(ch);
        } else {
            output.push_str(&pct_encode_char(ch));
        }
    }
    output
}
