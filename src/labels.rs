//! Word segmentation for tile labels and legend captions.

/// Splits a tile label into stacked fragments.
///
/// A break falls before an uppercase character that is followed by a
/// non-uppercase character and preceded by whitespace or a lowercase
/// character. Whitespace right before a break is dropped, so both
/// `"Stranger Things"` and `"StrangerThings"` give `["Stranger", "Things"]`,
/// while `"Grand Theft Auto V"` keeps `"Auto V"` together.
pub fn split_label(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut out = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && breaks_before(&chars, i) {
            push_fragment(&mut out, &current);
            current.clear();
        }
        current.push(c);
    }
    push_fragment(&mut out, &current);
    out
}

fn breaks_before(chars: &[char], i: usize) -> bool {
    let c = chars[i];
    let prev = chars[i - 1];
    let Some(&next) = chars.get(i + 1) else {
        return false;
    };
    c.is_uppercase() && !next.is_uppercase() && (prev.is_whitespace() || prev.is_lowercase())
}

fn push_fragment(out: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

/// Whitespace split used for legend captions.
pub fn split_words(name: &str) -> Vec<String> {
    name.split_whitespace().map(str::to_string).collect()
}
