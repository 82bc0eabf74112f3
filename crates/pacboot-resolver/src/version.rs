use std::cmp::Ordering;
use std::fmt;

/// How two version tokens from the index are ordered.
///
/// `Lexical` is the default and compares tokens as plain strings, so `"10"`
/// sorts before `"9"`. `Alpm` is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionOrder {
    #[default]
    Lexical,
    /// `[epoch:]version[-release]`, compared segment-wise like pacman's vercmp
    Alpm,
}

impl VersionOrder {
    #[must_use]
    pub fn compare(self, left: &str, right: &str) -> Ordering {
        match self {
            Self::Lexical => left.cmp(right),
            Self::Alpm => alpm_vercmp(left, right),
        }
    }

    /// True only when `candidate` sorts strictly after `current`.
    #[must_use]
    pub fn is_newer(self, candidate: &str, current: &str) -> bool {
        self.compare(candidate, current) == Ordering::Greater
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Alpm => "alpm",
        }
    }
}

impl fmt::Display for VersionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Splits `[epoch:]version[-release]`. A missing or empty epoch is `"0"`;
/// the release starts after the last dash.
fn split_evr(evr: &str) -> (&str, &str, Option<&str>) {
    let digits = evr.bytes().take_while(u8::is_ascii_digit).count();
    let (epoch, after_epoch) = evr.split_at(digits);

    let (epoch, rest) = match after_epoch.strip_prefix(':') {
        Some(rest) if epoch.is_empty() => ("0", rest),
        Some(rest) => (epoch, rest),
        None => ("0", evr),
    };

    match rest.rsplit_once('-') {
        Some((version, release)) => (epoch, version, Some(release)),
        None => (epoch, rest, None),
    }
}

fn alpm_vercmp(left: &str, right: &str) -> Ordering {
    if left == right {
        return Ordering::Equal;
    }

    let (left_epoch, left_version, left_release) = split_evr(left);
    let (right_epoch, right_version, right_release) = split_evr(right);

    segment_cmp(left_epoch, right_epoch)
        .then_with(|| segment_cmp(left_version, right_version))
        .then_with(|| match (left_release, right_release) {
            (Some(l), Some(r)) => segment_cmp(l, r),
            _ => Ordering::Equal,
        })
}

fn split_while(bytes: &[u8], pred: impl Fn(&u8) -> bool) -> (&[u8], &[u8]) {
    let end = bytes.iter().position(|c| !pred(c)).unwrap_or(bytes.len());
    bytes.split_at(end)
}

fn numeric_cmp(left: &[u8], right: &[u8]) -> Ordering {
    let (_, left) = split_while(left, |c| *c == b'0');
    let (_, right) = split_while(right, |c| *c == b'0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

/// Alternating numeric/alpha segment comparison. Numeric segments beat
/// alpha ones, and a trailing alpha segment loses to nothing (`1.0a < 1.0`).
fn segment_cmp(left: &str, right: &str) -> Ordering {
    if left == right {
        return Ordering::Equal;
    }

    let mut one = left.as_bytes();
    let mut two = right.as_bytes();

    while !one.is_empty() && !two.is_empty() {
        let (sep_one, rest_one) = split_while(one, |c| !c.is_ascii_alphanumeric());
        let (sep_two, rest_two) = split_while(two, |c| !c.is_ascii_alphanumeric());
        one = rest_one;
        two = rest_two;

        if one.is_empty() || two.is_empty() {
            break;
        }
        if sep_one.len() != sep_two.len() {
            return sep_one.len().cmp(&sep_two.len());
        }

        let numeric = one.first().is_some_and(u8::is_ascii_digit);
        let class = |c: &u8| {
            if numeric {
                c.is_ascii_digit()
            } else {
                c.is_ascii_alphabetic()
            }
        };

        let (seg_one, rest_one) = split_while(one, class);
        let (seg_two, rest_two) = split_while(two, class);
        one = rest_one;
        two = rest_two;

        if seg_two.is_empty() {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let ord = if numeric {
            numeric_cmp(seg_one, seg_two)
        } else {
            seg_one.cmp(seg_two)
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    match (one.first(), two.first()) {
        (None, None) => Ordering::Equal,
        (None, Some(c)) if !c.is_ascii_alphabetic() => Ordering::Less,
        (Some(c), _) if c.is_ascii_alphabetic() => Ordering::Less,
        _ => Ordering::Greater,
    }
}
