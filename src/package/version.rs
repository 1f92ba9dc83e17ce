//! Version ordering for cached packages.
//!
//! NuGet version directories are named `major.minor.patch[.build][-suffix]`,
//! where the suffix is a pre-release label with an optional dotted counter
//! (e.g. `1.2.3-beta.4`). This module parses those identifiers and defines
//! the order used to pick the newest version of a package.

use std::cmp::Ordering;

/// A parsed version identifier.
///
/// Numeric components are kept as floats so that malformed components
/// degrade to NaN instead of failing the parse; comparisons against NaN
/// fall through without panicking and leave the order unspecified.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageVersion {
    /// Up to four release components (major, minor, patch, build).
    /// Missing components are absent, not zero.
    release: Vec<f64>,
    /// Pre-release suffix, when present.
    suffix: Option<Prerelease>,
}

#[derive(Debug, Clone, PartialEq)]
struct Prerelease {
    label: String,
    counter: f64,
}

impl PackageVersion {
    /// Parse a version identifier. Never fails; malformed numeric
    /// components become NaN.
    pub fn parse(text: &str) -> Self {
        let (release, suffix) = match text.split_once('-') {
            Some((release, suffix)) => (release, Some(suffix)),
            None => (text, None),
        };

        let release = release.split('.').take(4).map(parse_component).collect();

        let suffix = suffix.map(|suffix| {
            let (label, counter) = match suffix.split_once('.') {
                Some((label, counter)) => (label, parse_component(counter)),
                None => (suffix, 0.0),
            };
            Prerelease {
                label: label.to_string(),
                counter,
            }
        });

        PackageVersion { release, suffix }
    }

    fn compare_to(&self, other: &Self) -> Ordering {
        for index in 0..4 {
            match (self.release.get(index), other.release.get(index)) {
                (Some(a), Some(b)) => match a.partial_cmp(b) {
                    Some(Ordering::Equal) | None => {}
                    Some(ordering) => return ordering,
                },
                // An absent component is not zero; it falls through to the
                // next comparison level.
                (Some(_), None) | (None, Some(_)) => {}
                (None, None) => break,
            }
        }

        match (&self.suffix, &other.suffix) {
            (None, None) => Ordering::Equal,
            // A final release is newer than any of its pre-releases.
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => match a.label.cmp(&b.label) {
                Ordering::Equal => a.counter.partial_cmp(&b.counter).unwrap_or(Ordering::Equal),
                ordering => ordering,
            },
        }
    }
}

fn parse_component(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

/// Compare two version identifiers.
///
/// Sorting with this comparator and reversing yields newest-first order.
pub fn compare(a: &str, b: &str) -> Ordering {
    PackageVersion::parse(a).compare_to(&PackageVersion::parse(b))
}
