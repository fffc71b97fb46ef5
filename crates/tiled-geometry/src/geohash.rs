//! Minimal geohash encoder, used only as a cache-key path component.
//!
//! This intentionally does not decode geohashes or support neighbor lookups
//! (that belongs to the `geo::hash` module in the rest of this workspace);
//! it exists purely to reproduce the directory-partitioning scheme the
//! original service used (`{layer}_.../{geohash}/{z}/{x}_{y}.png`).

const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Encodes a lat/lon pair into a geohash string of `precision` characters.
pub fn geohash(lat: f64, lon: f64, precision: usize) -> String {
    let mut lat_range = (-90.0f64, 90.0f64);
    let mut lon_range = (-180.0f64, 180.0f64);

    let mut out = Vec::with_capacity(precision);
    let mut bit = 0u8;
    let mut ch = 0u8;
    let mut even = true;

    while out.len() < precision {
        if even {
            let mid = (lon_range.0 + lon_range.1) / 2.0;
            if lon >= mid {
                ch |= 1 << (4 - bit);
                lon_range.0 = mid;
            } else {
                lon_range.1 = mid;
            }
        } else {
            let mid = (lat_range.0 + lat_range.1) / 2.0;
            if lat >= mid {
                ch |= 1 << (4 - bit);
                lat_range.0 = mid;
            } else {
                lat_range.1 = mid;
            }
        }

        even = !even;

        if bit < 4 {
            bit += 1;
        } else {
            out.push(BASE32[ch as usize]);
            bit = 0;
            ch = 0;
        }
    }

    String::from_utf8(out).expect("BASE32 alphabet is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_and_deterministic() {
        let a = geohash(44.021825, -121.364953, 6);
        let b = geohash(44.021825, -121.364953, 6);
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
    }

    #[test]
    fn nearby_points_share_a_prefix() {
        let a = geohash(44.021825, -121.364953, 6);
        let b = geohash(44.021900, -121.364900, 6);
        assert_eq!(&a[..3], &b[..3]);
    }
}
