/// Two-hex-character shard prefix used to fan tile objects out across L3
/// (spec §4.2 `set_png` step 1; §6 "L3 key layout").
pub fn shard_prefix(cache_key: &str) -> String {
    format!("{:x}", md5::compute(cache_key.as_bytes()))[..2].to_string()
}

/// The full L3 object key for a tile cache key.
pub fn sharded_l3_key(cache_key: &str) -> String {
    format!("tiles/{}/{}", shard_prefix(cache_key), cache_key)
}

/// The L2 metadata key that mirrors a tile's L3 object.
pub fn tile_meta_key(cache_key: &str) -> String {
    format!("tile:{cache_key}")
}

/// Inverse of [`sharded_l3_key`]: recovers `cache_key` from an L3 object
/// key, for orphan detection (`tiles/{prefix}/{cache_key}` ->
/// `{cache_key}`). `None` if `l3_key` isn't shaped like a sharded tile key.
pub fn cache_key_from_l3_key(l3_key: &str) -> Option<&str> {
    l3_key.strip_prefix("tiles/")?.split_once('/').map(|(_prefix, cache_key)| cache_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shard_prefix_is_stable() {
        let a = shard_prefix("sentinel_foo/abc/10/1_2.png");
        let b = shard_prefix("sentinel_foo/abc/10/1_2.png");
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn distinct_keys_usually_shard_differently() {
        let a = shard_prefix("sentinel_foo/abc/10/1_2.png");
        let b = shard_prefix("landsat_bar/xyz/10/5_6.png");
        assert_ne!(a, b);
    }

    #[test]
    fn cache_key_from_l3_key_round_trips_through_sharded_l3_key() {
        let cache_key = "sentinel_foo/abc/10/1_2.png";
        let l3_key = sharded_l3_key(cache_key);
        assert_eq!(cache_key_from_l3_key(&l3_key), Some(cache_key));
    }

    #[test]
    fn cache_key_from_l3_key_rejects_unshaped_keys() {
        assert_eq!(cache_key_from_l3_key("not-a-tile-key"), None);
    }
}
