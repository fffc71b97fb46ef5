//! Three-tier tile cache: in-process L1, shared L2 metadata store, shared
//! L3 object store (spec §4.2).

mod cache;
mod l1;
mod l2;
mod l3;
mod sharding;

pub use cache::{CacheConfig, CacheStats, HybridCache};
pub use l2::{InMemoryL2, KeyInfo, L2Stats, L2Store};
pub use l3::{InMemoryL3, L3Stats, L3Store};
pub use sharding::{cache_key_from_l3_key, shard_prefix, sharded_l3_key, tile_meta_key};

#[cfg(feature = "gcp")]
pub use l2::FirestoreL2;
#[cfg(feature = "gcp")]
pub use l3::GcsL3;
