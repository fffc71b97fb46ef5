pub(crate) mod de;
pub(crate) mod ser;

pub use de::ValueDeserializer;
pub use ser::{Serializer, StringSerializer, ValueSerializer};
